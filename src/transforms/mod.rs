pub mod builder;
pub mod stmt_labeled;
pub mod stmt_switch;

use crate::mapper::Mapper;
use crate::stages::NodeTransformationStage;

/// Install every transformer that participates in `stage` onto the mapper.
/// A transformer that registers nothing for a stage simply does not run in
/// it. The order here is the fixed in-stage pipeline order: a later
/// transformer sees whatever an earlier one produced in the same pass.
pub fn register_all<'a>(mapper: &mut Mapper<'a>, stage: NodeTransformationStage) {
    stmt_switch::register(mapper, stage);
    stmt_labeled::register(mapper, stage);
}
