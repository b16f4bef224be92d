use std::cell::RefCell;
use std::rc::Rc;

use oxc_ast::ast::*;

use crate::mapper::{Mapper, MapperAction};
use crate::mapper_state::MapperState;
use crate::stages::NodeTransformationStage;
use crate::transforms::builder::*;
use crate::utils::rule;

/// Rename statement labels through the run's name generator, so `outer:`
/// becomes as opaque as every other identifier. Break/continue references
/// are rewritten against a stack of live renames: pushed when a labeled
/// statement is entered, popped when it is left, which makes shadowing of
/// a reused label name resolve to the nearest enclosing statement.
pub fn register<'a>(mapper: &mut Mapper<'a>, stage: NodeTransformationStage) {
    if stage != NodeTransformationStage::Converting {
        return;
    }

    let state = mapper.state.clone();

    mapper.add_visitor_stmt(move |stmt, allocator, before| match stmt {
        Statement::LabeledStatement(labeled) => {
            if before {
                rule("Rename a statement label");

                let LabeledStatement { label, body, span } = labeled.unbox();
                let original = label.name.to_string();

                let replacement = {
                    let mut state = state.borrow_mut();
                    let replacement = state.names.generate_for_label(&original, None);
                    state.label_scopes.push((original, replacement.clone()));
                    replacement
                };

                (MapperAction::Normal, create_labeled_statement(allocator, replacement, body, span))
            } else {
                // Leaving the labeled statement: its rename goes out of scope.
                state.borrow_mut().label_scopes.pop();
                (MapperAction::Normal, Statement::LabeledStatement(labeled))
            }
        }

        Statement::BreakStatement(break_stmt) if before => {
            let BreakStatement { label, span } = break_stmt.unbox();
            let label = rename_label_reference(&state, label);
            (MapperAction::Normal, create_break_statement(allocator, label, span))
        }

        Statement::ContinueStatement(continue_stmt) if before => {
            let ContinueStatement { label, span } = continue_stmt.unbox();
            let label = rename_label_reference(&state, label);
            (MapperAction::Normal, create_continue_statement(allocator, label, span))
        }

        other => (MapperAction::Normal, other),
    });
}

/// Map a break/continue label through the live renames. Unlabeled jumps
/// and labels with no rename in scope pass through as-is.
fn rename_label_reference(
    state: &Rc<RefCell<MapperState>>,
    label: Option<LabelIdentifier>,
) -> Option<String> {
    label.map(|label| {
        let state = state.borrow();
        match state.renamed_label(label.name.as_str()) {
            Some(renamed) => renamed.to_string(),
            None => label.name.to_string(),
        }
    })
}
