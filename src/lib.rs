pub mod generators;
pub mod mapper;
pub mod mapper_state;
pub mod options;
pub mod random;
pub mod stages;
pub mod transforms;
pub mod utils;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;
use thiserror::Error;

use crate::generators::identifier_names_generator;
use crate::mapper::Mapper;
use crate::mapper_state::MapperState;
use crate::options::{ObfuscatorOptions, OptionsError};
use crate::random::RandomGenerator;
use crate::stages::NodeTransformationStage;

#[wasm_bindgen(getter_with_clone)]
pub struct ObfuscationResult {
    pub obfuscated_code: String,
    pub had_error: bool,
    pub error_message: Option<String>,
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

pub fn console_log(s: String) {
    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", s);

    #[cfg(target_arch = "wasm32")]
    log(&format!("[veil] {}", s));
}

// Simple wrapper for `log(format!())` into `log!()`
// This will println!() in CLI and console.log(format!()) in nodejs etc
#[macro_export]
macro_rules! log {
    ($fmt_str:literal) => {
        $crate::console_log(format!($fmt_str))
    };

    ($fmt_str:literal, $($args:expr),*) => {
        $crate::console_log(format!($fmt_str, $($args),*))
    };
}

/// Everything that can stop a run before it produces output. Transforms
/// themselves never fail; a node they decline to rewrite is left alone.
#[derive(Error, Debug)]
pub enum ObfuscateError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("input could not be parsed: {message}")]
    Parse { message: String },
}

/// WASM entry point. Options arrive as a plain JS object and are
/// deserialized before anything touches the source; every configuration
/// problem surfaces here as an `Err`, never as partial output.
#[wasm_bindgen]
pub fn obfuscate_code(source: &str, options: JsValue) -> Result<ObfuscationResult, JsValue> {
    let options: ObfuscatorOptions =
        serde_wasm_bindgen::from_value(options).map_err(|err| JsValue::from_str(&err.to_string()))?;

    let allocator = Allocator::default();
    let result = match obfuscate_source(source, &options, &allocator) {
        Ok((_program, obfuscated_code)) => Ok(ObfuscationResult {
            obfuscated_code,
            had_error: false,
            error_message: None,
        }),
        Err(err) => Err(JsValue::from_str(&err.to_string())),
    };
    result
}

/// Run the whole pipeline over one source text: parse, walk the tree once
/// per stage with that stage's transformers installed, then print.
///
/// The name generator and the rest of the run state live exactly as long
/// as this call; concurrent runs each bring their own.
pub fn obfuscate_source<'a>(
    source: &'a str,
    options: &ObfuscatorOptions,
    allocator: &'a Allocator,
) -> Result<(Program<'a>, String), ObfuscateError> {
    // Fail fast on configuration before any node is touched.
    let mut random = RandomGenerator::new(options.seed);
    let names = identifier_names_generator(options, &mut random)?;

    let source_type = SourceType::default().with_module(true);
    let parser = Parser::new(allocator, source, source_type);
    let parsed = parser.parse();
    if !parsed.errors.is_empty() {
        return Err(ObfuscateError::Parse { message: format!("{:?}", parsed.errors) });
    }

    let state = Rc::new(RefCell::new(MapperState::new(names)));

    let mut program = parsed.program;
    for stage in NodeTransformationStage::ORDER {
        let mut mapper = Mapper::with_state(allocator, Rc::clone(&state));
        transforms::register_all(&mut mapper, stage);
        program = mapper.map(program);
    }

    let codegen: Codegen<false> = Codegen::new(program.span.end as usize, CodegenOptions::default());
    let obfuscated_code = codegen.build(&program);

    Ok((program, obfuscated_code))
}
