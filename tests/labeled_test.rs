use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use veil::mapper::create_mapper;
use veil::stages::NodeTransformationStage;
use veil::transforms::stmt_labeled;

fn parse_only(source: &str) -> String {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_module(true);
    let parser = Parser::new(&allocator, source, source_type);
    let parsed = parser.parse();

    if !parsed.errors.is_empty() {
        panic!("Input code could not be parsed: {:?}", parsed.errors);
    }

    let mapper = create_mapper(&allocator);
    let program = mapper.map(parsed.program);

    let codegen: Codegen<false> = Codegen::new(program.span.end as usize, CodegenOptions::default());
    codegen.build(&program)
}

/// Maps with the label renamer only. The mapper's default state carries the
/// incremental generator, so replacement labels are `x0`, `x1`, ...
fn parse_and_map(source: &str) -> String {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_module(true);
    let parser = Parser::new(&allocator, source, source_type);
    let parsed = parser.parse();

    if !parsed.errors.is_empty() {
        panic!("Input code could not be parsed: {:?}", parsed.errors);
    }

    let mut mapper = create_mapper(&allocator);
    stmt_labeled::register(&mut mapper, NodeTransformationStage::Converting);

    let program = mapper.map(parsed.program);
    let codegen: Codegen<false> = Codegen::new(program.span.end as usize, CodegenOptions::default());
    let out = codegen.build(&program);

    {
        let out = out.clone();
        let parser = Parser::new(&allocator, &out, source_type);
        let parsed = parser.parse();
        if !parsed.errors.is_empty() {
            panic!("Transformed code could not be parsed: {:?}\n{}", parsed.errors, out);
        }
    }

    out
}

#[test]
fn test_label_and_its_break_are_renamed_together() {
    let result = parse_and_map(r#"
        outer: while (a) {
            break outer;
        }
    "#);

    assert!(!result.contains("outer"), "{}", result);
    assert!(result.contains("x0"), "{}", result);
    assert!(result.contains("break x0"), "{}", result);
}

#[test]
fn test_continue_label_is_renamed() {
    let result = parse_and_map(r#"
        outer: while (a) {
            continue outer;
        }
    "#);

    assert!(!result.contains("outer"), "{}", result);
    assert!(result.contains("continue x0"), "{}", result);
}

#[test]
fn test_shadowed_label_resolves_to_innermost() {
    let result = parse_and_map(r#"
        a: {
            a: {
                break a;
            }
            break a;
        }
    "#);

    // Outer label becomes x0, inner x1; the inner break targets the inner
    // label, the outer break targets the outer one again once the inner
    // rename has gone out of scope.
    assert!(result.contains("x0"), "{}", result);
    assert!(result.contains("x1"), "{}", result);
    assert!(result.contains("break x1"), "{}", result);
    assert!(result.contains("break x0"), "{}", result);
}

#[test]
fn test_sibling_labels_each_get_their_own_name() {
    let result = parse_and_map(r#"
        first: while (a) {
            break first;
        }
        second: while (b) {
            break second;
        }
    "#);

    assert!(!result.contains("first"), "{}", result);
    assert!(!result.contains("second"), "{}", result);
    assert!(result.contains("break x0"), "{}", result);
    assert!(result.contains("break x1"), "{}", result);
}

#[test]
fn test_unlabeled_jumps_pass_through() {
    let source = r#"
        while (a) {
            if (b) continue;
            break;
        }
    "#;

    assert_eq!(parse_and_map(source), parse_only(source));
}
