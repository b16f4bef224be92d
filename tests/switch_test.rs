use oxc_allocator::Allocator;
use oxc_codegen::{Codegen, CodegenOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;

use veil::mapper::create_mapper;
use veil::stages::NodeTransformationStage;
use veil::transforms::stmt_switch;

/// Parse and print without transforming. Control output for the cases
/// where the transformer must leave the tree alone.
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

fn parse_and_map(source: &str) -> String {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_module(true);
    let parser = Parser::new(&allocator, source, source_type);
    let parsed = parser.parse();

    if !parsed.errors.is_empty() {
        panic!("Input code could not be parsed: {:?}", parsed.errors);
    }

    let mut mapper = create_mapper(&allocator);
    stmt_switch::register(&mut mapper, NodeTransformationStage::Converting);

    let program = mapper.map(parsed.program);
    let codegen: Codegen<false> = Codegen::new(program.span.end as usize, CodegenOptions::default());
    let out = codegen.build(&program);

    // Whatever the transform produced must still be valid JavaScript. This
    // is what catches a dispatch table emitted without its parentheses.
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
fn test_simple_switch_is_lowered() {
    let result = parse_and_map(r#"
        switch (x) {
            case 1:
                one();
                break;
            case 2:
                two();
                break;
            default:
                other();
                break;
        }
    "#);

    assert!(!result.contains("switch"), "switch should be gone: {}", result);
    assert!(!result.contains("break"), "no break may survive into a thunk: {}", result);
    assert!(result.contains("one()"), "case 1 body must be preserved: {}", result);
    assert!(result.contains("two()"), "case 2 body must be preserved: {}", result);
    assert!(result.contains("other()"), "default body must be preserved: {}", result);
    assert!(result.contains("||"), "lookup must fall back to the default thunk: {}", result);
}

#[test]
fn test_switch_without_default_is_lowered() {
    let result = parse_and_map(r#"
        switch (key) {
            case "a":
                first();
                break;
            case "b":
                second();
                break;
        }
    "#);

    assert!(!result.contains("switch"), "{}", result);
    // Two case thunks plus the synthesized empty default thunk.
    assert_eq!(result.matches("function").count(), 3, "{}", result);
}

#[test]
fn test_discriminant_is_embedded_not_evaluated() {
    let result = parse_and_map(r#"
        switch (getKey()) {
            case 1:
                one();
                break;
        }
    "#);

    assert!(!result.contains("switch"), "{}", result);
    assert_eq!(result.matches("getKey()").count(), 1, "{}", result);
}

#[test]
fn test_case_table_has_entry_per_case_with_default_in_the_middle() {
    let result = parse_and_map(r#"
        switch (x) {
            case 1:
                one();
                break;
            default:
                other();
                break;
            case 2:
                two();
                break;
            case 3:
                three();
                break;
        }
    "#);

    assert!(!result.contains("switch"), "{}", result);
    // Three keyed thunks plus exactly one default thunk.
    assert_eq!(result.matches("function").count(), 4, "{}", result);
    assert!(result.contains("one()"), "{}", result);
    assert!(result.contains("two()"), "{}", result);
    assert!(result.contains("three()"), "{}", result);
    assert!(result.contains("other()"), "{}", result);
}

#[test]
fn test_nested_simple_switches_are_both_lowered() {
    let result = parse_and_map(r#"
        switch (x) {
            case 1:
                switch (y) {
                    case 2:
                        inner();
                        break;
                }
                break;
            case 3:
                outer();
                break;
        }
    "#);

    assert!(!result.contains("switch"), "{}", result);
    assert!(result.contains("inner()"), "{}", result);
    assert!(result.contains("outer()"), "{}", result);
}

#[test]
fn test_missing_trailing_break_is_left_alone() {
    let source = r#"
        switch (x) {
            case 1:
                one();
                break;
            default:
                other();
        }
    "#;

    assert_eq!(parse_and_map(source), parse_only(source));
}

#[test]
fn test_fallthrough_cases_are_left_alone() {
    let source = r#"
        switch (x) {
            case 1:
            case 2:
                shared();
                break;
        }
    "#;

    assert_eq!(parse_and_map(source), parse_only(source));
}

#[test]
fn test_early_break_is_left_alone() {
    let source = r#"
        switch (x) {
            case 1:
                one();
                break;
                late();
                break;
        }
    "#;

    assert_eq!(parse_and_map(source), parse_only(source));
}

#[test]
fn test_nested_early_break_is_left_alone() {
    // The break hides inside an if, where it still binds to the switch.
    let source = r#"
        switch (x) {
            case 1:
                if (y) break;
                one();
                break;
        }
    "#;

    assert_eq!(parse_and_map(source), parse_only(source));
}

#[test]
fn test_labeled_trailing_break_is_left_alone() {
    let source = r#"
        outer: while (x) {
            switch (y) {
                case 1:
                    one();
                    break outer;
            }
        }
    "#;

    assert_eq!(parse_and_map(source), parse_only(source));
}

#[test]
fn test_return_in_case_is_left_alone() {
    // A return moved into a thunk would no longer return from f.
    let source = r#"
        function f(x) {
            switch (x) {
                case 1:
                    return one();
                    break;
            }
        }
    "#;

    assert_eq!(parse_and_map(source), parse_only(source));
}

#[test]
fn test_break_in_nested_loop_still_qualifies() {
    // This break binds to the for loop, not the switch, so the case is
    // safe to move into a thunk.
    let result = parse_and_map(r#"
        switch (x) {
            case 1:
                for (;;) {
                    break;
                }
                done();
                break;
        }
    "#);

    assert!(!result.contains("switch"), "{}", result);
    assert!(result.contains("done()"), "{}", result);
}

#[test]
fn test_declining_twice_is_stable() {
    let source = r#"
        switch (x) {
            case 1:
                one();
        }
    "#;

    let once = parse_and_map(source);
    assert_eq!(once, parse_only(source));

    let twice = parse_and_map(&once);
    assert_eq!(once, twice);
}
