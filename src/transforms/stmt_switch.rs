use oxc_allocator::Allocator;
use oxc_allocator::Box as OxcBox;
use oxc_allocator::Vec as OxcVec;
use oxc_ast::ast::*;

use crate::mapper::{Mapper, MapperAction};
use crate::stages::NodeTransformationStage;
use crate::transforms::builder::*;
use crate::utils::example;
use crate::utils::rule;

/// Lower fallthrough-free switch statements into an object dispatch table.
/// Participates in the converting stage only, on enter, so that nested
/// switches synthesized into the thunks still get their own pass.
pub fn register<'a>(mapper: &mut Mapper<'a>, stage: NodeTransformationStage) {
    if stage != NodeTransformationStage::Converting {
        return;
    }

    mapper.add_visitor_stmt(|stmt, allocator, before| match (before, stmt) {
        (true, Statement::SwitchStatement(switch_stmt)) => {
            transform_switch_statement(switch_stmt.unbox(), allocator)
        }
        (_, other) => (MapperAction::Normal, other),
    });
}

/// Replace
///
/// ```js
/// switch (x) {
///     case 1:
///         console.log("one");
///         break;
///     default:
///         console.log("other");
///         break;
/// }
/// ```
///
/// with
///
/// ```js
/// (({ [1]: function () { console.log("one"); } })[x] || function () { console.log("other"); })();
/// ```
///
/// The rewrite only fires when every case (default included) ends in its
/// own unlabeled `break` and nothing else can jump out of a case body: the
/// dispatch table cannot express fallthrough or an early exit, and a
/// `break` that survived into a thunk would not even parse. Anything that
/// fails that shape is returned untouched; declining is a normal outcome,
/// not an error.
///
/// Case tests become computed keys, embedded unevaluated, so their
/// property-key coercion happens at lookup time with the original
/// semantics. The table is parenthesized so the member access cannot be
/// parsed as a block statement, and the lookup falls back to the default
/// thunk via `||`, mirroring switch's default-only-when-no-match rule for
/// every discriminant that misses the table.
pub fn transform_switch_statement<'a>(
    switch_stmt: SwitchStatement<'a>,
    allocator: &'a Allocator,
) -> (MapperAction, Statement<'a>) {
    if !is_simple_switch(&switch_stmt) {
        return (
            MapperAction::Normal,
            Statement::SwitchStatement(OxcBox(allocator.alloc(switch_stmt))),
        );
    }

    rule("Lower a fallthrough-free switch statement to an object dispatch table");
    example(
        "switch (x) { case 1: one(); break; default: other(); break; }",
        "(({ [1]: function () { one(); } })[x] || function () { other(); })();",
    );

    let SwitchStatement { discriminant, cases, span: switch_span } = switch_stmt;

    // Missing discriminants fall through to an empty thunk unless the
    // switch carries a default case.
    let mut default_thunk = create_function_expression(allocator, OxcVec::new_in(allocator), switch_span);
    let mut case_entries = OxcVec::with_capacity_in(cases.len(), allocator);

    for case in cases {
        let SwitchCase { test, consequent, span: case_span } = case;

        // Drop the trailing break. The precondition guarantees it is the
        // last statement and that no other break targets the switch, so
        // the thunk body is exactly the case's effects.
        let last = consequent.len() - 1;
        let mut thunk_body = OxcVec::with_capacity_in(last, allocator);
        for (index, stmt) in consequent.into_iter().enumerate() {
            if index < last {
                thunk_body.push(stmt);
            }
        }

        let thunk = create_function_expression(allocator, thunk_body, case_span);

        match test {
            None => default_thunk = thunk,
            Some(test) => {
                case_entries.push(create_computed_object_property(allocator, test, thunk, case_span));
            }
        }
    }

    let case_table = create_object_expression(allocator, case_entries, switch_span);

    let lookup = create_computed_member_expression(
        allocator,
        create_parenthesized_expression(allocator, case_table, switch_span),
        discriminant,
        switch_span,
    );

    let dispatch = create_call_expression(
        allocator,
        create_logical_or_expression(allocator, lookup, default_thunk, switch_span),
        OxcVec::new_in(allocator),
        switch_span,
    );

    (
        MapperAction::Normal,
        create_expression_statement(allocator, dispatch, switch_span),
    )
}

/// The safety gate. A switch qualifies when every case clause ends with an
/// unlabeled `break` and contains no other statement that would jump out
/// of the case body once that body is moved into a function.
fn is_simple_switch(switch_stmt: &SwitchStatement) -> bool {
    switch_stmt.cases.iter().all(|case| is_simple_case(&case.consequent))
}

fn is_simple_case(consequent: &[Statement]) -> bool {
    // An empty case has no trailing break and usually means fallthrough.
    let Some((last, leading)) = consequent.split_last() else {
        return false;
    };

    match last {
        Statement::BreakStatement(break_stmt) if break_stmt.label.is_none() => {}
        _ => return false,
    }

    !leading.iter().any(|stmt| escapes_case_body(stmt, false, false))
}

/// Would executing `stmt` inside a thunk behave differently than inside
/// the switch? True for any jump that targets something outside the case
/// body: a break binding to the switch, a continue binding to an enclosing
/// loop, any labeled jump (the label lives outside the thunk), or a
/// `return` (it would return from the thunk, not the enclosing function).
///
/// The scan recurses through nested statements but respects rebinding:
/// loops rebind unlabeled break/continue, nested switches rebind unlabeled
/// break, and function boundaries cut the scan off entirely because no
/// jump can cross them.
fn escapes_case_body(stmt: &Statement, in_loop: bool, in_switch: bool) -> bool {
    match stmt {
        Statement::BreakStatement(break_stmt) => {
            break_stmt.label.is_some() || !(in_loop || in_switch)
        }
        Statement::ContinueStatement(continue_stmt) => {
            continue_stmt.label.is_some() || !in_loop
        }
        Statement::ReturnStatement(_) => true,

        Statement::BlockStatement(block) => {
            block.body.iter().any(|stmt| escapes_case_body(stmt, in_loop, in_switch))
        }
        Statement::IfStatement(if_stmt) => {
            escapes_case_body(&if_stmt.consequent, in_loop, in_switch)
                || if_stmt
                    .alternate
                    .as_ref()
                    .map_or(false, |alt| escapes_case_body(alt, in_loop, in_switch))
        }
        Statement::LabeledStatement(labeled) => escapes_case_body(&labeled.body, in_loop, in_switch),
        Statement::WithStatement(with) => escapes_case_body(&with.body, in_loop, in_switch),
        Statement::TryStatement(try_stmt) => {
            try_stmt.block.body.iter().any(|stmt| escapes_case_body(stmt, in_loop, in_switch))
                || try_stmt.handler.as_ref().map_or(false, |handler| {
                    handler.body.body.iter().any(|stmt| escapes_case_body(stmt, in_loop, in_switch))
                })
                || try_stmt.finalizer.as_ref().map_or(false, |finalizer| {
                    finalizer.body.iter().any(|stmt| escapes_case_body(stmt, in_loop, in_switch))
                })
        }

        Statement::WhileStatement(while_stmt) => escapes_case_body(&while_stmt.body, true, in_switch),
        Statement::DoWhileStatement(do_while) => escapes_case_body(&do_while.body, true, in_switch),
        Statement::ForStatement(for_stmt) => escapes_case_body(&for_stmt.body, true, in_switch),
        Statement::ForInStatement(for_in) => escapes_case_body(&for_in.body, true, in_switch),
        Statement::ForOfStatement(for_of) => escapes_case_body(&for_of.body, true, in_switch),

        Statement::SwitchStatement(switch_stmt) => switch_stmt.cases.iter().any(|case| {
            case.consequent.iter().any(|stmt| escapes_case_body(stmt, in_loop, true))
        }),

        // Function bodies rebind everything; expressions cannot carry
        // break/continue/return outside a function body.
        _ => false,
    }
}
