use oxc_allocator::Allocator;
use oxc_allocator::Box as OxcBox;
use oxc_allocator::Vec as OxcVec;
use oxc_ast::ast::*;
use oxc_span::Atom;
use oxc_span::Span;
use oxc_syntax::operator::LogicalOperator;

pub fn create_expression_statement<'alloc>(
    allocator: &'alloc Allocator,
    expression: Expression<'alloc>,
    span: Span
) -> Statement<'alloc> {
    Statement::ExpressionStatement(
        OxcBox(allocator.alloc(ExpressionStatement {
            expression,
            span,
        }))
    )
}

/// An anonymous zero-parameter `function () { ... }` wrapping the given
/// statements. The thunk shape used for dispatch-table entries.
pub fn create_function_expression<'alloc>(
    allocator: &'alloc Allocator,
    statements: OxcVec<'alloc, Statement<'alloc>>,
    span: Span
) -> Expression<'alloc> {
    let params = FormalParameters {
        kind: FormalParameterKind::FormalParameter,
        items: OxcVec::new_in(allocator),
        rest: None,
        span,
    };
    let body = FunctionBody {
        statements,
        directives: OxcVec::new_in(allocator),
        span,
    };

    Expression::FunctionExpression(
        OxcBox(allocator.alloc(Function {
            r#type: FunctionType::FunctionExpression,
            id: None,
            expression: false,
            generator: false,
            r#async: false,
            params: OxcBox(allocator.alloc(params)),
            body: Some(OxcBox(allocator.alloc(body))),
            type_parameters: None,
            return_type: None,
            modifiers: Modifiers::empty(),
            span,
        }))
    )
}

pub fn create_object_expression<'alloc>(
    allocator: &'alloc Allocator,
    properties: OxcVec<'alloc, ObjectPropertyKind<'alloc>>,
    span: Span
) -> Expression<'alloc> {
    Expression::ObjectExpression(
        OxcBox(allocator.alloc(ObjectExpression {
            properties,
            trailing_comma: None,
            span,
        }))
    )
}

/// A `[key]: value` entry. The key expression is embedded verbatim, not
/// evaluated, so its coercion happens at runtime exactly where the original
/// case test would have been compared.
pub fn create_computed_object_property<'alloc>(
    allocator: &'alloc Allocator,
    key: Expression<'alloc>,
    value: Expression<'alloc>,
    span: Span
) -> ObjectPropertyKind<'alloc> {
    ObjectPropertyKind::ObjectProperty(
        OxcBox(allocator.alloc(ObjectProperty {
            kind: PropertyKind::Init,
            key: PropertyKey::Expression(key),
            value,
            method: false,
            shorthand: false,
            computed: true,
            init: None,
            span,
        }))
    )
}

pub fn create_computed_member_expression<'alloc>(
    allocator: &'alloc Allocator,
    object: Expression<'alloc>,
    expression: Expression<'alloc>,
    span: Span
) -> Expression<'alloc> {
    Expression::MemberExpression(
        OxcBox(allocator.alloc(MemberExpression::ComputedMemberExpression(ComputedMemberExpression {
            object,
            expression,
            optional: false,
            span,
        })))
    )
}

pub fn create_logical_or_expression<'alloc>(
    allocator: &'alloc Allocator,
    left: Expression<'alloc>,
    right: Expression<'alloc>,
    span: Span
) -> Expression<'alloc> {
    Expression::LogicalExpression(
        OxcBox(allocator.alloc(LogicalExpression {
            left,
            operator: LogicalOperator::Or,
            right,
            span,
        }))
    )
}

pub fn create_call_expression<'alloc>(
    allocator: &'alloc Allocator,
    callee: Expression<'alloc>,
    arguments: OxcVec<'alloc, Argument<'alloc>>,
    span: Span
) -> Expression<'alloc> {
    Expression::CallExpression(
        OxcBox(allocator.alloc(CallExpression {
            callee,
            arguments,
            optional: false,
            type_parameters: None,
            span,
        }))
    )
}

/// Explicit parentheses. Needed where an emitted object literal would
/// otherwise open a statement and parse as a block.
pub fn create_parenthesized_expression<'alloc>(
    allocator: &'alloc Allocator,
    expression: Expression<'alloc>,
    span: Span
) -> Expression<'alloc> {
    Expression::ParenthesizedExpression(
        OxcBox(allocator.alloc(ParenthesizedExpression {
            expression,
            span,
        }))
    )
}

pub fn create_label_identifier(name: String, span: Span) -> LabelIdentifier {
    LabelIdentifier {
        name: Atom::from(name),
        span,
    }
}

pub fn create_labeled_statement<'alloc>(
    allocator: &'alloc Allocator,
    name: String,
    body: Statement<'alloc>,
    span: Span
) -> Statement<'alloc> {
    Statement::LabeledStatement(
        OxcBox(allocator.alloc(LabeledStatement {
            label: create_label_identifier(name, span),
            body,
            span,
        }))
    )
}

pub fn create_break_statement<'alloc>(
    allocator: &'alloc Allocator,
    label: Option<String>,
    span: Span
) -> Statement<'alloc> {
    Statement::BreakStatement(
        OxcBox(allocator.alloc(BreakStatement {
            label: label.map(|name| create_label_identifier(name, span)),
            span,
        }))
    )
}

pub fn create_continue_statement<'alloc>(
    allocator: &'alloc Allocator,
    label: Option<String>,
    span: Span
) -> Statement<'alloc> {
    Statement::ContinueStatement(
        OxcBox(allocator.alloc(ContinueStatement {
            label: label.map(|name| create_label_identifier(name, span)),
            span,
        }))
    )
}
