use std::cell::RefCell;
use std::rc::Rc;

use oxc_allocator::Allocator;
use oxc_allocator::Box as OxcBox;
use oxc_allocator::Vec as OxcVec;
use oxc_ast::ast::*;

use crate::mapper_state::MapperState;

/// What a visitor wants the mapper to do next with the node it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapperAction {
    /// Carry on: remaining visitors run, children get visited.
    Normal,
    /// Restart the visitor chain on the returned node (it was replaced by
    /// something that other visitors may want a look at).
    Revisit,
    /// Do not descend into the returned node's children.
    Skip,
}

type StmtVisitor<'a> =
    Box<dyn Fn(Statement<'a>, &'a Allocator, bool) -> (MapperAction, Statement<'a>)>;
type ExprVisitor<'a> =
    Box<dyn Fn(Expression<'a>, &'a Allocator, bool) -> (MapperAction, Expression<'a>)>;

/// Owned-node AST walker. Visitors receive each statement/expression by
/// value together with a `before` flag (`true` on the way down, before the
/// children, `false` on the way up) and return a possibly-replaced node.
/// The mapper itself performs the substitution by rebuilding the parent,
/// so no parent pointers or aliasing are needed.
///
/// Nodes the obfuscator has no business rewriting (module declarations,
/// TS- and JSX-only forms) pass through untouched.
pub struct Mapper<'a> {
    allocator: &'a Allocator,
    visitors_stmt: Vec<StmtVisitor<'a>>,
    visitors_expr: Vec<ExprVisitor<'a>>,
    pub state: Rc<RefCell<MapperState>>,
}

impl<'a> Mapper<'a> {
    pub fn new(allocator: &'a Allocator) -> Self {
        Self::with_state(allocator, Rc::new(RefCell::new(MapperState::default())))
    }

    pub fn with_state(allocator: &'a Allocator, state: Rc<RefCell<MapperState>>) -> Self {
        Self {
            allocator,
            visitors_stmt: Vec::new(),
            visitors_expr: Vec::new(),
            state,
        }
    }

    /// Register a statement visitor. Registration order is invocation order.
    pub fn add_visitor_stmt<F>(&mut self, visitor: F)
    where
        F: Fn(Statement<'a>, &'a Allocator, bool) -> (MapperAction, Statement<'a>) + 'static,
    {
        self.visitors_stmt.push(Box::new(visitor));
    }

    pub fn add_visitor_expr<F>(&mut self, visitor: F)
    where
        F: Fn(Expression<'a>, &'a Allocator, bool) -> (MapperAction, Expression<'a>) + 'static,
    {
        self.visitors_expr.push(Box::new(visitor));
    }

    pub fn map(&self, program: Program<'a>) -> Program<'a> {
        let Program { body, span, source_type, directives, hashbang } = program;

        let mut new_body = OxcVec::with_capacity_in(body.len(), self.allocator);
        for stmt in body {
            new_body.push(self.map_statement(stmt));
        }

        Program { body: new_body, span, source_type, directives, hashbang }
    }

    pub fn map_statement(&self, stmt: Statement<'a>) -> Statement<'a> {
        let (action, stmt) = self.apply_stmt_visitors(stmt, true);
        if action == MapperAction::Skip {
            return stmt;
        }

        let stmt = self.map_statement_children(stmt);

        let (_, stmt) = self.apply_stmt_visitors(stmt, false);
        stmt
    }

    fn apply_stmt_visitors(
        &self,
        mut stmt: Statement<'a>,
        before: bool,
    ) -> (MapperAction, Statement<'a>) {
        'chain: loop {
            for visitor in &self.visitors_stmt {
                let (action, next) = visitor(stmt, self.allocator, before);
                stmt = next;
                match action {
                    MapperAction::Normal => {}
                    MapperAction::Revisit => continue 'chain,
                    MapperAction::Skip => return (MapperAction::Skip, stmt),
                }
            }
            return (MapperAction::Normal, stmt);
        }
    }

    fn map_statement_children(&self, stmt: Statement<'a>) -> Statement<'a> {
        match stmt {
            Statement::BlockStatement(block) => {
                let BlockStatement { body, span } = block.unbox();

                let mut new_body = OxcVec::with_capacity_in(body.len(), self.allocator);
                for stmt in body {
                    new_body.push(self.map_statement(stmt));
                }

                Statement::BlockStatement(OxcBox(self.allocator.alloc(BlockStatement { body: new_body, span })))
            }
            Statement::DoWhileStatement(do_while) => {
                let DoWhileStatement { body, test, span } = do_while.unbox();

                let body = self.map_statement(body);
                let test = self.map_expression(test);

                Statement::DoWhileStatement(OxcBox(self.allocator.alloc(DoWhileStatement { body, test, span })))
            }
            Statement::ExpressionStatement(expr_stmt) => {
                let ExpressionStatement { expression, span } = expr_stmt.unbox();

                let expression = self.map_expression(expression);

                Statement::ExpressionStatement(OxcBox(self.allocator.alloc(ExpressionStatement { expression, span })))
            }
            Statement::ForInStatement(for_in) => {
                let ForInStatement { left, right, body, span } = for_in.unbox();

                let left = self.map_for_statement_left(left);
                let right = self.map_expression(right);
                let body = self.map_statement(body);

                Statement::ForInStatement(OxcBox(self.allocator.alloc(ForInStatement { left, right, body, span })))
            }
            Statement::ForOfStatement(for_of) => {
                let ForOfStatement { left, right, body, span, r#await } = for_of.unbox();

                let left = self.map_for_statement_left(left);
                let right = self.map_expression(right);
                let body = self.map_statement(body);

                Statement::ForOfStatement(OxcBox(self.allocator.alloc(ForOfStatement { left, right, body, span, r#await })))
            }
            Statement::ForStatement(for_stmt) => {
                let ForStatement { init, test, update, body, span } = for_stmt.unbox();

                let init = match init {
                    Some(ForStatementInit::Expression(expr)) => {
                        Some(ForStatementInit::Expression(self.map_expression(expr)))
                    }
                    Some(ForStatementInit::VariableDeclaration(decl)) => {
                        Some(ForStatementInit::VariableDeclaration(OxcBox(
                            self.allocator.alloc(self.map_variable_declaration(decl.unbox())),
                        )))
                    }
                    other => other,
                };

                let test = test.map(|test| self.map_expression(test));
                let update = update.map(|update| self.map_expression(update));
                let body = self.map_statement(body);

                Statement::ForStatement(OxcBox(self.allocator.alloc(ForStatement { init, test, update, body, span })))
            }
            Statement::IfStatement(if_stmt) => {
                let IfStatement { test, consequent, alternate, span } = if_stmt.unbox();

                let test = self.map_expression(test);
                let consequent = self.map_statement(consequent);
                let alternate = alternate.map(|alt| self.map_statement(alt));

                Statement::IfStatement(OxcBox(self.allocator.alloc(IfStatement { test, consequent, alternate, span })))
            }
            Statement::LabeledStatement(labeled) => {
                let LabeledStatement { label, body, span } = labeled.unbox();

                let body = self.map_statement(body);

                Statement::LabeledStatement(OxcBox(self.allocator.alloc(LabeledStatement { label, body, span })))
            }
            Statement::ReturnStatement(ret) => {
                let ReturnStatement { argument, span } = ret.unbox();

                let argument = argument.map(|arg| self.map_expression(arg));

                Statement::ReturnStatement(OxcBox(self.allocator.alloc(ReturnStatement { argument, span })))
            }
            Statement::SwitchStatement(switch) => {
                let SwitchStatement { discriminant, cases, span } = switch.unbox();

                let discriminant = self.map_expression(discriminant);
                let mut new_cases = OxcVec::with_capacity_in(cases.len(), self.allocator);

                for case in cases {
                    let SwitchCase { test, consequent, span } = case;
                    let test = test.map(|test| self.map_expression(test));
                    let mut new_consequent = OxcVec::with_capacity_in(consequent.len(), self.allocator);
                    for stmt in consequent {
                        new_consequent.push(self.map_statement(stmt));
                    }
                    new_cases.push(SwitchCase { test, consequent: new_consequent, span });
                }

                Statement::SwitchStatement(OxcBox(self.allocator.alloc(SwitchStatement { discriminant, cases: new_cases, span })))
            }
            Statement::ThrowStatement(throw) => {
                let ThrowStatement { argument, span } = throw.unbox();

                let argument = self.map_expression(argument);

                Statement::ThrowStatement(OxcBox(self.allocator.alloc(ThrowStatement { argument, span })))
            }
            Statement::TryStatement(try_stmt) => {
                let TryStatement { block, handler, finalizer, span } = try_stmt.unbox();

                let BlockStatement { body, span: block_span } = block.unbox();
                let mut new_block_body = OxcVec::with_capacity_in(body.len(), self.allocator);
                for stmt in body {
                    new_block_body.push(self.map_statement(stmt));
                }
                let block = BlockStatement { body: new_block_body, span: block_span };

                let handler = handler.map(|handler| {
                    let CatchClause { param, body, span } = handler.unbox();

                    let BlockStatement { body: handler_body, span: handler_span } = body.unbox();
                    let mut new_handler_body = OxcVec::with_capacity_in(handler_body.len(), self.allocator);
                    for stmt in handler_body {
                        new_handler_body.push(self.map_statement(stmt));
                    }

                    CatchClause {
                        param,
                        body: OxcBox(self.allocator.alloc(BlockStatement { body: new_handler_body, span: handler_span })),
                        span,
                    }
                });

                let finalizer = finalizer.map(|finalizer| {
                    let BlockStatement { body, span } = finalizer.unbox();
                    let mut new_finalizer_body = OxcVec::with_capacity_in(body.len(), self.allocator);
                    for stmt in body {
                        new_finalizer_body.push(self.map_statement(stmt));
                    }
                    BlockStatement { body: new_finalizer_body, span }
                });

                Statement::TryStatement(OxcBox(self.allocator.alloc(TryStatement {
                    block: OxcBox(self.allocator.alloc(block)),
                    handler: handler.map(|h| OxcBox(self.allocator.alloc(h))),
                    finalizer: finalizer.map(|f| OxcBox(self.allocator.alloc(f))),
                    span,
                })))
            }
            Statement::WhileStatement(while_stmt) => {
                let WhileStatement { test, body, span } = while_stmt.unbox();

                let test = self.map_expression(test);
                let body = self.map_statement(body);

                Statement::WhileStatement(OxcBox(self.allocator.alloc(WhileStatement { test, body, span })))
            }
            Statement::WithStatement(with) => {
                let WithStatement { object, body, span } = with.unbox();

                let object = self.map_expression(object);
                let body = self.map_statement(body);

                Statement::WithStatement(OxcBox(self.allocator.alloc(WithStatement { object, body, span })))
            }
            Statement::Declaration(decl) => Statement::Declaration(match decl {
                Declaration::VariableDeclaration(var_decl) => Declaration::VariableDeclaration(OxcBox(
                    self.allocator.alloc(self.map_variable_declaration(var_decl.unbox())),
                )),
                Declaration::FunctionDeclaration(func_decl) => Declaration::FunctionDeclaration(OxcBox(
                    self.allocator.alloc(self.map_function(func_decl.unbox())),
                )),
                Declaration::ClassDeclaration(class_decl) => Declaration::ClassDeclaration(OxcBox(
                    self.allocator.alloc(self.map_class(class_decl.unbox())),
                )),
                other => other,
            }),

            // Breaks, continues, debugger, empty: no children to visit.
            // Module declarations and TS forms are left entirely alone.
            other => other,
        }
    }

    fn map_for_statement_left(&self, left: ForStatementLeft<'a>) -> ForStatementLeft<'a> {
        match left {
            ForStatementLeft::VariableDeclaration(decl) => ForStatementLeft::VariableDeclaration(
                OxcBox(self.allocator.alloc(self.map_variable_declaration(decl.unbox()))),
            ),
            ForStatementLeft::AssignmentTarget(target) => {
                ForStatementLeft::AssignmentTarget(self.map_assignment_target(target))
            }
            other => other,
        }
    }

    pub fn map_expression(&self, expr: Expression<'a>) -> Expression<'a> {
        let (action, expr) = self.apply_expr_visitors(expr, true);
        if action == MapperAction::Skip {
            return expr;
        }

        let expr = self.map_expression_children(expr);

        let (_, expr) = self.apply_expr_visitors(expr, false);
        expr
    }

    fn apply_expr_visitors(
        &self,
        mut expr: Expression<'a>,
        before: bool,
    ) -> (MapperAction, Expression<'a>) {
        'chain: loop {
            for visitor in &self.visitors_expr {
                let (action, next) = visitor(expr, self.allocator, before);
                expr = next;
                match action {
                    MapperAction::Normal => {}
                    MapperAction::Revisit => continue 'chain,
                    MapperAction::Skip => return (MapperAction::Skip, expr),
                }
            }
            return (MapperAction::Normal, expr);
        }
    }

    fn map_expression_children(&self, expr: Expression<'a>) -> Expression<'a> {
        match expr {
            Expression::ArrayExpression(array) => {
                let ArrayExpression { elements, span, trailing_comma } = array.unbox();

                let mut new_elements = OxcVec::with_capacity_in(elements.len(), self.allocator);
                for elem in elements {
                    match elem {
                        ArrayExpressionElement::Expression(expr) => {
                            new_elements.push(ArrayExpressionElement::Expression(self.map_expression(expr)))
                        }
                        ArrayExpressionElement::SpreadElement(spread) => {
                            let SpreadElement { argument, span } = spread.unbox();
                            new_elements.push(ArrayExpressionElement::SpreadElement(OxcBox(
                                self.allocator.alloc(SpreadElement { argument: self.map_expression(argument), span }),
                            )))
                        }
                        ArrayExpressionElement::Elision(e) => new_elements.push(ArrayExpressionElement::Elision(e)),
                    }
                }

                Expression::ArrayExpression(OxcBox(self.allocator.alloc(ArrayExpression { elements: new_elements, span, trailing_comma })))
            }
            Expression::ArrowExpression(arrow) => {
                let ArrowExpression { params, body, span, r#async, expression, generator, type_parameters, return_type } = arrow.unbox();

                let FunctionBody { statements, directives, span: body_span } = body.unbox();
                let mut new_statements = OxcVec::with_capacity_in(statements.len(), self.allocator);
                for stmt in statements {
                    new_statements.push(self.map_statement(stmt));
                }
                let body = OxcBox(self.allocator.alloc(FunctionBody { statements: new_statements, directives, span: body_span }));

                Expression::ArrowExpression(OxcBox(self.allocator.alloc(ArrowExpression {
                    params, body, span, r#async, expression, generator, type_parameters, return_type,
                })))
            }
            Expression::AssignmentExpression(assign) => {
                let AssignmentExpression { left, right, span, operator } = assign.unbox();

                let left = self.map_assignment_target(left);
                let right = self.map_expression(right);

                Expression::AssignmentExpression(OxcBox(self.allocator.alloc(AssignmentExpression { left, right, span, operator })))
            }
            Expression::AwaitExpression(await_expr) => {
                let AwaitExpression { argument, span } = await_expr.unbox();

                let argument = self.map_expression(argument);

                Expression::AwaitExpression(OxcBox(self.allocator.alloc(AwaitExpression { argument, span })))
            }
            Expression::BinaryExpression(binary) => {
                let BinaryExpression { left, right, span, operator } = binary.unbox();

                let left = self.map_expression(left);
                let right = self.map_expression(right);

                Expression::BinaryExpression(OxcBox(self.allocator.alloc(BinaryExpression { left, right, span, operator })))
            }
            Expression::CallExpression(call) => {
                let CallExpression { callee, arguments, span, optional, type_parameters } = call.unbox();

                let callee = self.map_expression(callee);
                let arguments = self.map_arguments(arguments);

                Expression::CallExpression(OxcBox(self.allocator.alloc(CallExpression { callee, arguments, span, optional, type_parameters })))
            }
            Expression::ConditionalExpression(cond) => {
                let ConditionalExpression { test, consequent, alternate, span } = cond.unbox();

                let test = self.map_expression(test);
                let consequent = self.map_expression(consequent);
                let alternate = self.map_expression(alternate);

                Expression::ConditionalExpression(OxcBox(self.allocator.alloc(ConditionalExpression { test, consequent, alternate, span })))
            }
            Expression::FunctionExpression(func) => {
                Expression::FunctionExpression(OxcBox(self.allocator.alloc(self.map_function(func.unbox()))))
            }
            Expression::ClassExpression(class) => {
                Expression::ClassExpression(OxcBox(self.allocator.alloc(self.map_class(class.unbox()))))
            }
            Expression::LogicalExpression(logical) => {
                let LogicalExpression { left, right, span, operator } = logical.unbox();

                let left = self.map_expression(left);
                let right = self.map_expression(right);

                Expression::LogicalExpression(OxcBox(self.allocator.alloc(LogicalExpression { left, right, span, operator })))
            }
            Expression::MemberExpression(member) => {
                Expression::MemberExpression(OxcBox(self.allocator.alloc(self.map_member_expression(member.unbox()))))
            }
            Expression::NewExpression(new_expr) => {
                let NewExpression { callee, arguments, span, type_parameters } = new_expr.unbox();

                let callee = self.map_expression(callee);
                let arguments = self.map_arguments(arguments);

                Expression::NewExpression(OxcBox(self.allocator.alloc(NewExpression { callee, arguments, span, type_parameters })))
            }
            Expression::ObjectExpression(object) => {
                let ObjectExpression { properties, span, trailing_comma } = object.unbox();

                let mut new_properties = OxcVec::with_capacity_in(properties.len(), self.allocator);
                for prop in properties {
                    match prop {
                        ObjectPropertyKind::ObjectProperty(prop) => {
                            let ObjectProperty { kind, key, value, span, method, shorthand, computed, init } = prop.unbox();

                            let key = match key {
                                PropertyKey::Expression(expr) => PropertyKey::Expression(self.map_expression(expr)),
                                other => other,
                            };

                            new_properties.push(ObjectPropertyKind::ObjectProperty(OxcBox(self.allocator.alloc(ObjectProperty {
                                kind,
                                key,
                                value: self.map_expression(value),
                                span,
                                method,
                                shorthand,
                                computed,
                                init,
                            }))));
                        }
                        ObjectPropertyKind::SpreadProperty(spread) => {
                            let SpreadElement { argument, span } = spread.unbox();
                            new_properties.push(ObjectPropertyKind::SpreadProperty(OxcBox(
                                self.allocator.alloc(SpreadElement { argument: self.map_expression(argument), span }),
                            )));
                        }
                    }
                }

                Expression::ObjectExpression(OxcBox(self.allocator.alloc(ObjectExpression { properties: new_properties, span, trailing_comma })))
            }
            Expression::ParenthesizedExpression(paren) => {
                let ParenthesizedExpression { expression, span } = paren.unbox();

                Expression::ParenthesizedExpression(OxcBox(self.allocator.alloc(ParenthesizedExpression {
                    expression: self.map_expression(expression),
                    span,
                })))
            }
            Expression::SequenceExpression(seq) => {
                let SequenceExpression { expressions, span } = seq.unbox();

                let mut new_expressions = OxcVec::with_capacity_in(expressions.len(), self.allocator);
                for expr in expressions {
                    new_expressions.push(self.map_expression(expr));
                }

                Expression::SequenceExpression(OxcBox(self.allocator.alloc(SequenceExpression { expressions: new_expressions, span })))
            }
            Expression::TaggedTemplateExpression(tagged) => {
                let TaggedTemplateExpression { tag, quasi, span, type_parameters } = tagged.unbox();

                let tag = self.map_expression(tag);
                let quasi = self.map_template_literal(quasi);

                Expression::TaggedTemplateExpression(OxcBox(self.allocator.alloc(TaggedTemplateExpression { tag, quasi, span, type_parameters })))
            }
            Expression::TemplateLiteral(template) => {
                Expression::TemplateLiteral(OxcBox(self.allocator.alloc(self.map_template_literal(template.unbox()))))
            }
            Expression::UnaryExpression(unary) => {
                let UnaryExpression { argument, span, operator } = unary.unbox();

                let argument = self.map_expression(argument);

                Expression::UnaryExpression(OxcBox(self.allocator.alloc(UnaryExpression { argument, span, operator })))
            }
            Expression::YieldExpression(yield_expr) => {
                let YieldExpression { argument, span, delegate } = yield_expr.unbox();

                let argument = argument.map(|arg| self.map_expression(arg));

                Expression::YieldExpression(OxcBox(self.allocator.alloc(YieldExpression { argument, span, delegate })))
            }
            Expression::ImportExpression(import) => {
                let ImportExpression { source, arguments, span } = import.unbox();

                Expression::ImportExpression(OxcBox(self.allocator.alloc(ImportExpression {
                    source: self.map_expression(source),
                    arguments,
                    span,
                })))
            }

            // Identifiers, literals, this/super/meta, chains, updates and
            // the TS/JSX-only forms carry nothing the transforms care to
            // rewrite below them.
            other => other,
        }
    }

    fn map_arguments(&self, arguments: OxcVec<'a, Argument<'a>>) -> OxcVec<'a, Argument<'a>> {
        let mut new_arguments = OxcVec::with_capacity_in(arguments.len(), self.allocator);
        for arg in arguments {
            match arg {
                Argument::Expression(expr) => new_arguments.push(Argument::Expression(self.map_expression(expr))),
                Argument::SpreadElement(spread) => {
                    let SpreadElement { argument, span } = spread.unbox();
                    new_arguments.push(Argument::SpreadElement(OxcBox(
                        self.allocator.alloc(SpreadElement { argument: self.map_expression(argument), span }),
                    )));
                }
            }
        }
        new_arguments
    }

    fn map_member_expression(&self, member: MemberExpression<'a>) -> MemberExpression<'a> {
        match member {
            MemberExpression::ComputedMemberExpression(computed) => {
                let ComputedMemberExpression { object, expression, span, optional } = computed;

                let object = self.map_expression(object);
                let expression = self.map_expression(expression);

                MemberExpression::ComputedMemberExpression(ComputedMemberExpression { object, expression, span, optional })
            }
            MemberExpression::StaticMemberExpression(static_member) => {
                let StaticMemberExpression { object, property, span, optional } = static_member;

                let object = self.map_expression(object);

                MemberExpression::StaticMemberExpression(StaticMemberExpression { object, property, span, optional })
            }
            MemberExpression::PrivateFieldExpression(private_field) => {
                let PrivateFieldExpression { object, field, span, optional } = private_field;

                let object = self.map_expression(object);

                MemberExpression::PrivateFieldExpression(PrivateFieldExpression { object, field, span, optional })
            }
        }
    }

    fn map_assignment_target(&self, target: AssignmentTarget<'a>) -> AssignmentTarget<'a> {
        match target {
            AssignmentTarget::SimpleAssignmentTarget(simple) => match simple {
                SimpleAssignmentTarget::MemberAssignmentTarget(member) => {
                    AssignmentTarget::SimpleAssignmentTarget(SimpleAssignmentTarget::MemberAssignmentTarget(
                        OxcBox(self.allocator.alloc(self.map_member_expression(member.unbox()))),
                    ))
                }
                other => AssignmentTarget::SimpleAssignmentTarget(other),
            },
            // Destructuring targets keep their shape; nothing inside them
            // is rewritten by the current transforms.
            other => other,
        }
    }

    fn map_variable_declaration(&self, decl: VariableDeclaration<'a>) -> VariableDeclaration<'a> {
        let VariableDeclaration { declarations, span, kind, modifiers } = decl;

        let mut new_declarations = OxcVec::with_capacity_in(declarations.len(), self.allocator);
        for declarator in declarations {
            let VariableDeclarator { id, init, kind, span, definite } = declarator;

            let init = init.map(|init| self.map_expression(init));

            new_declarations.push(VariableDeclarator { id, init, kind, span, definite });
        }

        VariableDeclaration { declarations: new_declarations, span, kind, modifiers }
    }

    fn map_function(&self, func: Function<'a>) -> Function<'a> {
        let Function { params, body, span, r#type, id, expression, generator, r#async, type_parameters, return_type, modifiers } = func;

        let body = body.map(|body| {
            let FunctionBody { statements, span: body_span, directives } = body.unbox();

            let mut new_statements = OxcVec::with_capacity_in(statements.len(), self.allocator);
            for stmt in statements {
                new_statements.push(self.map_statement(stmt));
            }

            OxcBox(self.allocator.alloc(FunctionBody { statements: new_statements, span: body_span, directives }))
        });

        Function { params, body, span, r#type, id, expression, generator, r#async, type_parameters, return_type, modifiers }
    }

    fn map_class(&self, class: Class<'a>) -> Class<'a> {
        let Class { super_class, body, span, id, type_parameters, implements, decorators, modifiers, r#type, super_type_parameters } = class;

        let super_class = super_class.map(|sclass| self.map_expression(sclass));

        let ClassBody { body, span: body_span } = body.unbox();
        let mut new_body = OxcVec::with_capacity_in(body.len(), self.allocator);
        for element in body {
            match element {
                ClassElement::PropertyDefinition(prop) => {
                    let PropertyDefinition {
                        key, value, span, accessibility, decorators, computed,
                        r#static, r#override, optional, declare, definite, readonly, type_annotation,
                    } = prop.unbox();

                    let value = value.map(|value| self.map_expression(value));

                    new_body.push(ClassElement::PropertyDefinition(OxcBox(self.allocator.alloc(PropertyDefinition {
                        key, value, span, accessibility, decorators, computed,
                        r#static, r#override, optional, declare, definite, readonly, type_annotation,
                    }))));
                }
                ClassElement::MethodDefinition(method) => {
                    let MethodDefinition { key, value, span, kind, accessibility, decorators, computed, r#static, r#override, optional } = method.unbox();

                    let value = OxcBox(self.allocator.alloc(self.map_function(value.unbox())));

                    new_body.push(ClassElement::MethodDefinition(OxcBox(self.allocator.alloc(MethodDefinition {
                        key, value, span, kind, accessibility, decorators, computed, r#static, r#override, optional,
                    }))));
                }
                other => new_body.push(other),
            }
        }

        Class {
            super_class,
            body: OxcBox(self.allocator.alloc(ClassBody { body: new_body, span: body_span })),
            span,
            id,
            type_parameters,
            implements,
            decorators,
            modifiers,
            r#type,
            super_type_parameters,
        }
    }

    fn map_template_literal(&self, template: TemplateLiteral<'a>) -> TemplateLiteral<'a> {
        let TemplateLiteral { quasis, expressions, span } = template;

        let mut new_expressions = OxcVec::with_capacity_in(expressions.len(), self.allocator);
        for expr in expressions {
            new_expressions.push(self.map_expression(expr));
        }

        // TemplateElement quasis are static strings, nothing to map.
        TemplateLiteral { quasis, expressions: new_expressions, span }
    }
}

pub fn create_mapper<'a>(allocator: &'a Allocator) -> Mapper<'a> {
    Mapper::new(allocator)
}
