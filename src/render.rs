use crate::ast::{Expr, Node};
use crate::operator::BinaryOp;

enum Step<'a> {
    Visit(&'a Expr),
    Emit(BinaryOp),
}

/// Renders `expr` as infix text.
///
/// No parentheses are ever emitted, so the output is not precedence-safe:
/// `Times(Plus(1, 2), 3)` renders as `1+2*3`, which parses back as
/// `Plus(1, Times(2, 3))`. Treat the result as a one-way display form.
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    let mut stack = vec![Step::Visit(expr)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(op) => out.push(op.symbol() as char),
            Step::Visit(e) => match e.node() {
                Node::Constant(v) => out.push_str(&v.to_string()),
                Node::Variable(name) => out.push_str(name),
                Node::Plus(a, b) => {
                    stack.push(Step::Visit(b));
                    stack.push(Step::Emit(BinaryOp::Plus));
                    stack.push(Step::Visit(a));
                }
                Node::Times(a, b) => {
                    stack.push(Step::Visit(b));
                    stack.push(Step::Emit(BinaryOp::Times));
                    stack.push(Step::Visit(a));
                }
            },
        }
    }
    out
}
