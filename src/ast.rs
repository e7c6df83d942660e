use std::fmt;
use std::sync::Arc;

use crate::error::ExprError;
use crate::operator::BinaryOp;

/// Discriminant of a tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Constant,
    Variable,
    Plus,
    Times,
}

impl ExprKind {
    /// Declared arity of the node kind.
    pub const fn operand_count(self) -> usize {
        match self {
            ExprKind::Constant | ExprKind::Variable => 0,
            ExprKind::Plus | ExprKind::Times => 2,
        }
    }
}

impl From<BinaryOp> for ExprKind {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Plus => ExprKind::Plus,
            BinaryOp::Times => ExprKind::Times,
        }
    }
}

/// Payload of a tree node. Operands are shared [`Expr`] handles.
#[derive(PartialEq)]
pub enum Node {
    /// Numeric literal (e.g. 1, 3.5)
    Constant(f64),
    /// Named variable, never interpreted.
    Variable(String),
    /// a + b
    Plus(Expr, Expr),
    /// a * b
    Times(Expr, Expr),
}

impl Node {
    pub fn kind(&self) -> ExprKind {
        match self {
            Node::Constant(_) => ExprKind::Constant,
            Node::Variable(_) => ExprKind::Variable,
            Node::Plus(..) => ExprKind::Plus,
            Node::Times(..) => ExprKind::Times,
        }
    }

    pub fn operands(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Node::Plus(a, b) | Node::Times(a, b) => Some((a, b)),
            Node::Constant(_) | Node::Variable(_) => None,
        }
    }

    fn take_operands(&mut self, out: &mut Vec<Expr>) {
        match std::mem::replace(self, Node::Constant(0.0)) {
            Node::Plus(a, b) | Node::Times(a, b) => {
                out.push(a);
                out.push(b);
            }
            Node::Constant(_) | Node::Variable(_) => {}
        }
    }
}

/// Immutable expression tree handle.
///
/// Cloning is cheap and shares the subtree; nodes are never mutated after
/// construction, so handles can be sent across threads freely.
#[derive(Clone)]
pub struct Expr(Arc<Node>);

impl Expr {
    pub fn constant(value: f64) -> Expr {
        Expr(Arc::new(Node::Constant(value)))
    }

    pub fn variable(name: impl Into<String>) -> Result<Expr, ExprError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ExprError::EmptyVariableName);
        }
        Ok(Expr(Arc::new(Node::Variable(name))))
    }

    pub fn plus(a: Expr, b: Expr) -> Expr {
        Expr(Arc::new(Node::Plus(a, b)))
    }

    pub fn times(a: Expr, b: Expr) -> Expr {
        Expr(Arc::new(Node::Times(a, b)))
    }

    /// Builds a node for `op` from an operand list, rejecting any list whose
    /// length differs from the operator's arity.
    pub fn binary(op: BinaryOp, operands: Vec<Expr>) -> Result<Expr, ExprError> {
        let expected = ExprKind::from(op).operand_count();
        if operands.len() != expected {
            return Err(ExprError::Arity {
                op,
                expected,
                found: operands.len(),
            });
        }
        let [a, b]: [Expr; 2] = operands
            .try_into()
            .map_err(|_| ExprError::Unreachable("binary operand list passed arity check"))?;
        Ok(match op {
            BinaryOp::Plus => Expr::plus(a, b),
            BinaryOp::Times => Expr::times(a, b),
        })
    }

    /// Relation between two expressions. Its arity and rendering are not
    /// settled yet, so construction always fails.
    pub fn equation(_lhs: Expr, _rhs: Expr) -> Result<Expr, ExprError> {
        Err(ExprError::NotImplemented("equation"))
    }

    pub fn node(&self) -> &Node {
        &self.0
    }

    pub fn kind(&self) -> ExprKind {
        self.0.kind()
    }

    /// Number of children actually stored in this node.
    pub fn operand_count(&self) -> usize {
        match self.0.operands() {
            Some(_) => 2,
            None => 0,
        }
    }

    pub fn operands(&self) -> Option<(&Expr, &Expr)> {
        self.0.operands()
    }

    /// True when both handles point at the same node instance.
    pub fn ptr_eq(a: &Expr, b: &Expr) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Infix text form; see [`crate::render::render`].
    pub fn render(&self) -> String {
        crate::render::render(self)
    }

    /// Distinct variable names in left-to-right first-appearance order.
    pub fn variables(&self) -> Vec<String> {
        crate::collect::collect_vars(self)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::constant(value)
    }
}

// Structural equality. Walks both trees with an explicit stack so that
// left-leaning chains from long inputs do not exhaust the call stack.
impl PartialEq for Expr {
    fn eq(&self, other: &Expr) -> bool {
        let mut pending: Vec<(&Expr, &Expr)> = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if Expr::ptr_eq(a, b) {
                continue;
            }
            match (a.node(), b.node()) {
                (Node::Constant(x), Node::Constant(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (Node::Variable(x), Node::Variable(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (Node::Plus(al, ar), Node::Plus(bl, br))
                | (Node::Times(al, ar), Node::Times(bl, br)) => {
                    pending.push((ar, br));
                    pending.push((al, bl));
                }
                _ => return false,
            }
        }
        true
    }
}

enum DebugStep<'a> {
    Visit(&'a Node),
    Text(&'static str),
}

fn push_operands<'a>(stack: &mut Vec<DebugStep<'a>>, a: &'a Expr, b: &'a Expr) {
    stack.push(DebugStep::Text(")"));
    stack.push(DebugStep::Visit(b.node()));
    stack.push(DebugStep::Text(", "));
    stack.push(DebugStep::Visit(a.node()));
}

// Same output shape as a derived tuple Debug, written with a worklist so
// deep chains format without recursing.
fn fmt_node(root: &Node, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut stack = vec![DebugStep::Visit(root)];
    while let Some(step) = stack.pop() {
        match step {
            DebugStep::Text(s) => f.write_str(s)?,
            DebugStep::Visit(node) => match node {
                Node::Constant(v) => write!(f, "Constant({:?})", v)?,
                Node::Variable(name) => write!(f, "Variable({:?})", name)?,
                Node::Plus(a, b) => {
                    f.write_str("Plus(")?;
                    push_operands(&mut stack, a, b);
                }
                Node::Times(a, b) => {
                    f.write_str("Times(")?;
                    push_operands(&mut stack, a, b);
                }
            },
        }
    }
    Ok(())
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self, f)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self.node(), f)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// Teardown without recursion: every node this handle owns exclusively is
// emptied into a worklist before it is released, so each nested drop only
// ever sees a leaf.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Some(node) = Arc::get_mut(&mut self.0) {
            node.take_operands(&mut stack);
        }
        while let Some(mut expr) = stack.pop() {
            if let Some(node) = Arc::get_mut(&mut expr.0) {
                node.take_operands(&mut stack);
            }
        }
    }
}
