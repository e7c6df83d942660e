use std::collections::HashSet;

use crate::ast::{Expr, Node};

pub(crate) fn collect_vars(expr: &Expr) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    let mut stack = vec![expr];
    while let Some(node) = stack.pop() {
        match node.node() {
            Node::Constant(_) => {}
            Node::Variable(name) => {
                if seen.insert(name.as_str()) {
                    out.push(name.clone());
                }
            }
            Node::Plus(a, b) | Node::Times(a, b) => {
                // right first so the left operand is visited first
                stack.push(b);
                stack.push(a);
            }
        }
    }
    out
}
