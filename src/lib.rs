mod ast;
mod collect;
mod error;
mod lexer;
mod operator;
mod parser;
mod render;

pub use ast::{Expr, ExprKind, Node};
pub use error::ExprError;
pub use lexer::{Token, tokenize};
pub use operator::{BinaryOp, lookup};
pub use parser::parse;
pub use render::render;

/// Tokenizes and parses `text` in one step.
pub fn parse_str(text: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(text)?;
    parse(&tokens)
}
