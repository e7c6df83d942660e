use log::debug;

use crate::ast::Expr;
use crate::error::ExprError;
use crate::lexer::Token;
use crate::operator::BinaryOp;

/// Grammar:
///
/// ```text
/// expr   := term (Plus term)*
/// term   := factor (Times factor)*
/// factor := Number
/// ```
///
/// Both operators are left-associative. The whole token slice must be
/// consumed.
pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }
    fn look(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }
    fn bump(&mut self) {
        self.pos += 1;
    }
    fn found(&self) -> String {
        match self.look() {
            Some(tok) => tok.to_string(),
            None => "end of input".to_string(),
        }
    }
    pub(crate) fn parse(mut self) -> Result<Expr, ExprError> {
        let expr = self.additive()?;
        if self.look().is_some() {
            return Err(ExprError::Parse {
                expected: "operator or end of input",
                found: self.found(),
            });
        }
        Ok(expr)
    }
    fn additive(&mut self) -> Result<Expr, ExprError> {
        let mut node = self.multiplicative()?;
        while let Some(Token::Operator(BinaryOp::Plus)) = self.look() {
            self.bump();
            let rhs = self.multiplicative()?;
            node = Expr::plus(node, rhs);
        }
        Ok(node)
    }
    fn multiplicative(&mut self) -> Result<Expr, ExprError> {
        let mut node = self.primary()?;
        while let Some(Token::Operator(BinaryOp::Times)) = self.look() {
            self.bump();
            let rhs = self.primary()?;
            node = Expr::times(node, rhs);
        }
        Ok(node)
    }
    fn primary(&mut self) -> Result<Expr, ExprError> {
        match self.look() {
            Some(Token::Number(v)) => {
                self.bump();
                Ok(Expr::constant(v))
            }
            _ => Err(ExprError::Parse {
                expected: "number",
                found: self.found(),
            }),
        }
    }
}

/// Builds a tree from a token sequence. There is no partial success: any
/// leftover or missing token is an error.
pub fn parse(tokens: &[Token]) -> Result<Expr, ExprError> {
    let expr = Parser::new(tokens).parse()?;
    debug!("parsed {} tokens into {}", tokens.len(), expr);
    Ok(expr)
}
