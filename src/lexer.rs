use std::fmt;

use log::trace;

use crate::error::ExprError;
use crate::operator::{self, BinaryOp};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOp),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(v) => write!(f, "number {}", v),
            Token::Operator(op) => write!(f, "operator '{}'", op),
        }
    }
}

pub(crate) struct Lexer<'a> {
    input: &'a str,
    src: &'a [u8],
    i: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(s: &'a str) -> Self {
        Self {
            input: s,
            src: s.as_bytes(),
            i: 0,
        }
    }
    fn peek(&self) -> Option<u8> {
        self.src.get(self.i).copied()
    }
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.src.get(self.i + offset).copied()
    }
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            // isspace set: ASCII whitespace plus vertical tab
            if c.is_ascii_whitespace() || c == 0x0b {
                self.i += 1;
            } else {
                break;
            }
        }
    }
    fn invalid(&self, start: usize, end: usize) -> ExprError {
        // Offsets always sit on char boundaries: only ASCII is ever consumed.
        let fragment = if end > start {
            self.input[start..end].to_string()
        } else {
            self.input[start..]
                .chars()
                .next()
                .map(String::from)
                .unwrap_or_default()
        };
        ExprError::InvalidInput {
            input: self.input.to_string(),
            position: start,
            fragment,
        }
    }
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>, ExprError> {
        self.skip_ws();
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None),
        };
        if c.is_ascii_digit() || c == b'.' {
            return self.lex_number().map(Some);
        }
        match operator::lookup(c) {
            Some(op) => {
                self.i += 1;
                Ok(Some(Token::Operator(op)))
            }
            None => Err(self.invalid(self.i, self.i)),
        }
    }
    fn eat_digits(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.i += 1;
            } else {
                break;
            }
        }
    }
    // Consumes the whole run of digits and points, then an optional exponent.
    // The run must hold at least one digit and at most one point.
    fn lex_number(&mut self) -> Result<Token, ExprError> {
        let start = self.i;
        let mut digits = 0usize;
        let mut points = 0usize;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                digits += 1;
            } else if c == b'.' {
                points += 1;
            } else {
                break;
            }
            self.i += 1;
        }
        if digits == 0 || points > 1 {
            return Err(self.invalid(start, self.i));
        }
        // An exponent only counts when at least one digit follows it.
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let sign = usize::from(matches!(self.peek_at(1), Some(b'+' | b'-')));
            if self.peek_at(1 + sign).is_some_and(|d| d.is_ascii_digit()) {
                self.i += 1 + sign;
                self.eat_digits();
            }
        }
        let s = &self.input[start..self.i];
        match s.parse::<f64>() {
            // Overflowing literals would render as `inf`.
            Ok(v) if v.is_finite() => Ok(Token::Number(v)),
            _ => Err(self.invalid(start, self.i)),
        }
    }
}

/// Scans `text` into tokens in a single left-to-right pass. Numeric literals
/// that overflow `f64` are rejected.
///
/// Whitespace (ASCII whitespace and vertical tab) separates tokens and is
/// otherwise dropped. Letters are not accepted: variables cannot be written
/// in source text.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ExprError> {
    let mut lex = Lexer::new(text);
    let mut tokens = Vec::new();
    while let Some(tok) = lex.next_token()? {
        trace!("token {}", tok);
        tokens.push(tok);
    }
    Ok(tokens)
}
