use std::fmt;

/// Binary operators understood by the tokenizer and the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Times,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 2] = [BinaryOp::Plus, BinaryOp::Times];

    /// The single input character denoting this operator.
    pub const fn symbol(self) -> u8 {
        match self {
            BinaryOp::Plus => b'+',
            BinaryOp::Times => b'*',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol() as char)
    }
}

const fn build_table() -> [Option<BinaryOp>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < BinaryOp::ALL.len() {
        let op = BinaryOp::ALL[i];
        table[op.symbol() as usize] = Some(op);
        i += 1;
    }
    table
}

// Built at compile time, never mutated.
static OPERATOR_TABLE: [Option<BinaryOp>; 256] = build_table();

/// Maps a raw input byte to the operator it denotes, if any.
#[inline]
pub fn lookup(byte: u8) -> Option<BinaryOp> {
    OPERATOR_TABLE[byte as usize]
}
