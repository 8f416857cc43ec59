use lazy_static::lazy_static;
use std::fmt::Display;

use crate::Position;

lazy_static! {
    /// Every fixed-text token, lower index = higher priority.
    pub static ref MATCH_TABLE: Vec<(&'static str, TokenKind)> = vec![
        ("\n", TokenKind::LineFeed),

        ("!=", TokenKind::NotEqual),
        ("<>", TokenKind::NotEqual),
        ("<", TokenKind::Inferior),
        ("<=", TokenKind::InferiorEqual),
        (">", TokenKind::Superior),
        (">=", TokenKind::SuperiorEqual),

        ("{", TokenKind::BraceLeft),
        ("}", TokenKind::BraceRight),
        ("(", TokenKind::ParenthesisLeft),
        (")", TokenKind::ParenthesisRight),

        (".", TokenKind::Dot),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),

        ("&&", TokenKind::LogicAnd),
        ("||", TokenKind::LogicOr),
        ("^^", TokenKind::LogicXor),

        ("[@", TokenKind::AccessorLeftArrayRef),
        ("[|", TokenKind::AccessorLeftDsList),
        ("[?", TokenKind::AccessorLeftDsMap),
        ("[#", TokenKind::AccessorLeftDsGrid),
        ("[", TokenKind::AccessorLeftArrayValue),
        ("]", TokenKind::AccessorRight),

        ("++", TokenKind::Increment),
        ("--", TokenKind::Decrement),

        ("+=", TokenKind::AssignAdd),
        ("-=", TokenKind::AssignSubtract),
        ("*=", TokenKind::AssignMultiply),
        ("/=", TokenKind::AssignDivide),
        ("&=", TokenKind::AssignAnd),
        ("|=", TokenKind::AssignOr),
        ("^=", TokenKind::AssignXor),

        ("<<=", TokenKind::AssignShiftLeft),
        (">>=", TokenKind::AssignShiftRight),

        ("==", TokenKind::DoubleEqual),
        ("=", TokenKind::Equal),

        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Multiply),
        ("/", TokenKind::Divide),

        ("div", TokenKind::EuclDivide),
        ("mod", TokenKind::EuclModulo),
        ("%", TokenKind::EuclModulo),

        ("&", TokenKind::BitAnd),
        ("|", TokenKind::BitOr),
        ("^", TokenKind::BitXor),

        ("if", TokenKind::If),
        ("else if", TokenKind::ElseIf),
        ("else", TokenKind::Else),

        ("for", TokenKind::For),
        ("while", TokenKind::While),
        ("do", TokenKind::Do),
        ("repeat", TokenKind::Repeat),
        ("with", TokenKind::With),

        ("var", TokenKind::LocalVar),
    ];

    /// The table reordered for longest-match scanning: longer spellings first,
    /// equal lengths keep their table priority (the sort is stable).
    pub static ref SCAN_ORDER: Vec<(&'static str, TokenKind)> = {
        let mut order = MATCH_TABLE.clone();
        order.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        order
    };

    /// Length in bytes of the longest fixed-text spelling.
    pub static ref MAX_MATCH_LEN: usize = MATCH_TABLE
        .iter()
        .map(|(spelling, _)| spelling.len())
        .max()
        .unwrap_or(0);
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LineFeed,

    NotEqual, // != and <>
    Inferior,
    InferiorEqual,
    Superior,
    SuperiorEqual,

    BraceLeft,
    BraceRight,
    ParenthesisLeft,
    ParenthesisRight,

    Dot,
    Comma,
    Semicolon,

    LogicAnd,
    LogicOr,
    LogicXor,

    AccessorLeftArrayRef,   // [@
    AccessorLeftDsList,     // [|
    AccessorLeftDsMap,      // [?
    AccessorLeftDsGrid,     // [#
    AccessorLeftArrayValue, // [
    AccessorRight,

    Increment,
    Decrement,

    AssignAdd,
    AssignSubtract,
    AssignMultiply,
    AssignDivide,
    AssignAnd,
    AssignOr,
    AssignXor,
    AssignShiftLeft,
    AssignShiftRight,

    DoubleEqual, // ==
    Equal,       // =

    Plus,
    Minus,
    Multiply,
    Divide,

    EuclDivide, // div
    EuclModulo, // mod and %

    BitAnd,
    BitOr,
    BitXor,

    // Reserved
    If,
    ElseIf,
    Else,
    For,
    While,
    Do,
    Repeat,
    With,
    LocalVar,

    Identifier,
    StringLiteral,
    RealLiteral,

    End,
}

impl TokenKind {
    /// Kinds whose token carries the scanned text.
    pub fn carries_value(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::RealLiteral
        )
    }

    /// The highest-priority spelling for a fixed-text kind.
    pub fn spelling(self) -> Option<&'static str> {
        MATCH_TABLE
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(spelling, _)| *spelling)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub position: Position,
}

impl Token {
    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn col(&self) -> u32 {
        self.position.col
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({:?})", self.kind, value),
            None => write!(f, "{} ()", self.kind),
        }
    }
}
