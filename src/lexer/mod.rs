//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts GML source
//! into a stream of tokens for a parser. It handles:
//!
//! - Longest-match recognition of operators, brackets and keywords
//! - String literals with GML escapes and the `#` line-feed shorthand
//! - Identifiers and (unvalidated) real literals
//! - Line and block comments
//! - Line/column tracking for diagnostics

pub mod cursor;
pub mod lexer;
pub mod tokens;
