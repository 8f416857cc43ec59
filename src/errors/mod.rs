//! Error types and error handling for the lexer.
//!
//! This module defines the errors raised while scanning. It includes:
//!
//! - Error structures with line/column information
//! - The closed set of lexical failure variants
//! - Error naming and suggestions for diagnostics

pub mod errors;
