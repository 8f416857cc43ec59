//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$position` - Position of the token's first character
/// * `$value` - The scanned text, `None` for fixed-text tokens
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::RealLiteral, start, Some("42".to_string()));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $position:expr) => {
        $crate::MK_TOKEN!($kind, $position, None)
    };
    ($kind:expr, $position:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}
