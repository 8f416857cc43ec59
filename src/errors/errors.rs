use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::Position;

/// A lexical failure. Scanning halts on the first one.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedEnd => "UnexpectedEnd",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnimplementedFeature { .. } => "UnimplementedFeature",
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedEnd => ErrorTip::Suggestion(String::from(
                "The lexer read past the end of the source, this is a lexer bug",
            )),
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Multi-line comment is never closed, add a matching `*/`",
            )),
            ErrorImpl::UnimplementedFeature { feature } => {
                ErrorTip::Suggestion(format!("{} are not supported yet", feature))
            }
            ErrorImpl::UnknownToken { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("reached end of source (lexer crash)")]
    UnexpectedEnd,
    #[error("multi-line comment reaches end of source")]
    UnterminatedComment,
    #[error("{feature} are a stub")]
    UnimplementedFeature { feature: String },
    #[error("unknown token: {token:?}")]
    UnknownToken { token: String },
}
