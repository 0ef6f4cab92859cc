//! Errors raised while turning arguments into values.
//!
//! Every error aborts the whole parse. Positions count arguments from zero: in `num bad`, `bad`
//! is argument 1.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("unexpected end of arguments (expected {expected})")]
    UnexpectedEnd { expected: &'static str },

    #[error(
        "expected object key (ending in :) or 'key' keyword at argument {position}, but got {arg:?}"
    )]
    ExpectedKey { arg: String, position: usize },

    #[error("argument {position}; expected value, got key")]
    UnexpectedKey { position: usize },

    #[error("argument {position}; expected ] got {arg:?}")]
    ExpectedCloseBracket { arg: String, position: usize },

    #[error("unexpected argument ] at {position}, expected value")]
    StrayCloseBracket { position: usize },

    #[error("unexpected argument {arg:?} at {position}")]
    TrailingArgument { arg: String, position: usize },

    #[error("unexpected argument {arg:?} at {position}; only one top-level value is allowed")]
    MultipleTopLevelValues { arg: String, position: usize },

    #[error("invalid number {arg:?} at argument {position}")]
    InvalidNumber { arg: String, position: usize },

    #[error("{arg:?} is not a regular floating point number and cannot be encoded to JSON")]
    NonFiniteNumber { arg: String, position: usize },

    #[error("invalid boolean {arg:?} at argument {position}")]
    InvalidBoolean { arg: String, position: usize },

    #[error("cannot unmarshal json {arg:?} at argument {position}")]
    InvalidEmbeddedJson {
        arg: String,
        position: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode value at argument {position} as a JSON string")]
    Unencodable {
        position: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Fieldless mirror of [`SyntaxError`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnexpectedEnd,
    ExpectedKey,
    UnexpectedKey,
    ExpectedCloseBracket,
    StrayCloseBracket,
    TrailingArgument,
    MultipleTopLevelValues,
    InvalidNumber,
    NonFiniteNumber,
    InvalidBoolean,
    InvalidEmbeddedJson,
    Unencodable,
}

impl SyntaxError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyntaxError::UnexpectedEnd { .. } => ErrorKind::UnexpectedEnd,
            SyntaxError::ExpectedKey { .. } => ErrorKind::ExpectedKey,
            SyntaxError::UnexpectedKey { .. } => ErrorKind::UnexpectedKey,
            SyntaxError::ExpectedCloseBracket { .. } => ErrorKind::ExpectedCloseBracket,
            SyntaxError::StrayCloseBracket { .. } => ErrorKind::StrayCloseBracket,
            SyntaxError::TrailingArgument { .. } => ErrorKind::TrailingArgument,
            SyntaxError::MultipleTopLevelValues { .. } => ErrorKind::MultipleTopLevelValues,
            SyntaxError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            SyntaxError::NonFiniteNumber { .. } => ErrorKind::NonFiniteNumber,
            SyntaxError::InvalidBoolean { .. } => ErrorKind::InvalidBoolean,
            SyntaxError::InvalidEmbeddedJson { .. } => ErrorKind::InvalidEmbeddedJson,
            SyntaxError::Unencodable { .. } => ErrorKind::Unencodable,
        }
    }

    /// The offending argument, if the error is tied to one. Running out of arguments is not.
    pub fn position(&self) -> Option<usize> {
        match self {
            SyntaxError::UnexpectedEnd { .. } => None,
            SyntaxError::ExpectedKey { position, .. }
            | SyntaxError::UnexpectedKey { position }
            | SyntaxError::ExpectedCloseBracket { position, .. }
            | SyntaxError::StrayCloseBracket { position }
            | SyntaxError::TrailingArgument { position, .. }
            | SyntaxError::MultipleTopLevelValues { position, .. }
            | SyntaxError::InvalidNumber { position, .. }
            | SyntaxError::NonFiniteNumber { position, .. }
            | SyntaxError::InvalidBoolean { position, .. }
            | SyntaxError::InvalidEmbeddedJson { position, .. }
            | SyntaxError::Unencodable { position, .. } => Some(*position),
        }
    }
}
