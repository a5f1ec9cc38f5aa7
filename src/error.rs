//! Error types for the fifteen crate

use thiserror::Error;

/// Main error type for the fifteen crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("game already completed; call reset() before stepping again")]
    GameAlreadyCompleted,

    #[error("illegal action: value {value} at position {position} is not in the current action space")]
    IllegalAction { position: usize, value: u8 },

    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("value {value} is out of range (must be 1-9)")]
    InvalidValue { value: u8 },

    #[error("value {value} is already on the board")]
    DuplicateValue { value: u8 },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("scripted selector '{selector}' ran out of actions")]
    ScriptExhausted { selector: String },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
