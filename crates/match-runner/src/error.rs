//! Error types for the match runner crate.

use std::error::Error;
use std::fmt;
use std::io;

use bounce_core::error::BoardError;

/// Error type for match runner operations.
#[derive(Debug)]
pub enum MatchRunnerError {
    /// I/O operation failed
    Io(io::Error),
    /// A board operation was rejected
    Board(BoardError),
    /// Game flow error, e.g. an engine without a move
    Game(String),
    /// Configuration validation error
    Config(String),
}

impl fmt::Display for MatchRunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRunnerError::Io(err) => write!(f, "IO error: {err}"),
            MatchRunnerError::Board(err) => write!(f, "Board error: {err}"),
            MatchRunnerError::Game(msg) => write!(f, "Game error: {msg}"),
            MatchRunnerError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl Error for MatchRunnerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatchRunnerError::Io(err) => Some(err),
            MatchRunnerError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MatchRunnerError {
    fn from(err: io::Error) -> Self {
        MatchRunnerError::Io(err)
    }
}

impl From<BoardError> for MatchRunnerError {
    fn from(err: BoardError) -> Self {
        MatchRunnerError::Board(err)
    }
}

/// Convenience type alias for Results with MatchRunnerError.
pub type Result<T> = std::result::Result<T, MatchRunnerError>;
