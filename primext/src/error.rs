//! Error types for primext.

use std::{fmt, io};
use thiserror::Error;

/// Main error type for primext operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying I/O failure (process pipes, echo sink, filesystem)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A `fmt::Write` sink refused a write during a join
    #[error("Format error: {0}")]
    Format(#[from] fmt::Error),

    /// Stack helper errors
    #[error("Stack error: {0}")]
    Stack(#[from] StackError),

    /// Trigger table errors
    #[error("Trigger error: {0}")]
    Trigger(#[from] TriggerError),

    /// Child process adapter errors
    #[error("Process error: {0}")]
    Process(#[from] ProcessError),
}

/// Errors from multi-element stack operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// More elements were requested than the stack holds
    #[error("Requested {requested} elements but the stack only holds {available}")]
    InsufficientElements { requested: usize, available: usize },
}

/// Trigger table construction errors.
#[derive(Error, Debug)]
pub enum TriggerError {
    /// Invalid regex pattern
    #[error("Invalid trigger pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors attaching a reactor to a child process.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The named stream was not configured with `Stdio::piped()`
    #[error("Child {0} is not piped")]
    StreamNotPiped(&'static str),
}

/// Result type alias using primext's Error.
pub type Result<T> = std::result::Result<T, Error>;
