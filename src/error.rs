//! Error type shared by the annealing core and the point source.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by this crate.
///
/// Degenerate instances (zero or one point) are not errors: `solve`
/// returns the trivial tour for them.
#[derive(Debug, Error)]
pub enum TspError {
    /// The annealing schedule cannot run: non-positive or non-finite
    /// temperatures, `min_temperature >= initial_temperature`, or a
    /// cooling rate outside `(0, 1)`.
    #[error("invalid schedule parameters: {0}")]
    InvalidScheduleParameters(String),

    /// An operation received a route it cannot work on.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The point source could not be read.
    #[error("point source {} unavailable: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The point source was read but a line could not be parsed.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self::InvalidScheduleParameters(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
