//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that can occur while loading or saving statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The statistics file could not be read or written.
    #[error("statistics file error: {0}")]
    Io(#[from] std::io::Error),
    /// The statistics file holds malformed JSON.
    #[error("statistics file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}
