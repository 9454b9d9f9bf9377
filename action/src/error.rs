//! Error types for an action run.
//!
//! Every failure reaches `main` as an [`ActionError`], is logged once as a
//! workflow error command, and becomes exit code 1.

use thiserror::Error;

use crate::github::FetchError;
use crate::output::OutputError;

/// Errors that can end an action run.
#[derive(Debug, Error)]
pub enum ActionError {
    /// One or more inputs failed validation, or the manifest could not be
    /// written. The report is the serialized validation error map.
    #[error("{report}")]
    InvalidInputs {
        /// JSON object mapping input names to error messages.
        report: String,
    },

    /// Listing releases failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Serialise(#[from] serde_json::Error),

    /// Writing a step output failed.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Result type for action operations.
pub type Result<T> = std::result::Result<T, ActionError>;
