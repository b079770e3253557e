//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when fetching puzzle input
#[derive(Error, Debug)]
pub enum AocError {
    /// No session credential configured; nothing was sent
    #[error("AOC_SESSION token is missing! Cannot fetch input.")]
    CredentialMissing,

    /// The server answered with a non-success status
    #[error("Failed to fetch input: {} {reason}", status.as_u16())]
    FetchFailed {
        /// The status code that was received
        status: reqwest::StatusCode,
        /// Reason phrase for the status code
        reason: String,
    },

    /// Transport-level failure (connection, TLS, body read)
    #[error("Network error while fetching input: {0}")]
    Network(#[from] reqwest::Error),

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
