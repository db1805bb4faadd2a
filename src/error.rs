// In: src/error.rs

//! This module defines the single, unified error type for the run-length-encoder
//! crate. It uses the `thiserror` crate for ergonomic error handling.
//!
//! The encoding kernel itself is total and never returns an error. Everything
//! here belongs to the invocation layer around it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncoderError {
    // =========================================================================
    // === Invocation Errors
    // =========================================================================
    #[error("Invocation payload was empty")]
    EmptyEvent,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library, raised while parsing an event or
    /// serializing a response.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem (stdin/stdout).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
