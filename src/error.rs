//! Crate error type.
//!
//! Only terminal setup and terminal output can fail. Structural tree operations
//! with invalid ids or indices are ignored rather than reported, and geometry
//! underflow is clamped, so neither shows up here.

use std::io;

/// Errors surfaced by cellbox.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The terminal could not be switched into raw / alternate-screen mode.
    #[error("failed to initialise terminal: {0}")]
    Terminal(#[source] io::Error),

    /// Writing a frame to the terminal failed.
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
