//! Typed domain errors.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator at command boundaries.

use thiserror::Error;

/// Errors surfaced by distribution lookup and default selection.
#[derive(Debug, Error)]
pub enum DistroError {
    #[error("No WSL distributions detected. Is WSL installed?")]
    NoneDetected,

    #[error("Distribution '{requested}' not found.\n\nInstalled distributions:\n{listing}")]
    NotFound { requested: String, listing: String },

    #[error("No default distribution configured. Set one with: wwset set <distro>")]
    NoDefault,

    #[error("No command given. Usage: wwset [<distro>] <command...>")]
    MissingCommand,
}
