//! Error types and handling for BundleMe
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only failures that abort the whole run live here. Problems met while
//! walking the tree (unreadable directories, vanished entries, files that
//! cannot be opened) are absorbed by the walker and never surface as errors.
//!
//! - [`fs`]: artifact and staging errors
//! - [`config`]: configuration errors

pub mod config;
pub mod fs;

pub use config::{parse_failed as config_parse_failed, read_failed as config_read_failed};
pub use fs::{artifact_create_failed, staging_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for BundleMe operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundleError {
    // Artifact errors
    #[error("Could not create {path}: {reason}")]
    #[diagnostic(
        code(bundleme::artifact::create_failed),
        help("Check that the output directory exists and is writable")
    )]
    ArtifactCreateFailed { path: String, reason: String },

    #[error("Failed to stage file contents: {reason}")]
    #[diagnostic(
        code(bundleme::staging::failed),
        help("Check that the system temporary directory is writable")
    )]
    StagingFailed { reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(
        code(bundleme::config::parse_failed),
        help("bundleme.yaml accepts the keys name, description, license and author")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(bundleme::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Interaction errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(
        code(bundleme::prompt::failed),
        help("Pass --no-input or the metadata flags to run without prompts")
    )]
    PromptFailed { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bundleme::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BundleError {
    fn from(err: std::io::Error) -> Self {
        BundleError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for BundleError {
    fn from(err: inquire::InquireError) -> Self {
        BundleError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundleError>;
