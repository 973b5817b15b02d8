//! Artifact and staging errors

use super::BundleError;

/// Creates an artifact creation error
pub fn artifact_create_failed(path: impl Into<String>, reason: impl Into<String>) -> BundleError {
    BundleError::ArtifactCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a staging error
pub fn staging_failed(reason: impl Into<String>) -> BundleError {
    BundleError::StagingFailed {
        reason: reason.into(),
    }
}
