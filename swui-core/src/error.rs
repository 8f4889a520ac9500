//! Construction-time errors

use thiserror::Error;

/// Failure while turning a document tree into mounted routes.
///
/// Any of these aborts construction; a partially mounted router is never
/// handed back.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("failed to load specification documents from {source_name}")]
    Source {
        source_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("documents {first} and {second} both map to /{url_path}")]
    DuplicateMount {
        url_path: String,
        first: String,
        second: String,
    },

    #[error("document {storage_path} derives unusable mount path {url_path:?}: {reason}")]
    InvalidMountPath {
        storage_path: String,
        url_path: String,
        reason: &'static str,
    },
}

impl MountError {
    /// Wrap an error raised by a document source
    pub fn load_failed(source_name: impl Into<String>, error: anyhow::Error) -> Self {
        MountError::Source {
            source_name: source_name.into(),
            source: error.into(),
        }
    }
}
