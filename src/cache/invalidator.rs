//! Seam to the host platform's cache-invalidation primitives.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvalidationError {
    #[error("failed to invalidate path `{path}`: {reason}")]
    Path { path: String, reason: String },
    #[error("failed to invalidate tag `{tag}`: {reason}")]
    Tag { tag: String, reason: String },
}

impl InvalidationError {
    pub fn path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn tag(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Tag {
            tag: tag.into(),
            reason: reason.into(),
        }
    }
}

/// Invalidates cached renderings on the CMS site.
///
/// Whether invalidation is immediate or eventual is up to the implementation.
/// Errors are not swallowed by the hook; they surface to the caller of the
/// lifecycle callback.
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Drop the cached rendering served at `path`.
    async fn revalidate_path(&self, path: &str) -> Result<(), InvalidationError>;

    /// Drop every cached entry labelled with `tag`.
    async fn revalidate_tag(&self, tag: &str) -> Result<(), InvalidationError>;
}
