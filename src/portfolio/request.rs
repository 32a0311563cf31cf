//! Wire types for the portfolio revalidation endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::routes::{POSTS_COLLECTION, POSTS_TAG, portfolio_post_path};

/// What the portfolio site should refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevalidationTarget {
    pub path: String,
    pub tag: String,
    pub collection: String,
}

impl RevalidationTarget {
    pub fn new(
        path: impl Into<String>,
        tag: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
            collection: collection.into(),
        }
    }

    /// Target for a post rendered at `/blog/{slug}` on the portfolio site.
    pub fn post(slug: &str) -> Self {
        Self::new(portfolio_post_path(slug), POSTS_TAG, POSTS_COLLECTION)
    }
}

/// JSON body of the outbound POST.
#[derive(Clone, Serialize)]
pub struct RevalidationRequest<'a> {
    pub secret: &'a str,
    pub path: &'a str,
    pub tag: &'a str,
    pub collection: &'a str,
}

impl<'a> RevalidationRequest<'a> {
    pub fn new(secret: &'a str, target: &'a RevalidationTarget) -> Self {
        Self {
            secret,
            path: &target.path,
            tag: &target.tag,
            collection: &target.collection,
        }
    }
}

impl fmt::Debug for RevalidationRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevalidationRequest")
            .field("secret", &"<redacted>")
            .field("path", &self.path)
            .field("tag", &self.tag)
            .field("collection", &self.collection)
            .finish()
    }
}

/// Success body. Only `now` is read, and only for logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevalidationResponse {
    #[serde(default)]
    pub now: Value,
}
