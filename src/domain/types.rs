//! Shared domain enumerations aligned with the host's document schema.

use serde::{Deserialize, Serialize};

/// Publication state carried in a document's `_status` field.
///
/// Only `published` is meaningful to revalidation. Any state the host adds
/// beyond `draft` is kept verbatim in [`PostStatus::Other`] so it serializes
/// back exactly as it arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Other(String),
}

impl PostStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, PostStatus::Published)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for PostStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "draft" => PostStatus::Draft,
            "published" => PostStatus::Published,
            _ => PostStatus::Other(raw),
        }
    }
}

impl From<PostStatus> for String {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let status: PostStatus = serde_json::from_str("\"scheduled\"").expect("status");
        assert_eq!(status, PostStatus::Other("scheduled".to_owned()));
        assert!(!status.is_published());
        assert_eq!(status.as_str(), "scheduled");
        assert_eq!(
            serde_json::to_string(&status).expect("serialize"),
            "\"scheduled\""
        );
    }

    #[test]
    fn status_matching_is_case_sensitive() {
        let status: PostStatus = serde_json::from_str("\"Published\"").expect("status");
        assert!(!status.is_published());
        assert_eq!(status.as_str(), "Published");
    }

    #[test]
    fn published_round_trips_as_snake_case() {
        let status: PostStatus = serde_json::from_str("\"published\"").expect("status");
        assert!(status.is_published());
        assert_eq!(
            serde_json::to_string(&status).expect("serialize"),
            "\"published\""
        );
    }
}
