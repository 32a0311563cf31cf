//! Documents handed to the revalidation hook by the host CMS.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::types::PostStatus;

static DRAFT: PostStatus = PostStatus::Draft;

/// A saved or deleted post as seen by the persistence lifecycle.
///
/// Fields the hook does not read are kept in `extra`, and `slug`/`_status`
/// keep `null` as `null`, so the document can be handed back to the host
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(rename = "_status", default)]
    pub status: Option<PostStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostDocument {
    pub fn new(slug: impl Into<String>, status: PostStatus) -> Self {
        Self {
            slug: Some(slug.into()),
            status: Some(status),
            extra: Map::new(),
        }
    }

    /// A document whose slug was never set.
    pub fn without_slug(status: PostStatus) -> Self {
        Self {
            slug: None,
            status: Some(status),
            extra: Map::new(),
        }
    }

    /// The publication state; a missing or `null` `_status` reads as draft.
    pub fn status(&self) -> &PostStatus {
        self.status.as_ref().unwrap_or(&DRAFT)
    }

    pub fn is_published(&self) -> bool {
        self.status().is_published()
    }

    /// The slug as stored, or `None` when it is missing or blank.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|slug| !slug.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_host_shape_and_keeps_unknown_fields() {
        let doc: PostDocument = serde_json::from_value(json!({
            "slug": "hello-world",
            "_status": "published",
            "title": "Hello",
        }))
        .expect("document");

        assert_eq!(doc.slug(), Some("hello-world"));
        assert!(doc.is_published());
        assert_eq!(doc.extra.get("title"), Some(&json!("Hello")));

        let value = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(value["title"], json!("Hello"));
        assert_eq!(value["_status"], json!("published"));
    }

    #[test]
    fn missing_status_defaults_to_draft() {
        let doc: PostDocument = serde_json::from_value(json!({ "slug": "a" })).expect("document");
        assert_eq!(doc.status(), &PostStatus::Draft);
        assert!(!doc.is_published());
    }

    #[test]
    fn null_status_reads_as_draft_and_stays_null() {
        let input = json!({ "slug": "a", "_status": null });
        let doc: PostDocument = serde_json::from_value(input.clone()).expect("document");

        assert_eq!(doc.status(), &PostStatus::Draft);
        assert!(!doc.is_published());
        assert_eq!(serde_json::to_value(&doc).expect("serialize"), input);
    }

    #[test]
    fn null_slug_is_kept_on_serialize() {
        let input = json!({ "_status": "draft", "slug": null });
        let doc: PostDocument = serde_json::from_value(input.clone()).expect("document");

        assert_eq!(doc.slug(), None);
        assert_eq!(serde_json::to_value(&doc).expect("serialize"), input);
    }

    #[test]
    fn unknown_status_survives_round_trip() {
        let input = json!({ "slug": "a", "_status": "scheduled", "title": "T" });
        let doc: PostDocument = serde_json::from_value(input.clone()).expect("document");

        assert!(!doc.is_published());
        assert_eq!(doc.status().as_str(), "scheduled");
        assert_eq!(serde_json::to_value(&doc).expect("serialize"), input);
    }

    #[test]
    fn blank_slug_is_treated_as_absent() {
        let doc = PostDocument::new("   ", PostStatus::Published);
        assert_eq!(doc.slug(), None);
        assert_eq!(PostDocument::without_slug(PostStatus::Draft).slug(), None);
    }

    #[test]
    fn non_blank_slug_is_not_rewritten() {
        let doc = PostDocument::new(" hello", PostStatus::Published);
        assert_eq!(doc.slug(), Some(" hello"));
    }
}
