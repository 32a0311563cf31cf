//! Post revalidation lifecycle hook.
//!
//! Registered by the host as the after-change and after-delete callback of
//! the posts collection. Local invalidation failures propagate to the host;
//! portfolio notification failures are logged and dropped.

use std::sync::Arc;

use thiserror::Error;
use tracing::{Instrument, Span, debug, info, warn};

use crate::{
    cache::{CacheInvalidator, InvalidationError},
    domain::{
        entities::PostDocument,
        routes::{POSTS_SITEMAP_TAG, local_post_path},
    },
    portfolio::{PortfolioNotifier, RevalidationTarget},
};

/// Request-scoped inputs supplied by the host with each lifecycle event.
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Skip every side effect, e.g. during bulk imports.
    pub disable_revalidate: bool,
    /// Span the hook logs under; usually the host's request span.
    pub span: Span,
}

impl HookContext {
    pub fn new(span: Span) -> Self {
        Self {
            disable_revalidate: false,
            span,
        }
    }

    /// A context that suppresses revalidation.
    pub fn suppressed(span: Span) -> Self {
        Self {
            disable_revalidate: true,
            span,
        }
    }
}

impl Default for HookContext {
    fn default() -> Self {
        Self::new(Span::current())
    }
}

#[derive(Debug, Error)]
pub enum HookError {
    #[error("local cache invalidation failed: {0}")]
    Invalidation(#[from] InvalidationError),
}

/// Why a post is being revalidated. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reason {
    Published,
    Unpublished,
    Deleted,
}

impl Reason {
    fn as_str(self) -> &'static str {
        match self {
            Reason::Published => "published",
            Reason::Unpublished => "unpublished",
            Reason::Deleted => "deleted",
        }
    }
}

#[derive(Clone)]
pub struct PostRevalidationHook {
    invalidator: Arc<dyn CacheInvalidator>,
    notifier: PortfolioNotifier,
}

impl PostRevalidationHook {
    pub fn new(invalidator: Arc<dyn CacheInvalidator>, notifier: PortfolioNotifier) -> Self {
        Self {
            invalidator,
            notifier,
        }
    }

    pub fn notifier(&self) -> &PortfolioNotifier {
        &self.notifier
    }

    /// After-change callback. `previous` is `None` on create.
    ///
    /// A published document revalidates its own path. A document that left
    /// the published state revalidates the path it was published under. Both
    /// can apply to the same save. The document is returned unchanged.
    pub async fn after_change(
        &self,
        doc: PostDocument,
        previous: Option<&PostDocument>,
        ctx: &HookContext,
    ) -> Result<PostDocument, HookError> {
        if ctx.disable_revalidate {
            debug!(parent: &ctx.span, "Post revalidation disabled by context");
            return Ok(doc);
        }

        let unpublished = previous.is_some_and(PostDocument::is_published) && !doc.is_published();

        async {
            if doc.is_published() {
                self.revalidate(doc.slug(), Reason::Published).await?;
            }

            if unpublished {
                self.revalidate(previous.and_then(PostDocument::slug), Reason::Unpublished)
                    .await?;
            }

            Ok::<_, HookError>(())
        }
        .instrument(ctx.span.clone())
        .await?;

        Ok(doc)
    }

    /// After-delete callback. The document is returned unchanged.
    pub async fn after_delete(
        &self,
        doc: PostDocument,
        ctx: &HookContext,
    ) -> Result<PostDocument, HookError> {
        if ctx.disable_revalidate {
            debug!(parent: &ctx.span, "Post revalidation disabled by context");
            return Ok(doc);
        }

        self.revalidate(doc.slug(), Reason::Deleted)
            .instrument(ctx.span.clone())
            .await?;

        Ok(doc)
    }

    async fn revalidate(&self, slug: Option<&str>, reason: Reason) -> Result<(), HookError> {
        let Some(slug) = slug else {
            warn!(
                reason = reason.as_str(),
                "Skipping post revalidation: document has no slug"
            );
            return Ok(());
        };

        let path = local_post_path(slug);
        info!(path = %path, reason = reason.as_str(), "Revalidating post");

        self.invalidator.revalidate_path(&path).await?;
        self.invalidator.revalidate_tag(POSTS_SITEMAP_TAG).await?;

        self.notifier
            .notify_and_log(&RevalidationTarget::post(slug))
            .await;

        Ok(())
    }
}
