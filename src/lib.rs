//! Cache revalidation for blog posts.
//!
//! When a post is published, unpublished or deleted, [`PostRevalidationHook`]
//! invalidates the CMS's own cached renderings through a [`CacheInvalidator`]
//! and asks the portfolio site to refresh its copy through a
//! [`PortfolioNotifier`]. Portfolio failures are logged and never fail the
//! save or delete that triggered them.
//!
//! ```ignore
//! let queue = Arc::new(InvalidationQueue::new());
//! let notifier = PortfolioNotifier::new(PortfolioConfig::from(&settings.portfolio))?;
//! let hook = PostRevalidationHook::new(queue.clone(), notifier);
//!
//! let doc = hook.after_change(doc, previous.as_ref(), &HookContext::default()).await?;
//! ```

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;
pub mod portfolio;

pub use application::{HookContext, HookError, PostRevalidationHook};
pub use cache::{CacheInvalidator, InvalidationError, InvalidationQueue};
pub use portfolio::{NotifyError, NotifyOutcome, PortfolioConfig, PortfolioNotifier};
