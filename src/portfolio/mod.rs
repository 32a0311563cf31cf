//! Best-effort revalidation callback to the portfolio site.
//!
//! The portfolio site mirrors published posts and keeps its own cache. After a
//! post changes, it is told which path and tag to refresh via a single JSON
//! POST authenticated with a shared secret.

mod config;
mod error;
mod notifier;
mod request;

pub use config::PortfolioConfig;
pub use error::NotifyError;
pub use notifier::{NotifyOutcome, PortfolioNotifier};
pub use request::{RevalidationRequest, RevalidationResponse, RevalidationTarget};
