//! Local cache invalidation.
//!
//! [`CacheInvalidator`] is the seam the revalidation hook calls into.
//! [`InvalidationQueue`] is an in-process implementation that records
//! requests for the host to apply.

mod events;
mod invalidator;
mod lock;

pub use events::{Epoch, InvalidationEvent, InvalidationKind, InvalidationQueue};
pub use invalidator::{CacheInvalidator, InvalidationError};
