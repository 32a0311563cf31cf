//! Application services layer.

pub mod error;
pub mod revalidate;

pub use revalidate::{HookContext, HookError, PostRevalidationHook};
