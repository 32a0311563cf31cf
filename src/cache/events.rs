//! Invalidation event queue.
//!
//! Records path and tag invalidation requests in order so the host can apply
//! them to whatever cache it runs.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use metrics::{counter, gauge};
use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use super::invalidator::{CacheInvalidator, InvalidationError};
use super::lock::mutex_lock;

const SOURCE: &str = "cache::events";
const DEFAULT_QUEUE_LIMIT: usize = 1024;
const METRIC_QUEUE_LEN: &str = "posts_revalidate_invalidation_queue_len";
const METRIC_DROPPED_TOTAL: &str = "posts_revalidate_invalidation_dropped_total";

/// Monotonic epoch for ordering events within this process.
pub type Epoch = u64;

/// What to invalidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationKind {
    /// A single rendered path, e.g. `/posts/hello`.
    Path(String),
    /// Every entry labelled with a tag, e.g. `posts-sitemap`.
    Tag(String),
}

#[derive(Debug, Clone)]
pub struct InvalidationEvent {
    pub id: Uuid,
    pub epoch: Epoch,
    pub kind: InvalidationKind,
    pub timestamp: OffsetDateTime,
}

impl InvalidationEvent {
    pub fn new(kind: InvalidationKind, epoch: Epoch) -> Self {
        Self {
            id: Uuid::new_v4(),
            epoch,
            kind,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// In-memory FIFO of invalidation requests.
///
/// When the queue is full the oldest event is dropped.
pub struct InvalidationQueue {
    queue: Mutex<VecDeque<InvalidationEvent>>,
    epoch_counter: AtomicU64,
    limit: usize,
}

impl InvalidationQueue {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_QUEUE_LIMIT)
    }

    /// Create a queue holding at most `limit` events (clamped to at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            epoch_counter: AtomicU64::new(0),
            limit: limit.max(1),
        }
    }

    pub fn next_epoch(&self) -> Epoch {
        self.epoch_counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Append an event, evicting the oldest one if the queue is full.
    pub fn publish(&self, kind: InvalidationKind) {
        let event = InvalidationEvent::new(kind, self.next_epoch());

        info!(
            event_id = %event.id,
            event_epoch = event.epoch,
            event_kind = ?event.kind,
            "Invalidation event enqueued"
        );

        let mut queue = mutex_lock(&self.queue, SOURCE, "publish");
        if queue.len() >= self.limit
            && let Some(dropped) = queue.pop_front()
        {
            warn!(
                event_id = %dropped.id,
                event_epoch = dropped.epoch,
                limit = self.limit,
                "Invalidation queue full, dropping oldest event"
            );
            counter!(METRIC_DROPPED_TOTAL).increment(1);
        }
        queue.push_back(event);
        gauge!(METRIC_QUEUE_LEN).set(queue.len() as f64);
    }

    /// Drain up to `limit` events in FIFO order.
    pub fn drain(&self, limit: usize) -> Vec<InvalidationEvent> {
        let mut queue = mutex_lock(&self.queue, SOURCE, "drain");
        let count = limit.min(queue.len());
        let drained: Vec<_> = queue.drain(..count).collect();
        gauge!(METRIC_QUEUE_LEN).set(queue.len() as f64);
        drained
    }

    /// Pending kinds in FIFO order, without draining.
    pub fn pending(&self) -> Vec<InvalidationKind> {
        mutex_lock(&self.queue, SOURCE, "pending")
            .iter()
            .map(|event| event.kind.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        mutex_lock(&self.queue, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        mutex_lock(&self.queue, SOURCE, "clear").clear();
        gauge!(METRIC_QUEUE_LEN).set(0.0);
    }
}

impl Default for InvalidationQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInvalidator for InvalidationQueue {
    async fn revalidate_path(&self, path: &str) -> Result<(), InvalidationError> {
        self.publish(InvalidationKind::Path(path.to_string()));
        Ok(())
    }

    async fn revalidate_tag(&self, tag: &str) -> Result<(), InvalidationError> {
        self.publish(InvalidationKind::Tag(tag.to_string()));
        Ok(())
    }
}
