//! Traits for the queue system
//!
//! The simulation only depends on [`MessageQueue`], so tests can hand it a
//! pre-seeded or instrumented queue instead of the default [`SharedQueue`].
//!
//! [`SharedQueue`]: crate::queue::SharedQueue

use crate::queue::error::QueueResult;
use crate::queue::message::Message;
use async_trait::async_trait;
use std::time::Duration;

/// A thread-safe FIFO of pending messages with a timed dequeue
///
/// Each message pushed is handed to exactly one caller of [`pop_timeout`].
///
/// [`pop_timeout`]: MessageQueue::pop_timeout
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Append a message at the back of the queue
    fn push(&self, message: Message) -> QueueResult<()>;

    /// Take the front message, waiting at most `wait` for one to arrive
    ///
    /// Returns `Ok(None)` when the wait elapsed with the queue still empty.
    async fn pop_timeout(&self, wait: Duration) -> QueueResult<Option<Message>>;

    /// Number of messages currently queued
    fn len(&self) -> usize;

    /// Non-blocking emptiness check
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
