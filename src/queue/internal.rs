//! Default in-memory queue implementation
//!
//! A `VecDeque` behind a mutex plus a `Notify` that wakes one waiting
//! consumer per push. Optionally bounded.

use crate::core::sync::handle_mutex_poison;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::message::Message;
use crate::queue::traits::MessageQueue;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;

// Deadline used when `now + wait` overflows, about 30 years out
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Shared FIFO queue between the producer and the senders
#[derive(Debug, Default)]
pub struct SharedQueue {
    messages: Mutex<VecDeque<Message>>,
    available: Notify,
    /// `None` means unbounded
    max_size: Option<usize>,
}

impl SharedQueue {
    /// Create an unbounded queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue that rejects pushes beyond `max_size` messages
    pub fn bounded(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
            ..Self::default()
        }
    }

    /// Create an unbounded queue already holding `messages`, front first
    pub fn with_messages<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Message>,
    {
        Self {
            messages: Mutex::new(messages.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Copy of the queued messages, front first
    pub fn contents(&self) -> QueueResult<Vec<Message>> {
        Ok(self.lock()?.iter().cloned().collect())
    }

    /// Take the front message without waiting
    pub fn try_pop(&self) -> QueueResult<Option<Message>> {
        Ok(self.lock()?.pop_front())
    }

    fn lock(&self) -> QueueResult<MutexGuard<'_, VecDeque<Message>>> {
        handle_mutex_poison(self.messages.lock(), |message| {
            QueueError::Synchronisation { message }
        })
    }
}

#[async_trait]
impl MessageQueue for SharedQueue {
    fn push(&self, message: Message) -> QueueResult<()> {
        {
            let mut messages = self.lock()?;
            if let Some(max_size) = self.max_size {
                if messages.len() >= max_size {
                    return Err(QueueError::QueueFull { max_size });
                }
            }
            messages.push_back(message);
        }

        self.available.notify_one();
        Ok(())
    }

    async fn pop_timeout(&self, wait: Duration) -> QueueResult<Option<Message>> {
        let now = Instant::now();
        let deadline = now.checked_add(wait).unwrap_or_else(|| now + FAR_FUTURE);

        loop {
            // Register interest before checking so a push in between is not missed
            let notified = self.available.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if let Some(message) = self.try_pop()? {
                return Ok(Some(message));
            }

            if tokio::time::timeout_at(deadline, notified).await.is_err() {
                return self.try_pop();
            }
        }
    }

    fn len(&self) -> usize {
        self.messages
            .lock()
            .map(|messages| messages.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }
}
