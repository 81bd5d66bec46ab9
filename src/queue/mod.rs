//! Message queue component
//!
//! The shared FIFO between the producer and the sender pool, plus the
//! message type and the random message generator that feed it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Producer   │  generate_message_with(rng)
//! └──────┬───────┘
//!        │ push
//!        ▼
//! ┌─────────────────────────────────────────┐
//! │        dyn MessageQueue (FIFO)          │
//! │  ┌───┬───┬───┬───┬───┬───┬───┬───┐      │
//! │  │ 1 │ 2 │ 3 │ 4 │ 5 │ 6 │ 7 │...│      │
//! │  └───┴───┴───┴───┴───┴───┴───┴───┘      │
//! └────────┬───────────┬───────────┬────────┘
//!          │ pop       │ pop       │ pop      (each message to one sender)
//! ┌────────┴──┐ ┌──────┴────┐ ┌────┴──────┐
//! │ Sender 0  │ │ Sender 1  │ │ Sender N  │
//! └───────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use sms_simulator::queue::{Message, MessageQueue, SharedQueue};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let queue = SharedQueue::new();
//! queue.push(Message::new("hello"))?;
//!
//! let message = queue.pop_timeout(Duration::from_millis(100)).await?;
//! assert_eq!(message.map(Message::into_inner), Some("hello".to_string()));
//! # Ok(())
//! # }
//! ```

mod error;
mod internal;
mod message;
mod traits;

pub use error::{QueueError, QueueResult};
pub use internal::SharedQueue;
pub use message::{
    generate_message_with, generate_random_message, is_message_char, Message, ALPHABET,
    MAX_MESSAGE_LEN, MIN_MESSAGE_LEN,
};
pub use traits::MessageQueue;

#[cfg(test)]
mod tests;
