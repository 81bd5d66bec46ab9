//! Shared test doubles

use crate::queue::{Message, MessageQueue, QueueResult, SharedQueue};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Queue whose `is_empty` answers follow a script
///
/// Everything else is delegated to an inner [`SharedQueue`]. Once the
/// script runs out, `is_empty` reports the real state.
pub struct ScriptedQueue {
    inner: SharedQueue,
    empty_answers: Mutex<VecDeque<bool>>,
    empty_calls: Mutex<usize>,
}

impl ScriptedQueue {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            inner: SharedQueue::new(),
            empty_answers: Mutex::new(answers.iter().copied().collect()),
            empty_calls: Mutex::new(0),
        }
    }

    pub fn empty_calls(&self) -> usize {
        *self.empty_calls.lock().unwrap()
    }
}

#[async_trait]
impl MessageQueue for ScriptedQueue {
    fn push(&self, message: Message) -> QueueResult<()> {
        self.inner.push(message)
    }

    async fn pop_timeout(&self, wait: Duration) -> QueueResult<Option<Message>> {
        self.inner.pop_timeout(wait).await
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        *self.empty_calls.lock().unwrap() += 1;
        match self.empty_answers.lock().unwrap().pop_front() {
            Some(answer) => answer,
            None => self.inner.is_empty(),
        }
    }
}

/// Cloneable in-memory writer for capturing monitor output
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that always fails, like a closed stdout
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
