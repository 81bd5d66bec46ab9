//! Queue Error Types

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Queue is full (max size: {max_size})")]
    QueueFull { max_size: usize },

    #[error("Queue synchronisation failed: {message}")]
    Synchronisation { message: String },
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
