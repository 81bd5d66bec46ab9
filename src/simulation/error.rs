//! Simulation Error Types

use crate::core::error_handling::ContextualError;
use crate::queue::QueueError;

/// Rejected simulation configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("senders count must be at least 1")]
    InvalidSendersCount,

    #[error("{field} has {actual} entries but there are {expected} senders")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("failure rate {value} for sender {slot} is not between 0 and 1")]
    InvalidFailureRate { slot: usize, value: f64 },

    #[error("processing time {value} for sender {slot} must be a non-negative number of seconds")]
    InvalidProcessingTime { slot: usize, value: f64 },

    #[error("progress monitor interval {value} must be a non-negative number of seconds")]
    InvalidInterval { value: f64 },

    #[error("dequeue timeout {value:?} must be above zero and at most one minute")]
    InvalidDequeueTimeout { value: std::time::Duration },
}

/// Errors that abort a simulation run
///
/// A simulated delivery failure is not one of these; it is counted.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Simulation task failed: {message}")]
    TaskFailed { message: String },

    #[error("Failed to start async runtime: {message}")]
    Runtime { message: String },

    #[error("Simulation has already been started")]
    AlreadyStarted,

    #[error("Synchronisation error: {message}")]
    Synchronisation { message: String },
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ContextualError for SimulationError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, SimulationError::Config(_))
    }

    fn user_message(&self) -> Option<String> {
        match self {
            SimulationError::Config(error) => error.user_message(),
            _ => None,
        }
    }
}
