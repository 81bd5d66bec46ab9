//! Shared outcome counters
//!
//! All three fields sit behind a single mutex so a snapshot never mixes a
//! new count with an old total, which would skew the average.

use crate::core::sync::handle_mutex_poison;
use crate::simulation::error::{SimulationError, SimulationResult};
use serde::Serialize;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Result of one simulated delivery
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

/// Point-in-time copy of the counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct CounterSnapshot {
    pub success_messages: u64,
    pub failed_messages: u64,
    /// Accumulated simulated processing time in seconds
    pub total_processing_time: f64,
}

impl CounterSnapshot {
    /// Messages that have reached an outcome
    pub fn processed(&self) -> u64 {
        self.success_messages + self.failed_messages
    }

    /// Mean processing time per message in seconds, 0.0 before the first outcome
    pub fn average_time(&self) -> f64 {
        match self.processed() {
            0 => 0.0,
            n => self.total_processing_time / n as f64,
        }
    }
}

impl fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Messages sent: {}, Messages failed: {}, Avg Time per message: {:.2} seconds",
            self.success_messages,
            self.failed_messages,
            self.average_time()
        )
    }
}

/// Counters updated by every sender and read by the monitor
#[derive(Debug, Default)]
pub struct SharedCounters {
    state: Mutex<CounterSnapshot>,
}

impl SharedCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome and add its processing time, atomically
    pub fn record(&self, outcome: Outcome, processing_time: Duration) -> SimulationResult<()> {
        let mut state = self.lock()?;
        match outcome {
            Outcome::Sent => state.success_messages += 1,
            Outcome::Failed => state.failed_messages += 1,
        }
        state.total_processing_time += processing_time.as_secs_f64();
        Ok(())
    }

    /// Consistent copy of all three counters
    pub fn snapshot(&self) -> SimulationResult<CounterSnapshot> {
        Ok(*self.lock()?)
    }

    /// Overwrite the counters
    pub fn set(&self, snapshot: CounterSnapshot) -> SimulationResult<()> {
        *self.lock()? = snapshot;
        Ok(())
    }

    fn lock(&self) -> SimulationResult<MutexGuard<'_, CounterSnapshot>> {
        handle_mutex_poison(self.state.lock(), |message| {
            SimulationError::Synchronisation { message }
        })
    }
}
