//! SMS delivery simulation
//!
//! One producer fills the shared queue with random messages while a pool of
//! senders drains it. Each sender waits an exponentially distributed time
//! per message and fails it with its own probability. A monitor prints the
//! shared counters while this happens.
//!
//! # Example
//!
//! ```rust,no_run
//! use sms_simulator::simulation::{Simulation, SimulationConfig};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SimulationConfig::new(1_000, 5)
//!     .with_processing_times(vec![0.2, 0.3, 0.4, 0.5, 0.6])
//!     .with_failure_rates(vec![0.05, 0.1, 0.15, 0.2, 0.25])
//!     .with_update_interval(5.0);
//!
//! let simulation = Arc::new(Simulation::new(config)?);
//! let report = simulation.run().await?;
//! println!("{} sent, {} failed", report.snapshot.success_messages, report.snapshot.failed_messages);
//! # Ok(())
//! # }
//! ```

mod config;
mod core;
mod counters;
mod error;
mod monitor;
mod producer;
mod report;
mod run;
mod sender;

pub use config::{
    ExponentialDelay, MonitorTermination, SenderProfile, ServiceTime, SimulationConfig,
    DEFAULT_DEQUEUE_TIMEOUT, DEFAULT_FAILURE_RATE, DEFAULT_PROCESSING_TIME_SECS,
    MAX_DEQUEUE_TIMEOUT,
};
pub use core::{ProductionState, Simulation};
pub use counters::{CounterSnapshot, Outcome, SharedCounters};
pub use error::{ConfigError, SimulationError, SimulationResult};
pub use report::{SenderTally, SimulationReport};

#[cfg(test)]
mod tests;
