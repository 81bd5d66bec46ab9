//! Per-sender tallies and the end-of-run report

use crate::simulation::counters::{CounterSnapshot, Outcome};
use serde::Serialize;
use std::time::Duration;

/// What a single sender handled during a run
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SenderTally {
    pub slot: usize,
    pub sent: u64,
    pub failed: u64,
    /// Simulated processing time in seconds
    pub processing_time: f64,
}

impl SenderTally {
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: Outcome, processing_time: Duration) {
        match outcome {
            Outcome::Sent => self.sent += 1,
            Outcome::Failed => self.failed += 1,
        }
        self.processing_time += processing_time.as_secs_f64();
    }

    pub fn processed(&self) -> u64 {
        self.sent + self.failed
    }
}

/// Outcome of [`Simulation::run`](crate::simulation::Simulation::run)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Messages the producer enqueued
    pub produced: usize,
    /// Counters after every sender exited
    pub snapshot: CounterSnapshot,
    /// One entry per sender, ordered by slot
    pub senders: Vec<SenderTally>,
    /// Progress lines the monitor wrote
    pub progress_lines: usize,
    /// Wall-clock duration of the run in seconds
    pub elapsed: f64,
}

impl SimulationReport {
    /// Sum of the per-sender tallies
    pub fn tallied(&self) -> u64 {
        self.senders.iter().map(SenderTally::processed).sum()
    }
}
