//! Simulation state shared by the producer, senders and monitor

use crate::queue::{MessageQueue, SharedQueue};
use crate::simulation::config::{SenderProfile, SimulationConfig};
use crate::simulation::counters::{CounterSnapshot, SharedCounters};
use crate::simulation::error::{ConfigError, SimulationResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::watch;

/// Where the producer is in its single pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductionState {
    /// Nothing enqueued yet
    Pending,
    /// At least one message enqueued, more may follow
    Producing,
    /// No more messages will ever arrive
    Finished,
}

/// One complete SMS delivery simulation
///
/// Owns the queue, the counters and the per-slot sender profiles. A
/// `Simulation` runs once; see [`Simulation::run`].
pub struct Simulation {
    pub(super) config: SimulationConfig,
    pub(super) profiles: Vec<SenderProfile>,
    pub(super) queue: Arc<dyn MessageQueue>,
    pub(super) counters: SharedCounters,
    pub(super) production: watch::Sender<ProductionState>,
    /// Set once every producer and sender task has been joined
    pub(super) run_finished: watch::Sender<bool>,
    pub(super) started: AtomicBool,
}

impl Simulation {
    /// Create a simulation over a fresh unbounded queue
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_queue(config, Arc::new(SharedQueue::new()))
    }

    /// Create a simulation over an injected queue
    ///
    /// The queue may already hold messages; senders drain those too.
    pub fn with_queue(
        config: SimulationConfig,
        queue: Arc<dyn MessageQueue>,
    ) -> Result<Self, ConfigError> {
        let profiles = config.validate()?;
        let (production, _) = watch::channel(ProductionState::Pending);
        let (run_finished, _) = watch::channel(false);

        Ok(Self {
            config,
            profiles,
            queue,
            counters: SharedCounters::new(),
            production,
            run_finished,
            started: AtomicBool::new(false),
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validated sender profiles, indexed by pool slot
    pub fn profiles(&self) -> &[SenderProfile] {
        &self.profiles
    }

    pub fn queue(&self) -> &Arc<dyn MessageQueue> {
        &self.queue
    }

    pub fn counters(&self) -> &SharedCounters {
        &self.counters
    }

    /// Consistent copy of the shared counters
    pub fn snapshot(&self) -> SimulationResult<CounterSnapshot> {
        self.counters.snapshot()
    }

    /// Overwrite the counters, e.g. to check monitor output
    pub fn set_counters_for_testing(
        &self,
        success_messages: u64,
        failed_messages: u64,
        total_processing_time: f64,
    ) -> SimulationResult<()> {
        self.counters.set(CounterSnapshot {
            success_messages,
            failed_messages,
            total_processing_time,
        })
    }

    pub fn production_state(&self) -> ProductionState {
        *self.production.borrow()
    }

    pub fn is_production_finished(&self) -> bool {
        self.production_state() == ProductionState::Finished
    }

    /// Signal that no more messages will be enqueued
    ///
    /// The producer calls this when it returns. Call it directly when the
    /// senders should only drain a pre-seeded queue.
    pub fn finish_production(&self) {
        self.production.send_replace(ProductionState::Finished);
    }

    pub(super) fn mark_producing(&self) {
        self.production.send_if_modified(|state| {
            if *state == ProductionState::Pending {
                *state = ProductionState::Producing;
                true
            } else {
                false
            }
        });
    }

    /// Wait until the producer has enqueued something or finished
    pub async fn production_started(&self) {
        let mut state = self.production.subscribe();
        // The sender half lives in `self`, so the channel cannot close here
        let _ = state
            .wait_for(|state| *state != ProductionState::Pending)
            .await;
    }

    /// Signal that all producer and sender tasks have been joined
    pub fn finish_run(&self) {
        self.run_finished.send_replace(true);
    }

    pub fn is_run_finished(&self) -> bool {
        *self.run_finished.borrow()
    }

    /// Random source for one task
    ///
    /// With a seed, each stream (0 for the producer, slot + 1 for senders)
    /// is reproducible and independent of the others.
    pub(super) fn rng_for(&self, stream: u64) -> ChaCha8Rng {
        match self.config.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(stream);
                rng
            }
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("queued", &self.queue.len())
            .field("production", &self.production_state())
            .finish_non_exhaustive()
    }
}
