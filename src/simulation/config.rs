//! Simulation configuration
//!
//! [`SimulationConfig`] is plain data. [`SimulationConfig::validate`] turns it
//! into one [`SenderProfile`] per pool slot, filling in defaults for
//! per-sender lists left empty and rejecting anything malformed.

use crate::core::validation::{validate_duration, validate_probability};
use crate::simulation::error::ConfigError;
use rand::Rng;
use rand_distr::{Distribution, Exp};
use std::time::Duration;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Mean processing time for a sender slot without an explicit one
pub const DEFAULT_PROCESSING_TIME_SECS: f64 = 1.0;
/// Failure rate for a sender slot without an explicit one
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;
/// How long a sender waits on an empty queue before re-checking for completion
pub const DEFAULT_DEQUEUE_TIMEOUT: Duration = Duration::from_millis(100);
/// Longest accepted dequeue timeout; senders only notice completion between waits
pub const MAX_DEQUEUE_TIMEOUT: Duration = Duration::from_secs(60);

/// When the progress monitor stops polling
#[derive(EnumIter, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MonitorTermination {
    /// Stop the first time the queue is observed empty
    ///
    /// The queue can be empty while the producer is still running or while
    /// senders are still processing their last messages, so the final line
    /// may be stale.
    #[default]
    QueueEmpty,
    /// Stop once the producer has finished and every sender has exited,
    /// then print one last exact snapshot
    RunComplete,
}

impl MonitorTermination {
    pub fn name(&self) -> &'static str {
        match self {
            Self::QueueEmpty => "queue-empty",
            Self::RunComplete => "run-complete",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|mode| mode.name() == name)
    }
}

/// Exponentially distributed delay with a fixed mean
#[derive(Clone, Copy, Debug)]
pub struct ExponentialDelay {
    mean: Duration,
    /// None for a zero mean, which never delays
    dist: Option<Exp<f64>>,
}

impl ExponentialDelay {
    pub fn new(mean: Duration) -> Self {
        let dist = if mean.is_zero() {
            None
        } else {
            Exp::new(1.0 / mean.as_secs_f64()).ok()
        };
        Self { mean, dist }
    }

    pub fn mean(&self) -> Duration {
        self.mean
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        match &self.dist {
            Some(dist) => Duration::try_from_secs_f64(dist.sample(rng)).unwrap_or(Duration::MAX),
            None => Duration::ZERO,
        }
    }
}

impl PartialEq for ExponentialDelay {
    fn eq(&self, other: &Self) -> bool {
        self.mean == other.mean
    }
}

/// Distribution of the simulated time a sender spends on one message
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ServiceTime {
    /// Exponentially distributed around a mean
    Exponential(ExponentialDelay),
    /// Always exactly this long
    Fixed(Duration),
}

impl ServiceTime {
    /// Exponential service time with a mean given in seconds
    pub fn exponential_secs(mean_secs: f64) -> Self {
        let mean = Duration::try_from_secs_f64(mean_secs).unwrap_or(Duration::MAX);
        Self::Exponential(ExponentialDelay::new(mean))
    }

    /// Draw one processing delay
    pub fn sample(&self, rng: &mut impl Rng) -> Duration {
        match self {
            Self::Fixed(duration) => *duration,
            Self::Exponential(delay) => delay.sample(rng),
        }
    }

    /// Expected delay
    pub fn mean(&self) -> Duration {
        match self {
            Self::Fixed(duration) => *duration,
            Self::Exponential(delay) => delay.mean(),
        }
    }
}

/// Behaviour of one sender slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SenderProfile {
    pub service_time: ServiceTime,
    /// Probability in [0, 1] that a message is classified as failed
    pub failure_rate: f64,
}

impl SenderProfile {
    /// Exponential processing time with `processing_mean_time` seconds mean
    pub fn new(processing_mean_time: f64, failure_rate: f64) -> Self {
        Self {
            service_time: ServiceTime::exponential_secs(processing_mean_time),
            failure_rate,
        }
    }

    /// Fixed processing delay, for tests that need exact timing
    pub fn fixed(delay: Duration, failure_rate: f64) -> Self {
        Self {
            service_time: ServiceTime::Fixed(delay),
            failure_rate,
        }
    }

    /// Decide whether a message handled by this sender fails
    ///
    /// A rate of 0.0 never fails and 1.0 always fails, since the uniform
    /// draw lies in [0, 1).
    pub fn is_failure(&self, rng: &mut impl Rng) -> bool {
        rng.gen::<f64>() < self.failure_rate
    }
}

impl Default for SenderProfile {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESSING_TIME_SECS, DEFAULT_FAILURE_RATE)
    }
}

/// Options for one simulation run
///
/// The message queue is not part of this struct; inject one with
/// [`Simulation::with_queue`](crate::simulation::Simulation::with_queue).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Messages the producer generates
    pub message_count: usize,
    /// Concurrent sender tasks
    pub senders_count: usize,
    /// Mean processing time in seconds per sender slot; empty for defaults
    pub sender_processing_times: Vec<f64>,
    /// Failure probability per sender slot; empty for defaults
    pub sender_failure_rates: Vec<f64>,
    /// Seconds between progress lines; 0 polls without delay
    pub progress_monitor_update_interval: f64,
    pub monitor_termination: MonitorTermination,
    /// Seed for reproducible runs; OS entropy when absent
    pub seed: Option<u64>,
    pub dequeue_timeout: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            message_count: 100,
            senders_count: 5,
            sender_processing_times: Vec::new(),
            sender_failure_rates: Vec::new(),
            progress_monitor_update_interval: 1.0,
            monitor_termination: MonitorTermination::default(),
            seed: None,
            dequeue_timeout: DEFAULT_DEQUEUE_TIMEOUT,
        }
    }
}

impl SimulationConfig {
    pub fn new(message_count: usize, senders_count: usize) -> Self {
        Self {
            message_count,
            senders_count,
            ..Self::default()
        }
    }

    pub fn with_processing_times(mut self, times: Vec<f64>) -> Self {
        self.sender_processing_times = times;
        self
    }

    pub fn with_failure_rates(mut self, rates: Vec<f64>) -> Self {
        self.sender_failure_rates = rates;
        self
    }

    pub fn with_update_interval(mut self, seconds: f64) -> Self {
        self.progress_monitor_update_interval = seconds;
        self
    }

    pub fn with_monitor_termination(mut self, termination: MonitorTermination) -> Self {
        self.monitor_termination = termination;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_dequeue_timeout(mut self, timeout: Duration) -> Self {
        self.dequeue_timeout = timeout;
        self
    }

    /// Monitor polling period
    ///
    /// [`validate`](Self::validate) rejects intervals that do not fit a
    /// `Duration`; unvalidated ones saturate to `Duration::MAX`.
    pub fn update_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.progress_monitor_update_interval)
            .unwrap_or(Duration::MAX)
    }

    /// Check every option and build the per-slot sender profiles
    pub fn validate(&self) -> Result<Vec<SenderProfile>, ConfigError> {
        if self.senders_count == 0 {
            return Err(ConfigError::InvalidSendersCount);
        }

        validate_duration(self.progress_monitor_update_interval).map_err(|_| {
            ConfigError::InvalidInterval {
                value: self.progress_monitor_update_interval,
            }
        })?;

        if self.dequeue_timeout.is_zero() || self.dequeue_timeout > MAX_DEQUEUE_TIMEOUT {
            return Err(ConfigError::InvalidDequeueTimeout {
                value: self.dequeue_timeout,
            });
        }

        let times = self.resolve_slots(
            "sender_processing_times",
            &self.sender_processing_times,
            DEFAULT_PROCESSING_TIME_SECS,
        )?;
        let rates = self.resolve_slots(
            "sender_failure_rates",
            &self.sender_failure_rates,
            DEFAULT_FAILURE_RATE,
        )?;

        times
            .into_iter()
            .zip(rates)
            .enumerate()
            .map(|(slot, (time, rate))| -> Result<SenderProfile, ConfigError> {
                validate_duration(time)
                    .map_err(|_| ConfigError::InvalidProcessingTime { slot, value: time })?;
                validate_probability(rate)
                    .map_err(|_| ConfigError::InvalidFailureRate { slot, value: rate })?;
                Ok(SenderProfile::new(time, rate))
            })
            .collect()
    }

    fn resolve_slots(
        &self,
        field: &'static str,
        values: &[f64],
        default: f64,
    ) -> Result<Vec<f64>, ConfigError> {
        match values.len() {
            0 => Ok(vec![default; self.senders_count]),
            n if n == self.senders_count => Ok(values.to_vec()),
            actual => Err(ConfigError::LengthMismatch {
                field,
                expected: self.senders_count,
                actual,
            }),
        }
    }
}
