//! Orchestration of a full run
//!
//! Starts the producer, one task per sender slot and the monitor, joins
//! them, and assembles the [`SimulationReport`].

use crate::simulation::error::{SimulationError, SimulationResult};
use crate::simulation::report::{SenderTally, SimulationReport};
use std::io::Write;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::{JoinError, JoinSet};

use super::core::Simulation;

enum WorkerOutput {
    Produced(usize),
    Sender(SenderTally),
}

impl Simulation {
    /// Run the simulation, printing progress lines on stdout
    pub async fn run(self: &Arc<Self>) -> SimulationResult<SimulationReport> {
        let (report, _) = self.run_with_output(std::io::stdout()).await?;
        Ok(report)
    }

    /// Run the simulation, printing progress lines on `out`
    ///
    /// Returns the report together with `out`. Fails with
    /// [`SimulationError::AlreadyStarted`] if this simulation ran before.
    pub async fn run_with_output<W>(
        self: &Arc<Self>,
        out: W,
    ) -> SimulationResult<(SimulationReport, W)>
    where
        W: Write + Send + 'static,
    {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(SimulationError::AlreadyStarted);
        }

        let started_at = Instant::now();
        log::info!(
            "Starting simulation: {} messages, {} senders, monitor {}",
            self.config.message_count,
            self.profiles.len(),
            self.config.monitor_termination.name()
        );

        let mut workers = JoinSet::new();
        {
            let sim = Arc::clone(self);
            workers.spawn(async move { sim.producer().await.map(WorkerOutput::Produced) });
        }
        for (slot, profile) in self.profiles.iter().copied().enumerate() {
            let sim = Arc::clone(self);
            workers.spawn(async move { sim.sender(slot, profile).await.map(WorkerOutput::Sender) });
        }

        // An empty queue only means "done" once the producer has started filling it
        self.production_started().await;
        let monitor = {
            let sim = Arc::clone(self);
            tokio::spawn(async move {
                let mut out = out;
                let lines = sim.progress_monitor(&mut out).await?;
                Ok::<_, SimulationError>((out, lines))
            })
        };

        let mut produced = 0;
        let mut senders = Vec::with_capacity(self.profiles.len());
        let mut failure = None;

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(Ok(WorkerOutput::Produced(count))) => produced = count,
                Ok(Ok(WorkerOutput::Sender(tally))) => senders.push(tally),
                Ok(Err(e)) => {
                    failure.get_or_insert(e);
                }
                Err(join_error) if join_error.is_cancelled() => {}
                Err(join_error) => {
                    failure.get_or_insert(task_failed(join_error));
                }
            }
            if failure.is_some() {
                workers.abort_all();
            }
        }
        self.finish_run();

        if let Some(e) = failure {
            monitor.abort();
            log::error!("Simulation aborted: {}", e);
            return Err(e);
        }

        let (out, progress_lines) = monitor.await.map_err(task_failed)??;

        senders.sort_by_key(|tally| tally.slot);
        let report = SimulationReport {
            produced,
            snapshot: self.counters.snapshot()?,
            senders,
            progress_lines,
            elapsed: started_at.elapsed().as_secs_f64(),
        };

        log::info!(
            "Simulation finished in {:.2}s: {} sent, {} failed, avg {:.2}s per message",
            report.elapsed,
            report.snapshot.success_messages,
            report.snapshot.failed_messages,
            report.snapshot.average_time()
        );
        Ok((report, out))
    }
}

fn task_failed(join_error: JoinError) -> SimulationError {
    SimulationError::TaskFailed {
        message: join_error.to_string(),
    }
}
