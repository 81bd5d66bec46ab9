//! Progress monitor: periodic snapshot lines on an output sink

use crate::simulation::config::MonitorTermination;
use crate::simulation::error::SimulationResult;
use std::io::Write;
use std::time::Duration;

use super::core::Simulation;

impl Simulation {
    /// Print counter snapshots until the run is over, returning how many
    /// lines were written
    ///
    /// Each line has the form
    /// `Messages sent: N, Messages failed: N, Avg Time per message: X.XX seconds`.
    ///
    /// With [`MonitorTermination::QueueEmpty`] the loop checks the queue
    /// first and stops the first time it is empty; otherwise it waits one
    /// interval and prints. With [`MonitorTermination::RunComplete`] it
    /// prints every interval until [`finish_run`](Simulation::finish_run) is
    /// signalled, then prints one final snapshot.
    pub async fn progress_monitor<W: Write + Send>(&self, out: &mut W) -> SimulationResult<usize> {
        let interval = self.config.update_interval();
        let mut lines = 0;

        match self.config.monitor_termination {
            MonitorTermination::QueueEmpty => {
                while !self.queue.is_empty() {
                    pause(interval).await;
                    self.report_progress(out)?;
                    lines += 1;
                }
            }
            MonitorTermination::RunComplete => {
                let mut finished = self.run_finished.subscribe();
                while !*finished.borrow_and_update() {
                    tokio::select! {
                        _ = pause(interval) => {
                            self.report_progress(out)?;
                            lines += 1;
                        }
                        changed = finished.changed() => {
                            if changed.is_err() {
                                break;
                            }
                        }
                    }
                }
                self.report_progress(out)?;
                lines += 1;
            }
        }

        log::debug!("Progress monitor stopped after {} lines", lines);
        Ok(lines)
    }

    /// Write one snapshot line
    pub fn report_progress<W: Write>(&self, out: &mut W) -> SimulationResult<()> {
        let snapshot = self.counters.snapshot()?;
        writeln!(out, "{}", snapshot)?;
        out.flush()?;
        Ok(())
    }
}

// A zero interval still yields so the other tasks make progress
async fn pause(interval: Duration) {
    if interval.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(interval).await;
    }
}
