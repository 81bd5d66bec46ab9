//! Sender: drains the queue, simulating delivery of one message at a time

use crate::simulation::config::SenderProfile;
use crate::simulation::counters::Outcome;
use crate::simulation::error::SimulationResult;
use crate::simulation::report::SenderTally;
use std::time::Duration;

use super::core::Simulation;

impl Simulation {
    /// Run one sender until production has finished and the queue is empty
    ///
    /// For every dequeued message: sample a delay from the profile's service
    /// time, sleep for it, classify the message as sent or failed by the
    /// profile's failure rate, then count it. A failed delivery is a normal
    /// outcome and is never returned as an error.
    pub async fn sender(&self, slot: usize, profile: SenderProfile) -> SimulationResult<SenderTally> {
        let mut rng = self.rng_for(slot as u64 + 1);
        let mut tally = SenderTally::new(slot);
        log::debug!(
            "Sender {} started (mean {:?}, failure rate {})",
            slot,
            profile.service_time.mean(),
            profile.failure_rate
        );

        loop {
            match self.queue.pop_timeout(self.config.dequeue_timeout).await? {
                Some(message) => {
                    let delay = profile.service_time.sample(&mut rng);
                    self.simulate_processing(delay).await;

                    let outcome = if profile.is_failure(&mut rng) {
                        Outcome::Failed
                    } else {
                        Outcome::Sent
                    };
                    self.counters.record(outcome, delay)?;
                    tally.record(outcome, delay);

                    log::trace!(
                        "Sender {}: {:?} after {:?} ({} chars)",
                        slot,
                        outcome,
                        delay,
                        message.len()
                    );
                }
                None if self.is_production_finished() && self.queue.is_empty() => break,
                None => continue,
            }
        }

        log::debug!(
            "Sender {} finished: {} sent, {} failed",
            slot,
            tally.sent,
            tally.failed
        );
        Ok(tally)
    }

    /// Stand-in for the real delivery work
    async fn simulate_processing(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
