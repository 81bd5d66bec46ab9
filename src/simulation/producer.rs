//! Producer: fills the queue once with generated messages

use crate::queue::generate_message_with;
use crate::simulation::error::SimulationResult;
use rand_chacha::ChaCha8Rng;

use super::core::Simulation;

/// RNG stream used by the producer
const PRODUCER_STREAM: u64 = 0;

impl Simulation {
    /// Enqueue exactly `message_count` generated messages, in generation order
    ///
    /// Production is marked finished when this returns, whether or not every
    /// push succeeded, so senders never wait on messages that will not come.
    pub async fn producer(&self) -> SimulationResult<usize> {
        let mut rng = self.rng_for(PRODUCER_STREAM);
        let result = self.enqueue_messages(&mut rng);
        self.finish_production();

        match &result {
            Ok(count) => log::info!("Producer finished: {} messages enqueued", count),
            Err(e) => log::warn!("Producer stopped early: {}", e),
        }
        result
    }

    fn enqueue_messages(&self, rng: &mut ChaCha8Rng) -> SimulationResult<usize> {
        let count = self.config.message_count;
        for index in 0..count {
            let message = generate_message_with(rng);
            log::trace!("Enqueue message {} ({} chars)", index, message.len());
            self.queue.push(message)?;
            self.mark_producing();
        }
        Ok(count)
    }
}
