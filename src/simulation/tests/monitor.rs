//! Progress monitor tests

#[cfg(test)]
mod tests {
    use super::super::helpers::{BrokenPipe, ScriptedQueue, SharedBuffer};
    use crate::queue::SharedQueue;
    use crate::simulation::{
        MonitorTermination, Simulation, SimulationConfig, SimulationError,
    };
    use std::sync::Arc;
    use std::time::Duration;

    fn fast_config() -> SimulationConfig {
        SimulationConfig::new(100, 5)
            .with_processing_times(vec![0.2, 0.3, 0.4, 0.5, 0.6])
            .with_failure_rates(vec![0.05, 0.1, 0.15, 0.2, 0.25])
            .with_update_interval(0.0)
    }

    #[tokio::test]
    async fn test_progress_monitor_prints_snapshot_until_queue_empty() {
        let queue = Arc::new(ScriptedQueue::new(&[false, true]));
        let simulation = Simulation::with_queue(fast_config(), queue.clone()).unwrap();
        simulation.set_counters_for_testing(10, 5, 20.0).unwrap();

        let mut out = Vec::new();
        let lines = simulation.progress_monitor(&mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Messages sent: 10, Messages failed: 5, Avg Time per message: 1.33 seconds\n"
        );
        assert_eq!(lines, 1);
        assert_eq!(queue.empty_calls(), 2);
    }

    #[tokio::test]
    async fn test_unchanged_counters_give_identical_lines() {
        let queue = Arc::new(ScriptedQueue::new(&[false, false, false, true]));
        let simulation = Simulation::with_queue(fast_config(), queue).unwrap();
        simulation.set_counters_for_testing(3, 1, 2.0).unwrap();

        let mut out = Vec::new();
        simulation.progress_monitor(&mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| *line == lines[0]));
        assert_eq!(
            lines[0],
            "Messages sent: 3, Messages failed: 1, Avg Time per message: 0.50 seconds"
        );
    }

    #[tokio::test]
    async fn test_monitor_on_empty_queue_prints_nothing() {
        let simulation = Simulation::new(fast_config()).unwrap();

        let mut out = Vec::new();
        let lines = simulation.progress_monitor(&mut out).await.unwrap();

        assert_eq!(lines, 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_zero_processed_reports_zero_average() {
        let queue = Arc::new(ScriptedQueue::new(&[false, true]));
        let simulation = Simulation::with_queue(fast_config(), queue).unwrap();

        let mut out = Vec::new();
        simulation.progress_monitor(&mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Messages sent: 0, Messages failed: 0, Avg Time per message: 0.00 seconds\n"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_spaces_out_lines() {
        let queue = Arc::new(ScriptedQueue::new(&[false, false, true]));
        let simulation =
            Simulation::with_queue(fast_config().with_update_interval(5.0), queue).unwrap();
        let started = tokio::time::Instant::now();

        let mut out = Vec::new();
        let lines = simulation.progress_monitor(&mut out).await.unwrap();

        assert_eq!(lines, 2);
        assert!(started.elapsed() >= Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_complete_mode_waits_for_finish_signal() {
        let config = fast_config()
            .with_update_interval(1.0)
            .with_monitor_termination(MonitorTermination::RunComplete);
        let simulation =
            Arc::new(Simulation::with_queue(config, Arc::new(SharedQueue::new())).unwrap());
        let buffer = SharedBuffer::default();

        let monitor = {
            let simulation = Arc::clone(&simulation);
            let mut out = buffer.clone();
            tokio::spawn(async move { simulation.progress_monitor(&mut out).await })
        };

        // Empty queue does not stop this mode
        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert!(!monitor.is_finished());

        simulation.set_counters_for_testing(4, 0, 2.0).unwrap();
        simulation.finish_run();
        let lines = monitor.await.unwrap().unwrap();

        // Three interval lines plus the final snapshot
        assert_eq!(lines, 4);
        let output = buffer.contents();
        assert_eq!(
            output.lines().last(),
            Some("Messages sent: 4, Messages failed: 0, Avg Time per message: 0.50 seconds")
        );
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let queue = Arc::new(ScriptedQueue::new(&[false, true]));
        let simulation = Simulation::with_queue(fast_config(), queue).unwrap();

        let result = simulation.progress_monitor(&mut BrokenPipe).await;

        assert!(matches!(result, Err(SimulationError::Output(_))));
    }
}
