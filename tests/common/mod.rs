//! Common test utilities and helpers

#![allow(dead_code)]

use sms_simulator::simulation::SimulationConfig;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable writer that keeps everything written to it
#[derive(Clone, Default)]
pub struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Five senders with the same spread of times and rates used by the binary demo
pub fn five_sender_config(message_count: usize) -> SimulationConfig {
    SimulationConfig::new(message_count, 5)
        .with_processing_times(vec![0.2, 0.3, 0.4, 0.5, 0.6])
        .with_failure_rates(vec![0.05, 0.1, 0.15, 0.2, 0.25])
        .with_update_interval(5.0)
}

/// Progress lines look like the monitor's snapshot format
pub fn assert_progress_line(line: &str) {
    let rest = line
        .strip_prefix("Messages sent: ")
        .unwrap_or_else(|| panic!("unexpected line: {}", line));
    assert!(rest.contains(", Messages failed: "), "got: {}", line);
    assert!(rest.contains(", Avg Time per message: "), "got: {}", line);
    assert!(rest.ends_with(" seconds"), "got: {}", line);
}
