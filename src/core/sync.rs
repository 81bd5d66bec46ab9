//! Synchronization utilities for robust mutex handling

use std::sync::LockResult;

/// Convert a poisoned lock result into an application error
///
/// A poisoned lock means some task panicked while holding it. The caller
/// decides which error variant that becomes.
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use sms_simulator::core::sync::handle_mutex_poison;
/// use sms_simulator::simulation::SimulationError;
///
/// let mutex = Mutex::new(42);
/// let guard = handle_mutex_poison(mutex.lock(), |message| {
///     SimulationError::Synchronisation { message }
/// })
/// .unwrap();
/// assert_eq!(*guard, 42);
/// ```
pub fn handle_mutex_poison<T, E>(
    result: LockResult<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<T, E> {
    result.map_err(|poison_err| {
        error_constructor(format!(
            "Internal synchronisation error (mutex poisoned). A task panicked while holding a lock: {}",
            poison_err
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[derive(Debug, PartialEq)]
    struct TestError {
        message: String,
    }

    #[test]
    fn test_handle_mutex_poison_success() {
        let mutex = Mutex::new(42);

        let result = handle_mutex_poison(mutex.lock(), |msg| TestError { message: msg });

        assert_eq!(*result.unwrap(), 42);
    }

    #[test]
    fn test_handle_mutex_poison_with_poisoned_mutex() {
        let mutex = Arc::new(Mutex::new(42));
        let mutex_clone = Arc::clone(&mutex);

        let _ = thread::spawn(move || {
            let _guard = mutex_clone.lock().unwrap();
            panic!("Intentional panic to poison mutex");
        })
        .join();

        let result = handle_mutex_poison(mutex.lock(), |msg| TestError { message: msg });

        let error = result.unwrap_err();
        assert!(error.message.contains("mutex poisoned"));
    }
}
