//! Generic error handling utilities
//!
//! Fatal errors are reported differently depending on whether the user can
//! fix them (bad configuration) or not (a task panicked, stdout closed).

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`. When it returns `false`, `user_message()` returns `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if the error message should be shown to the user as-is
    fn is_user_actionable(&self) -> bool;

    /// The message to show when the error is user-actionable
    fn user_message(&self) -> Option<String>;
}

/// Log a fatal error with a detail level that fits the error kind
///
/// User-actionable errors log their own message. System errors log the
/// operation context instead, with the full error at debug level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// Text shown on stderr for a fatal error, before the logger may be available
pub fn fatal_message<E: ContextualError>(error: &E, operation_context: &str) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => format!("Error: {}", user_msg),
        _ => format!("Error: {} failed: {}", operation_context, error),
    }
}
