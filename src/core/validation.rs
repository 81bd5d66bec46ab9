//! Validation utilities for simulation parameters
//!
//! Shared by the configuration layer and the CLI value parsers. Errors are
//! plain strings; callers wrap them in their own error types.

/// Validate a probability in the closed range [0, 1]
pub fn validate_probability(value: f64) -> Result<f64, String> {
    if value.is_nan() || !(0.0..=1.0).contains(&value) {
        return Err(format!("{} is not a probability between 0 and 1", value));
    }
    Ok(value)
}

/// Validate a duration in seconds: finite and not negative
pub fn validate_seconds(value: f64) -> Result<f64, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!(
            "{} is not a valid non-negative number of seconds",
            value
        ));
    }
    Ok(value)
}

/// Validate a number of seconds that must also fit a `Duration`
pub fn validate_duration(value: f64) -> Result<std::time::Duration, String> {
    let seconds = validate_seconds(value)?;
    std::time::Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("{} seconds is too long", value))
}

/// Validate positive integer value
pub fn validate_positive_int(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("Value must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a valid positive integer", value)),
    }
}

/// Parse and validate a probability given on the command line
pub fn parse_probability(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value))
        .and_then(validate_probability)
}

/// Parse and validate a number of seconds given on the command line
pub fn parse_seconds(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", value))
        .and_then(|seconds| validate_duration(seconds).map(|_| seconds))
}
