//! Tests for command line parsing and config conversion

use crate::app::cli::args::*;
use crate::simulation::{ConfigError, MonitorTermination, Simulation};

static COMMAND_NAME: &str = "sms-simulator";

fn parse(extra: &[&str]) -> Result<Args, clap::Error> {
    let mut args = vec![COMMAND_NAME];
    args.extend_from_slice(extra);
    Args::try_parse_with_color(args, false)
}

#[test]
fn test_defaults() {
    let args = parse(&[]).unwrap();

    assert_eq!(args.messages, 100);
    assert_eq!(args.senders, 5);
    assert!(args.processing_times.is_empty());
    assert!(args.failure_rates.is_empty());
    assert_eq!(args.interval, 1.0);
    assert_eq!(args.seed, None);
    assert_eq!(args.monitor, MonitorTermination::QueueEmpty);
    assert_eq!(args.summary, SummaryFormat::Text);
    assert!(!args.color);
    assert!(!args.no_color);
}

#[test]
fn test_comma_separated_lists() {
    let args = parse(&[
        "--senders",
        "3",
        "--processing-times",
        "0.2,0.3",
        "-t",
        "0.4",
        "--failure-rates",
        "0.05, 0.1,0.15",
    ])
    .unwrap();

    assert_eq!(args.processing_times, vec![0.2, 0.3, 0.4]);
    assert_eq!(args.failure_rates, vec![0.05, 0.1, 0.15]);
}

#[test]
fn test_failure_rate_out_of_range_is_rejected() {
    assert!(parse(&["--failure-rates", "0.1,1.5"]).is_err());
    assert!(parse(&["--failure-rates", "abc"]).is_err());
}

#[test]
fn test_negative_interval_is_rejected() {
    assert!(parse(&["--interval", "-1"]).is_err());
    assert_eq!(parse(&["--interval", "0"]).unwrap().interval, 0.0);
}

#[test]
fn test_zero_senders_is_rejected() {
    assert!(parse(&["--senders", "0"]).is_err());
}

#[test]
fn test_monitor_and_summary_names() {
    let args = parse(&["--monitor", "run-complete", "--summary", "json"]).unwrap();
    assert_eq!(args.monitor, MonitorTermination::RunComplete);
    assert_eq!(args.summary, SummaryFormat::Json);

    assert!(parse(&["--monitor", "forever"]).is_err());
    assert!(parse(&["--summary", "xml"]).is_err());
}

#[test]
fn test_summary_format_round_trips_names() {
    for name in ["text", "json", "none"] {
        assert_eq!(SummaryFormat::from_name(name).unwrap().name(), name);
    }
    assert_eq!(SummaryFormat::from_name("yaml"), None);
}

#[test]
fn test_color_flags_conflict() {
    assert!(parse(&["--color", "--no-color"]).is_err());
    assert!(!parse(&["--no-color"]).unwrap().use_color());
    assert!(parse(&["--color"]).unwrap().use_color());
}

#[test]
fn test_log_options() {
    let args = parse(&[
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--log-file",
        "run.log",
    ])
    .unwrap();

    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.log_format.as_deref(), Some("json"));
    assert_eq!(args.log_file_str().as_deref(), Some("run.log"));
    assert!(parse(&["--log-format", "xml"]).is_err());
}

#[test]
fn test_simulation_config_from_args() {
    let args = parse(&[
        "-m",
        "1000",
        "-s",
        "2",
        "-t",
        "0.5,1.5",
        "-r",
        "0.0,1.0",
        "-i",
        "5",
        "--seed",
        "99",
        "--monitor",
        "run-complete",
    ])
    .unwrap();

    let config = args.simulation_config();

    assert_eq!(config.message_count, 1000);
    assert_eq!(config.senders_count, 2);
    assert_eq!(config.sender_processing_times, vec![0.5, 1.5]);
    assert_eq!(config.sender_failure_rates, vec![0.0, 1.0]);
    assert_eq!(config.progress_monitor_update_interval, 5.0);
    assert_eq!(config.seed, Some(99));
    assert_eq!(config.monitor_termination, MonitorTermination::RunComplete);
    assert_eq!(config.validate().unwrap().len(), 2);
}

#[test]
fn test_list_length_mismatch_surfaces_at_construction() {
    let args = parse(&["--senders", "4", "--processing-times", "1,2"]).unwrap();

    let error = Simulation::new(args.simulation_config()).unwrap_err();

    assert_eq!(
        error,
        ConfigError::LengthMismatch {
            field: "sender_processing_times",
            expected: 4,
            actual: 2,
        }
    );
}
