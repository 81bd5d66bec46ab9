//! Command line arguments
//!
//! A single flat `Args` struct parsed with clap derive. List options accept
//! either repeated flags or a comma-separated list.

use crate::core::styles::palette_to_clap;
use crate::core::validation::{parse_probability, parse_seconds, validate_positive_int};
use crate::simulation::{MonitorTermination, SimulationConfig};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// How the end-of-run summary is printed
#[derive(EnumIter, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Table on stdout
    #[default]
    Text,
    /// Single JSON document on stdout
    Json,
    /// No summary
    None,
}

impl SummaryFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::None => "none",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|format| format.name() == name)
    }
}

fn parse_summary_format(value: &str) -> Result<SummaryFormat, String> {
    SummaryFormat::from_name(value).ok_or_else(|| {
        let names: Vec<_> = SummaryFormat::iter().map(|f| f.name()).collect();
        format!("'{}' is not one of: {}", value, names.join(", "))
    })
}

fn parse_monitor_termination(value: &str) -> Result<MonitorTermination, String> {
    MonitorTermination::from_name(value).ok_or_else(|| {
        let names: Vec<_> = MonitorTermination::iter().map(|m| m.name()).collect();
        format!("'{}' is not one of: {}", value, names.join(", "))
    })
}

#[derive(Parser, Debug, Clone)]
#[command(name = "sms-simulator")]
#[command(about = "Simulate bulk SMS delivery through a pool of unreliable senders")]
#[command(version)]
#[command(after_help = " * can be repeated or given as a comma-separated list")]
pub struct Args {
    /// Number of messages to generate
    #[arg(short = 'm', long = "messages", value_name = "COUNT", default_value_t = 100)]
    pub messages: usize,

    /// Number of concurrent senders
    #[arg(short = 's', long = "senders", value_name = "COUNT", default_value_t = 5, value_parser = validate_positive_int)]
    pub senders: usize,

    /// Mean processing time in seconds, one per sender*
    #[arg(short = 't', long = "processing-times", value_name = "SECONDS", value_delimiter = ',', action = ArgAction::Append, value_parser = parse_seconds)]
    pub processing_times: Vec<f64>,

    /// Failure probability between 0 and 1, one per sender*
    #[arg(short = 'r', long = "failure-rates", value_name = "RATES", value_delimiter = ',', action = ArgAction::Append, value_parser = parse_probability)]
    pub failure_rates: Vec<f64>,

    /// Seconds between progress lines
    #[arg(short = 'i', long = "interval", value_name = "SECONDS", default_value_t = 1.0, value_parser = parse_seconds)]
    pub interval: f64,

    /// Seed for a reproducible run
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// When the progress monitor stops
    #[arg(long = "monitor", value_name = "MODE", default_value = "queue-empty", value_parser = parse_monitor_termination)]
    pub monitor: MonitorTermination,

    /// Summary printed after the run
    #[arg(long = "summary", value_name = "FORMAT", default_value = "text", value_parser = parse_summary_format)]
    pub summary: SummaryFormat,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Write log records to this file instead of stderr
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored output
    #[arg(short = 'g', long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Parse from an explicit argument list, styling help output when `use_color`
    pub fn try_parse_with_color<I, T>(args: I, use_color: bool) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        use clap::{CommandFactory, FromArgMatches};

        let matches = Self::command()
            .styles(palette_to_clap(use_color))
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Resolve color: explicit flags win, otherwise follow the terminal
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else {
            self.color || std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    }

    /// Simulation options described by these arguments
    ///
    /// Per-sender lists are passed through unchecked; the simulation
    /// rejects lists whose length does not match the sender count.
    pub fn simulation_config(&self) -> SimulationConfig {
        let mut config = SimulationConfig::new(self.messages, self.senders)
            .with_processing_times(self.processing_times.clone())
            .with_failure_rates(self.failure_rates.clone())
            .with_update_interval(self.interval)
            .with_monitor_termination(self.monitor);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    pub fn log_file_str(&self) -> Option<String> {
        self.log_file
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
    }
}
