//! Process entry: parse arguments, set up logging, run one simulation

use crate::app::cli::args::Args;
use crate::app::cli::display::print_summary;
use crate::core::error_handling::{fatal_message, log_error_with_context};
use crate::core::logging::init_logging;
use crate::simulation::{Simulation, SimulationError};
use std::process;
use std::sync::Arc;

/// Initialize application startup
pub fn startup() {
    let raw_args: Vec<String> = std::env::args().collect();
    let args = match Args::try_parse_with_color(&raw_args, help_color(&raw_args)) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    let use_color = args.use_color();

    let log_file = args.log_file_str();
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error: Failed to initialize logging: {}", e);
        process::exit(1);
    }

    log::info!("SMS simulator starting");
    log::debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args, use_color) {
        log_error_with_context(&e, "Simulation");
        eprintln!("{}", fatal_message(&e, "Simulation"));
        process::exit(1);
    }
}

fn run(args: &Args, use_color: bool) -> Result<(), SimulationError> {
    let simulation = Arc::new(Simulation::new(args.simulation_config())?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| SimulationError::Runtime {
            message: e.to_string(),
        })?;
    let report = runtime.block_on(simulation.run())?;

    print_summary(&report, args.summary, use_color, &mut std::io::stdout().lock())?;
    Ok(())
}

// Help and usage errors are printed before Args exists, so look at the raw flags
fn help_color(raw_args: &[String]) -> bool {
    if raw_args.iter().any(|arg| arg == "--no-color") {
        false
    } else {
        raw_args.iter().any(|arg| arg == "--color" || arg == "-g")
            || std::io::IsTerminal::is_terminal(&std::io::stdout())
    }
}
