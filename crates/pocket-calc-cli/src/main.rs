//! Pocket Calc: terminal calculator
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc                          # Interactive basic calculator
//! pocket-calc --scientific             # Interactive scientific calculator
//! pocket-calc eval 2 + 3 '*' 4 =       # Headless: prints 20
//! pocket-calc -s eval --trace 2 x^y 1 0 =
//! pocket-calc layout --scientific      # Keypad as JSON
//! pocket-calc weather                  # JMA forecast areas
//! pocket-calc weather 東京都           # Today's forecast for Tokyo
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pocket_calc_cli::{logging, runner, Cli, CliResult, Commands};
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // A subscriber writing to stderr would tear the alternate screen
    if !matches!(cli.command, None | Some(Commands::Tui)) {
        logging::init(&config);
        info!(variant = %config.variant, "pocket-calc {}", env!("CARGO_PKG_VERSION"));
    }

    match cli.command {
        None | Some(Commands::Tui) => runner::run_tui(&config),
        Some(Commands::Eval(args)) => runner::run_eval(&config, &args, &mut io::stdout().lock()),
        Some(Commands::Layout) => runner::run_layout(&config, &mut io::stdout().lock()),
        Some(Commands::Config) => runner::run_config(&config, &mut io::stdout().lock()),
        Some(Commands::Weather(args)) => {
            runner::run_weather(&config, &args, &mut io::stdout().lock())
        }
    }
}
