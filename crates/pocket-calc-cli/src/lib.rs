//! Pocket Calc CLI library
//!
//! Argument parsing, configuration, logging and subcommand handlers for the
//! `pocket-calc` binary. The binary itself only dispatches.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;
pub mod weather;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, FormatArg, WeatherArgs, DEFAULT_JMA_URL};
pub use config::{CalcConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::{EvalReport, EvalStep};
pub use weather::WeatherReport;
