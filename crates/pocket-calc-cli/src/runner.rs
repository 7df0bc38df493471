//! Subcommand handlers
//!
//! Handlers write to any `io::Write` so tests can capture their output.

use std::io::Write;

use pocket_calc::core::{Calculator, ERROR_DISPLAY};
use pocket_calc::keypad::Keypad;
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::{EvalArgs, WeatherArgs};
use crate::config::{CalcConfig, OutputFormat};
use crate::error::{CliError, CliResult};

/// Display after one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalStep {
    /// Label that was pressed
    pub token: String,
    /// Display afterwards
    pub display: String,
}

/// Outcome of an `eval` run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// Calculator variant used
    pub variant: String,
    /// Final display
    pub display: String,
    /// True if the final display is the error sentinel
    pub error: bool,
    /// Per-token displays, only with `--trace`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<EvalStep>,
}

/// Presses every label in order
///
/// Labels may also be packed into one argument separated by spaces, so
/// `eval "2 + 3 ="` works as well as `eval 2 + 3 =`.
pub fn evaluate(config: &CalcConfig, args: &EvalArgs) -> CliResult<EvalReport> {
    let labels: Vec<&str> = args
        .tokens
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .collect();
    if labels.is_empty() {
        return Err(CliError::invalid_argument("no tokens to evaluate"));
    }

    let mut calc = Calculator::with_variant(config.variant);
    let mut steps = Vec::new();
    for label in labels {
        let shown = calc.press_label(label)?;
        debug!(token = label, display = shown, "pressed");
        if args.trace {
            steps.push(EvalStep {
                token: label.to_string(),
                display: shown.to_string(),
            });
        }
    }

    let shown = calc.display().to_string();
    info!(variant = %config.variant, display = %shown, "evaluation finished");
    Ok(EvalReport {
        variant: config.variant.to_string(),
        error: shown == ERROR_DISPLAY,
        display: shown,
        steps,
    })
}

/// `eval` subcommand
pub fn run_eval(config: &CalcConfig, args: &EvalArgs, out: &mut impl Write) -> CliResult<()> {
    let report = evaluate(config, args)?;
    match config.output {
        OutputFormat::Text => {
            for step in &report.steps {
                writeln!(out, "{:>6}  {}", step.token, step.display)?;
            }
            if report.steps.is_empty() {
                writeln!(out, "{}", report.display)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// `layout` subcommand
pub fn run_layout(config: &CalcConfig, out: &mut impl Write) -> CliResult<()> {
    let keypad = Keypad::for_variant(config.variant);
    serde_json::to_writer_pretty(&mut *out, &keypad)?;
    writeln!(out)?;
    Ok(())
}

/// `config` subcommand
pub fn run_config(config: &CalcConfig, out: &mut impl Write) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, config)?;
    writeln!(out)?;
    Ok(())
}

/// `weather` subcommand
///
/// Lists every area without an argument, otherwise prints the forecast for
/// the matching office.
#[cfg(feature = "network")]
pub fn run_weather(config: &CalcConfig, args: &WeatherArgs, out: &mut impl Write) -> CliResult<()> {
    use pocket_calc::weather::{build_area_tree, find_office};

    use crate::weather::{render_areas, render_report, JmaClient, WeatherReport};

    let client = JmaClient::new(&args.base_url)?;
    let regions = build_area_tree(&client.areas()?);
    let Some(query) = args.area.as_deref() else {
        return render_areas(&regions, config.output, out);
    };

    let office = find_office(&regions, query)?;
    if !config.verbosity.is_quiet() {
        eprintln!("Fetching forecast for {}...", office.name);
    }
    let report = WeatherReport::new(office, &client.forecast(&office.code)?)?;
    info!(code = %report.code, sky = %report.sky, "forecast fetched");
    render_report(&report, config.output, out)
}

/// `weather` subcommand without HTTP support compiled in
#[cfg(not(feature = "network"))]
pub fn run_weather(_config: &CalcConfig, _args: &WeatherArgs, _out: &mut impl Write) -> CliResult<()> {
    Err(CliError::FeatureDisabled { feature: "network" })
}

/// `tui` subcommand (and the default with no subcommand)
#[cfg(feature = "tui")]
pub fn run_tui(config: &CalcConfig) -> CliResult<()> {
    pocket_calc::tui::run(config.variant)?;
    Ok(())
}

/// `tui` subcommand without terminal support compiled in
#[cfg(not(feature = "tui"))]
pub fn run_tui(_config: &CalcConfig) -> CliResult<()> {
    Err(CliError::FeatureDisabled { feature: "tui" })
}
