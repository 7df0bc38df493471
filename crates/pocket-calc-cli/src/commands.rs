//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use pocket_calc::core::Variant;

use crate::config::{CalcConfig, ColorChoice, OutputFormat, Verbosity};

/// Pocket calculator: interactive terminal UI or headless key sequences
#[derive(Parser, Debug)]
#[command(name = "pocket-calc", version, about, long_about = None)]
pub struct Cli {
    /// Use the scientific keypad (x^y, sin, cos, tan, ln, log10, sqrt)
    #[arg(short, long, global = true)]
    pub scientific: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run (defaults to the interactive calculator)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Builds the effective configuration from global flags
    #[must_use]
    pub fn config(&self) -> CalcConfig {
        let variant = if self.scientific {
            Variant::Scientific
        } else {
            Variant::Basic
        };
        let output = match &self.command {
            Some(Commands::Eval(args)) => args.format.into(),
            Some(Commands::Weather(args)) => args.format.into(),
            _ => OutputFormat::Text,
        };
        CalcConfig::new()
            .with_variant(variant)
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
            .with_color(self.color.into())
            .with_output(output)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Tui,

    /// Press a sequence of buttons and print the display
    Eval(EvalArgs),

    /// Print the keypad layout as JSON
    Layout,

    /// Show the effective configuration
    Config,

    /// Look up the JMA forecast for an area, or list the areas
    Weather(WeatherArgs),
}

/// Arguments for `eval`
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Button labels, e.g. `2 + 3 * 4 =` (quote `*` in most shells)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Print the display after every token, not just the last one
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Base URL of the JMA data service
pub const DEFAULT_JMA_URL: &str = "https://www.jma.go.jp/bosai";

/// Arguments for `weather`
#[derive(Args, Debug)]
pub struct WeatherArgs {
    /// Office name or code, e.g. `東京都` or `130000`; lists areas if omitted
    pub area: Option<String>,

    /// JMA data service base URL
    #[arg(long, env = "POCKET_CALC_JMA_URL", default_value = DEFAULT_JMA_URL)]
    pub base_url: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
