//! Command‑line entry point for the `shape` tool.
//!
//! Provides subcommands to list the available shapers, evaluate a shaper at
//! given inputs, and sample it over the unit interval.

use std::{
    fmt::Display,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shapecurve::{registry, spec::ShaperSpec};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// CLI command implementations.
mod cmd;

use crate::cmd::{Format, SampleOptions};

/// Output range parsed from `--range`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct OutputRange {
    /// Value the shaper's 0 maps to.
    from: f64,
    /// Value the shaper's 1 maps to.
    to: f64,
}

impl Default for OutputRange {
    fn default() -> Self {
        Self { from: 0.0, to: 1.0 }
    }
}

impl FromStr for OutputRange {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (from, to) = value
            .split_once(':')
            .ok_or_else(|| "range must be in FROM:TO form".to_string())?;

        let parse_bound = |label: &str, bound: &str| -> Result<f64, String> {
            bound
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("invalid {label} value '{bound}': expected a finite number"))
        };

        Ok(Self {
            from: parse_bound("from", from)?,
            to: parse_bound("to", to)?,
        })
    }
}

/// Parse and validate a shaper specification against the registry.
fn parse_shaper_spec(s: &str) -> Result<ShaperSpec, String> {
    let spec: ShaperSpec = s.parse().map_err(|e| format!("{e}"))?;
    spec.validate().map_err(|e| {
        format!(
            "{e}. Valid shapers: {}",
            registry::SHAPER_NAMES.join(", ")
        )
    })?;
    Ok(spec)
}

#[derive(Parser)]
#[command(name = "shape")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `shape` tool.
enum Commands {
    #[command(about = "List supported shapers and their parameters")]
    /// List supported shapers, their parameters and defaults.
    List,

    #[command(about = "Evaluate a shaper at one or more inputs")]
    /// Print the shaper's output for each input value.
    Eval {
        #[arg(help = "Shaper spec: NAME or NAME:P1,P2,...", value_parser = parse_shaper_spec)]
        /// Shaper to evaluate.
        spec: ShaperSpec,

        #[arg(help = "Input values", required = true, allow_negative_numbers = true)]
        /// Inputs to evaluate at.
        xs: Vec<f64>,
    },

    #[command(about = "Sample a shaper at evenly spaced inputs")]
    /// Sample the shaper over the unit interval.
    Sample {
        #[arg(
            short = 'n',
            long = "steps",
            default_value_t = 10,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Number of intervals; STEPS + 1 samples are written"
        )]
        /// Number of sampling intervals.
        steps: u32,

        #[arg(
            short = 'f',
            long = "format",
            value_enum,
            default_value = "table",
            help = "Output format"
        )]
        /// Output layout.
        format: Format,

        #[arg(
            short = 'r',
            long = "range",
            value_name = "FROM:TO",
            allow_hyphen_values = true,
            help = "Map shaped values onto FROM..TO instead of 0..1"
        )]
        /// Optional output range.
        range: Option<OutputRange>,

        #[arg(long = "progress", help = "Show a progress bar on stderr")]
        /// Show sampling progress.
        progress: bool,

        #[arg(short = 'o', long = "output", help = "Write to a file instead of stdout")]
        /// Optional output file path.
        output: Option<PathBuf>,

        #[arg(help = "Shaper spec: NAME or NAME:P1,P2,...", value_parser = parse_shaper_spec)]
        /// Shaper to sample.
        spec: ShaperSpec,
    },
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: Option<&str>) {
    match result {
        Ok(()) => {
            if let Some(msg) = ok_msg {
                eprintln!("{msg}");
            }
        }
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Write rendered output to a file, or to stdout when no path is given.
fn deliver(text: &str, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        fs::write(path, text).with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        io::stdout().lock().write_all(text.as_bytes())?;
    }
    Ok(())
}

/// Handle the `eval` subcommand.
fn handle_eval(spec: &ShaperSpec, xs: &[f64]) -> Result<()> {
    let out: String = cmd::eval(spec, xs)?
        .iter()
        .map(|s| format!("{}\n", s.y))
        .collect();
    deliver(&out, None)
}

/// Parameters supplied by the CLI for the `sample` subcommand.
struct SampleInput<'a> {
    /// Shaper to sample.
    spec: &'a ShaperSpec,
    /// Sampling options.
    opts: SampleOptions,
    /// Output layout.
    format: Format,
    /// Destination file; stdout when `None`.
    output: Option<&'a Path>,
}

/// Handle the `sample` subcommand.
fn handle_sample(input: SampleInput<'_>) -> Result<()> {
    let SampleInput {
        spec,
        opts,
        format,
        output,
    } = input;
    let samples = cmd::sample(spec, opts)?;
    let text = cmd::render(spec, &samples, format)?;
    deliver(&text, output)
}

/// Install the stderr log subscriber; `RUST_LOG` overrides `-v`.
fn init_tracing(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.v);

    match cli.command {
        Commands::List => print!("{}", cmd::list()),
        Commands::Eval { spec, xs } => report_ok(handle_eval(&spec, &xs), None),
        Commands::Sample {
            steps,
            format,
            range,
            progress,
            output,
            spec,
        } => {
            let OutputRange { from, to } = range.unwrap_or_default();
            let saved = output
                .as_ref()
                .map(|path| format!("Wrote {} samples to {}", steps as u64 + 1, path.display()));
            report_ok(
                handle_sample(SampleInput {
                    spec: &spec,
                    opts: SampleOptions {
                        steps,
                        range: (from, to),
                        progress,
                    },
                    format,
                    output: output.as_deref(),
                }),
                saved.as_deref(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputRange, parse_shaper_spec};

    #[test]
    fn parses_output_range() {
        let range: OutputRange = "-10:2.5".parse().unwrap();
        assert_eq!(range, OutputRange { from: -10.0, to: 2.5 });
    }

    #[test]
    fn rejects_invalid_ranges() {
        assert!("5".parse::<OutputRange>().is_err());
        assert!("a:1".parse::<OutputRange>().is_err());
        assert!("0:inf".parse::<OutputRange>().is_err());
    }

    #[test]
    fn validates_shaper_specs() {
        assert!(parse_shaper_spec("fillet:0.3,0.7,0.2").is_ok());
        assert!(parse_shaper_spec("fillet:0.3").is_err());
        let err = parse_shaper_spec("bounce").unwrap_err();
        assert!(err.contains("Valid shapers"));
    }
}
