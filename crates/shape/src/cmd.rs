//! Command handlers for the `shape` CLI.
//!
//! These functions evaluate and sample shapers and render the results as
//! text. Writing the text out is left to the caller.

use std::{fmt::Write, io};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use shapecurve::{Shaper, registry, spec::ShaperSpec};
use tracing::{debug, info};

/// Number of samples per progress-bar tick.
const PROGRESS_CHUNK: u32 = 1024;

/// Output layout for sampled curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Aligned columns for reading in a terminal.
    #[default]
    Table,
    /// Comma-separated values with a header row.
    Csv,
    /// A JSON document holding the spec and the samples.
    Json,
}

/// One evaluated point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    /// Input value.
    pub x: f64,
    /// Shaper output, remapped onto the requested range.
    pub y: f64,
}

/// JSON document emitted by `sample --format json`.
#[derive(Serialize)]
struct SampleDocument<'a> {
    /// The shaper that produced the samples.
    shaper: &'a ShaperSpec,
    /// Human-readable shaper name.
    name: &'static str,
    /// The samples, in input order.
    samples: &'a [Sample],
}

/// Parameters for the `sample` subcommand.
#[derive(Clone, Copy, Debug)]
pub struct SampleOptions {
    /// Number of intervals; `steps + 1` samples are produced.
    pub steps: u32,
    /// Output range the shaped values are mapped onto.
    pub range: (f64, f64),
    /// Show a progress bar on stderr.
    pub progress: bool,
}

/// Build the shaper named by `spec`, with a CLI-friendly error.
fn build(spec: &ShaperSpec) -> Result<Box<dyn Shaper>> {
    let shaper = spec
        .build()
        .with_context(|| format!("cannot build shaper '{spec}'"))?;
    info!(shaper = %spec, name = shaper.name(), "built shaper");
    Ok(shaper)
}

/// Render the registry as one line per shaper.
pub fn list() -> String {
    let mut out = String::from("Supported shapers (key — name — parameters):\n");
    for entry in registry::REGISTRY {
        let params = entry.signature();
        let params = if params.is_empty() { "none" } else { &params };
        out.push_str(&format!("- {} — {} — {}\n", entry.key, entry.display, params));
    }
    out
}

/// Evaluate the shaper at each input.
pub fn eval(spec: &ShaperSpec, xs: &[f64]) -> Result<Vec<Sample>> {
    if xs.is_empty() {
        bail!("no input values given");
    }
    let shaper = build(spec)?;
    Ok(xs
        .iter()
        .map(|&x| Sample {
            x,
            y: shaper.eval(x),
        })
        .collect())
}

/// Sample the shaper at `steps + 1` evenly spaced inputs.
pub fn sample(spec: &ShaperSpec, opts: SampleOptions) -> Result<Vec<Sample>> {
    if opts.steps == 0 {
        bail!("steps must be at least 1");
    }
    let shaper = build(spec)?;
    let (from, to) = opts.range;
    debug!(steps = opts.steps, from, to, "sampling");

    let mut pb = opts.progress.then(|| {
        let mut pb = pbr::ProgressBar::on(io::stderr(), u64::from(opts.steps / PROGRESS_CHUNK + 1));
        pb.format("╢▌▌░╟");
        pb
    });

    let mut samples = Vec::with_capacity(opts.steps as usize + 1);
    for i in 0..=opts.steps {
        let x = f64::from(i) / f64::from(opts.steps);
        samples.push(Sample {
            x,
            y: shaper.interpolate(from, to, x),
        });
        if let (Some(pb), 0) = (pb.as_mut(), i % PROGRESS_CHUNK) {
            pb.inc();
        }
    }
    if let Some(mut pb) = pb {
        pb.finish();
    }
    Ok(samples)
}

/// Render samples in the requested format.
pub fn render(spec: &ShaperSpec, samples: &[Sample], format: Format) -> Result<String> {
    let mut out = String::new();
    match format {
        Format::Table => {
            writeln!(out, "{:>10}  {:>12}", "x", "y")?;
            for s in samples {
                writeln!(out, "{:>10.6}  {:>12.6}", s.x, s.y)?;
            }
        }
        Format::Csv => {
            out.push_str("x,y\n");
            for s in samples {
                writeln!(out, "{},{}", s.x, s.y)?;
            }
        }
        Format::Json => {
            let name = registry::lookup(&spec.key)?.display;
            let doc = SampleDocument {
                shaper: spec,
                name,
                samples,
            };
            out = serde_json::to_string_pretty(&doc)?;
            out.push('\n');
        }
    }
    Ok(out)
}
