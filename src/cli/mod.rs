//! Command-line parsing for the support-interval tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the interval/density math.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "si",
    version,
    about = "Support intervals from prior/posterior draws (posterior/prior density ratio)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute support intervals from prior/posterior draw CSVs.
    Compute(ComputeArgs),
    /// Run the built-in synthetic scenario (seeded normal prior/posterior).
    Demo(DemoArgs),
}

/// Options for computing intervals from CSV draw matrices.
#[derive(Debug, Parser, Clone)]
pub struct ComputeArgs {
    /// Posterior draw matrix CSV (header = parameter names, one draw per row).
    #[arg(long, value_name = "CSV")]
    pub posterior: PathBuf,

    /// Prior draw matrix CSV, column-aligned with the posterior.
    ///
    /// When omitted, each posterior sample stands in as its own prior and a
    /// warning is emitted: the intervals are then not interpretable as
    /// evidence.
    #[arg(long, value_name = "CSV")]
    pub prior: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options for the synthetic demo scenario.
#[derive(Debug, Parser, Clone)]
pub struct DemoArgs {
    /// Random seed for draw generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of draws per parameter.
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub draws: usize,

    /// Prior mean.
    #[arg(long, default_value_t = 0.0)]
    pub prior_mean: f64,

    /// Prior standard deviation.
    #[arg(long, default_value_t = 1.0)]
    pub prior_sd: f64,

    /// Posterior mean.
    #[arg(long, default_value_t = 0.5)]
    pub posterior_mean: f64,

    /// Posterior standard deviation.
    #[arg(long, default_value_t = 0.3)]
    pub posterior_sd: f64,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by both subcommands.
#[derive(Debug, Args, Clone)]
pub struct CommonArgs {
    /// BF threshold(s); repeat for multiple (e.g. `--bf 1 --bf 3`).
    #[arg(long = "bf", default_values_t = vec![1.0])]
    pub thresholds: Vec<f64>,

    /// Fraction of the range added to each side of the evaluation grid.
    #[arg(long, default_value_t = 0.05)]
    pub extend_fraction: f64,

    /// Number of grid points.
    #[arg(long, default_value_t = 256)]
    pub points: usize,

    /// Suppress non-fatal warnings.
    #[arg(long)]
    pub quiet: bool,

    /// Export result rows to CSV.
    #[arg(long = "export-results", value_name = "CSV")]
    pub export_results: Option<PathBuf>,

    /// Export per-parameter ratio curves to JSON (for external plotting).
    #[arg(long = "export-curves", value_name = "JSON")]
    pub export_curves: Option<PathBuf>,
}
