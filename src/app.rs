//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads or generates draw matrices
//! - runs the batch interval computation
//! - prints the report and accumulated warnings
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, CommonArgs, ComputeArgs, DemoArgs};
use crate::data::DemoConfig;
use crate::domain::{SiOptions, SiTable};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `si` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Compute(args) => handle_compute(args),
        Command::Demo(args) => handle_demo(args),
    }
}

fn handle_compute(args: ComputeArgs) -> Result<(), AppError> {
    let opts = si_options_from_args(&args.common);

    let posterior = crate::io::read_draws_csv(&args.posterior)?;
    let prior = args
        .prior
        .as_deref()
        .map(crate::io::read_draws_csv)
        .transpose()?;

    let table = pipeline::run_batch(prior.as_ref(), &posterior, &args.common.thresholds, &opts)?;
    emit_output(&table, &args.common)
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let opts = si_options_from_args(&args.common);

    let config = DemoConfig {
        seed: args.seed,
        draw_count: args.draws,
        prior_mean: args.prior_mean,
        prior_sd: args.prior_sd,
        posterior_mean: args.posterior_mean,
        posterior_sd: args.posterior_sd,
    };
    let (prior, posterior) = crate::data::generate_demo_draws(&config)?;

    let table = pipeline::run_batch(Some(&prior), &posterior, &args.common.thresholds, &opts)?;
    emit_output(&table, &args.common)
}

fn emit_output(table: &SiTable, common: &CommonArgs) -> Result<(), AppError> {
    println!("{}", crate::report::format_run_summary(table));

    if !common.quiet && !table.diagnostics.is_empty() {
        eprint!("{}", crate::report::format_diagnostics(&table.diagnostics));
    }

    if let Some(path) = &common.export_results {
        crate::io::write_results_csv(path, table)?;
    }
    if let Some(path) = &common.export_curves {
        crate::io::write_curves_json(path, &table.curves)?;
    }

    Ok(())
}

fn si_options_from_args(common: &CommonArgs) -> SiOptions {
    SiOptions {
        extend_fraction: common.extend_fraction,
        point_count: common.points,
        verbose: !common.quiet,
    }
}
