//! Shared batch pipeline used by both subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! draw matrices -> option validation -> batch interval computation
//!
//! The subcommand handlers then focus on input sourcing (CSV vs synthetic)
//! and presentation (printing, exports).

use crate::domain::{ParameterSet, SiOptions, SiTable};
use crate::error::AppError;
use crate::si::compute_table;

/// Validate option values coming from the CLI and run the batch computation.
pub fn run_batch(
    prior: Option<&ParameterSet>,
    posterior: &ParameterSet,
    thresholds: &[f64],
    opts: &SiOptions,
) -> Result<SiTable, AppError> {
    if !(opts.extend_fraction.is_finite() && opts.extend_fraction >= 0.0) {
        return Err(AppError::new(
            2,
            format!(
                "Invalid extend fraction: {} (must be finite and >= 0).",
                opts.extend_fraction
            ),
        ));
    }
    if opts.point_count < 2 {
        return Err(AppError::new(2, "Grid point count must be >= 2."));
    }

    compute_table(prior, posterior, thresholds, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DemoConfig, generate_demo_draws};

    #[test]
    fn demo_scenario_runs_end_to_end() {
        let (prior, posterior) = generate_demo_draws(&DemoConfig::default()).unwrap();
        let table = run_batch(
            Some(&prior),
            &posterior,
            &[1.0, 100.0],
            &SiOptions::default(),
        )
        .unwrap();

        assert_eq!(table.rows.len(), 2);
        // The moderate default update supports a finite interval at BF=1 and
        // nothing at BF=100.
        assert!(!table.rows[0].interval.is_undetermined());
        assert!(table.rows[1].interval.is_undetermined());
    }

    #[test]
    fn bad_cli_options_are_rejected_up_front() {
        let (prior, posterior) = generate_demo_draws(&DemoConfig::default()).unwrap();
        let opts = SiOptions {
            point_count: 1,
            ..SiOptions::default()
        };
        let err = run_batch(Some(&prior), &posterior, &[1.0], &opts).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
