//! Batch computation across parameters and thresholds.
//!
//! The grid and the density ratio do not depend on the threshold, so the batch
//! fits each parameter's densities once and reuses the evaluated ratio curve
//! across every requested threshold. This is a pure performance optimization:
//! the rows are identical to running the single-parameter driver per
//! (parameter, threshold) pair.
//!
//! Parameters are independent, so fitting/evaluation runs in parallel; the
//! indexed collect keeps results in caller column order. Row assembly is
//! sequential and ordered thresholds-outer, parameters-inner.
//!
//! Failure policy: a density-fitting failure on any parameter aborts the whole
//! batch with that parameter named in the error. It is never converted into an
//! undetermined-interval row.

use rayon::prelude::*;

use crate::density::GaussianKde;
use crate::domain::{Diagnostic, ParameterSet, RatioCurve, ResultRow, SiOptions, SiTable};
use crate::error::AppError;

use super::driver::{evaluate_curve, validate_threshold};
use super::region::extract_regions;

/// Compute the full result table for `posterior` against `prior`.
///
/// When `prior` is `None`, each posterior sample stands in as its own prior
/// and a [`Diagnostic::MissingPrior`] is recorded (unless `opts.verbose` is
/// false); such intervals are not interpretable as evidence but the batch does
/// not fail closed.
pub fn compute_table(
    prior: Option<&ParameterSet>,
    posterior: &ParameterSet,
    thresholds: &[f64],
    opts: &SiOptions,
) -> Result<SiTable, AppError> {
    if posterior.is_empty() {
        return Err(AppError::new(3, "No parameters to compute."));
    }
    if thresholds.is_empty() {
        return Err(AppError::new(2, "At least one BF threshold is required."));
    }
    for &t in thresholds {
        validate_threshold(t)?;
    }
    if let Some(prior) = prior {
        if prior.len() != posterior.len() {
            return Err(AppError::new(
                2,
                format!(
                    "Prior/posterior shape mismatch: {} prior columns vs {} posterior columns.",
                    prior.len(),
                    posterior.len()
                ),
            ));
        }
    }

    let mut diagnostics = Vec::new();
    if prior.is_none() && opts.verbose {
        diagnostics.push(Diagnostic::MissingPrior);
    }

    // Fit and evaluate each parameter once (threshold-independent work),
    // in parallel across parameters.
    let evals: Vec<ParamEval> = (0..posterior.len())
        .into_par_iter()
        .map(|i| evaluate_parameter(prior, posterior, i, opts))
        .collect::<Result<Vec<_>, _>>()?;

    // Assemble rows: thresholds outer, parameters inner, caller order on both.
    let mut rows = Vec::with_capacity(thresholds.len() * evals.len());
    for &bf in thresholds {
        for eval in &evals {
            let interval = match &eval.curve {
                Some(curve) => {
                    let regions = extract_regions(&curve.grid, &curve.ratio, bf);
                    if regions.multi_modal {
                        diagnostics.push(Diagnostic::MultiModalSupport {
                            parameter: eval.name.clone(),
                            bf,
                            region_count: regions.regions.len(),
                        });
                    }
                    regions.envelope
                }
                None => crate::domain::SupportInterval::undetermined(),
            };
            rows.push(ResultRow {
                parameter: eval.name.clone(),
                bf,
                interval,
            });
        }
    }

    let curves = evals.into_iter().filter_map(|e| e.curve).collect();
    Ok(SiTable {
        rows,
        curves,
        diagnostics,
    })
}

/// Threshold-independent evaluation for one parameter.
struct ParamEval {
    name: String,
    /// `None` when a degenerate short-circuit fired (identical samples or a
    /// zero-width grid): every threshold maps to the undetermined interval.
    curve: Option<RatioCurve>,
}

fn evaluate_parameter(
    prior: Option<&ParameterSet>,
    posterior: &ParameterSet,
    i: usize,
    opts: &SiOptions,
) -> Result<ParamEval, AppError> {
    let name = posterior.names()[i].clone();
    let posterior_draws = posterior.column(i);
    let prior_draws = prior.map_or(posterior_draws, |p| p.column(i));

    let computed = evaluate_curve(prior_draws, posterior_draws, opts, GaussianKde::fit)
        .map_err(|e| AppError::new(e.exit_code(), format!("Parameter '{name}': {e}")))?;

    let curve = computed.map(|(grid, ratio)| RatioCurve {
        parameter: name.clone(),
        grid,
        ratio,
    });
    Ok(ParamEval { name, curve })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::normal_draws;
    use crate::si::driver::compute_interval;

    fn two_param_sets() -> (ParameterSet, ParameterSet) {
        let prior = ParameterSet::new(
            vec!["a".into(), "b".into()],
            vec![
                normal_draws(1, 0.0, 1.0, 800),
                normal_draws(2, 0.0, 1.0, 800),
            ],
        )
        .unwrap();
        let posterior = ParameterSet::new(
            vec!["a".into(), "b".into()],
            vec![
                normal_draws(3, 0.5, 0.3, 800),
                normal_draws(4, 0.3, 0.5, 800),
            ],
        )
        .unwrap();
        (prior, posterior)
    }

    #[test]
    fn rows_are_grouped_threshold_outer_parameter_inner() {
        let (prior, posterior) = two_param_sets();
        let table =
            compute_table(Some(&prior), &posterior, &[1.0, 3.0], &SiOptions::default()).unwrap();

        assert_eq!(table.rows.len(), 4);
        let order: Vec<(f64, &str)> = table
            .rows
            .iter()
            .map(|r| (r.bf, r.parameter.as_str()))
            .collect();
        assert_eq!(order, vec![(1.0, "a"), (1.0, "b"), (3.0, "a"), (3.0, "b")]);

        // Raising the threshold never widens the interval for a parameter.
        let w = |i: usize| table.rows[i].interval.width();
        assert!(w(2).is_nan() || w(2) <= w(0));
        assert!(w(3).is_nan() || w(3) <= w(1));
    }

    #[test]
    fn batch_rows_match_the_single_parameter_path() {
        let (prior, posterior) = two_param_sets();
        let thresholds = [1.0, 2.0, 5.0];
        let opts = SiOptions::default();
        let table = compute_table(Some(&prior), &posterior, &thresholds, &opts).unwrap();

        for row in &table.rows {
            let i = posterior.names().iter().position(|n| *n == row.parameter).unwrap();
            let expected =
                compute_interval(prior.column(i), posterior.column(i), row.bf, &opts).unwrap();
            if expected.is_undetermined() {
                assert!(row.interval.is_undetermined());
            } else {
                assert_eq!(row.interval, expected);
            }
        }
    }

    #[test]
    fn missing_prior_substitutes_the_posterior_and_warns() {
        let (_, posterior) = two_param_sets();
        let opts = SiOptions::default();

        let table = compute_table(None, &posterior, &[1.0], &opts).unwrap();
        assert!(table.diagnostics.contains(&Diagnostic::MissingPrior));

        // Same rows as passing the posterior explicitly as its own prior.
        let explicit = compute_table(Some(&posterior), &posterior, &[1.0], &opts).unwrap();
        assert_eq!(table.rows, explicit.rows);
        // Self-comparison of identical columns short-circuits to undetermined.
        assert!(table.rows.iter().all(|r| r.interval.is_undetermined()));
    }

    #[test]
    fn quiet_mode_suppresses_the_missing_prior_diagnostic() {
        let (_, posterior) = two_param_sets();
        let opts = SiOptions {
            verbose: false,
            ..SiOptions::default()
        };
        let table = compute_table(None, &posterior, &[1.0], &opts).unwrap();
        assert!(!table.diagnostics.contains(&Diagnostic::MissingPrior));
    }

    #[test]
    fn shape_mismatch_is_rejected_before_any_work() {
        let (prior, _) = two_param_sets();
        let posterior = ParameterSet::new(
            vec!["a".into()],
            vec![normal_draws(3, 0.5, 0.3, 100)],
        )
        .unwrap();
        let err =
            compute_table(Some(&prior), &posterior, &[1.0], &SiOptions::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn density_failure_names_the_parameter() {
        let posterior = ParameterSet::new(
            vec!["ok".into(), "bad".into()],
            vec![normal_draws(5, 0.0, 1.0, 100), vec![7.0; 100]],
        )
        .unwrap();
        let prior = ParameterSet::new(
            vec!["ok".into(), "bad".into()],
            vec![normal_draws(6, 0.0, 1.0, 100), normal_draws(7, 0.0, 1.0, 100)],
        )
        .unwrap();

        let err =
            compute_table(Some(&prior), &posterior, &[1.0], &SiOptions::default()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("'bad'"));
    }

    #[test]
    fn curves_are_exposed_per_evaluated_parameter() {
        let (prior, posterior) = two_param_sets();
        let opts = SiOptions {
            point_count: 128,
            ..SiOptions::default()
        };
        let table = compute_table(Some(&prior), &posterior, &[1.0], &opts).unwrap();

        assert_eq!(table.curves.len(), 2);
        for curve in &table.curves {
            assert_eq!(curve.grid.len(), 128);
            assert_eq!(curve.ratio.len(), 128);
        }
    }
}
