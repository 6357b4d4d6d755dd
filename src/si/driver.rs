//! Single-parameter computation.
//!
//! Composes grid construction, density fitting, ratio evaluation, and region
//! extraction for one (parameter, threshold) pair, and owns the degenerate-case
//! policy:
//!
//! - element-wise identical prior/posterior samples → undetermined, no fitting
//! - zero-width grid (all draws identical across both samples) → undetermined
//! - density fitting failure → fatal `Err`, never the undetermined sentinel
//!
//! The grid and ratio do not depend on the threshold, so the
//! threshold-independent part is split out as [`evaluate_curve`]; the batch
//! driver reuses it to fit each parameter once across many thresholds.

use crate::density::{DensityModel, GaussianKde};
use crate::domain::{SiOptions, SupportInterval};
use crate::error::AppError;

use super::grid::build_grid;
use super::ratio::evaluate_ratio;
use super::region::{SupportRegions, extract_regions};

/// Everything computed for one parameter at one threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalComputation {
    pub regions: SupportRegions,
    /// Empty when a degenerate short-circuit fired before evaluation.
    pub grid: Vec<f64>,
    pub ratio: Vec<f64>,
}

impl IntervalComputation {
    fn undetermined() -> Self {
        Self {
            regions: SupportRegions {
                envelope: SupportInterval::undetermined(),
                regions: Vec::new(),
                multi_modal: false,
            },
            grid: Vec::new(),
            ratio: Vec::new(),
        }
    }
}

/// Compute the support interval for one parameter using the default
/// Gaussian-KDE density backend.
pub fn compute_interval(
    prior: &[f64],
    posterior: &[f64],
    threshold: f64,
    opts: &SiOptions,
) -> Result<SupportInterval, AppError> {
    Ok(compute_with(prior, posterior, threshold, opts, GaussianKde::fit)?
        .regions
        .envelope)
}

/// Compute interval, sub-regions, and the ratio curve with a caller-supplied
/// density backend.
///
/// `fit` is invoked once per sample; its failures propagate unchanged.
pub fn compute_with<M, F>(
    prior: &[f64],
    posterior: &[f64],
    threshold: f64,
    opts: &SiOptions,
    fit: F,
) -> Result<IntervalComputation, AppError>
where
    M: DensityModel,
    F: Fn(&[f64]) -> Result<M, AppError>,
{
    validate_threshold(threshold)?;

    match evaluate_curve(prior, posterior, opts, fit)? {
        Some((grid, ratio)) => {
            let regions = extract_regions(&grid, &ratio, threshold);
            Ok(IntervalComputation { regions, grid, ratio })
        }
        None => Ok(IntervalComputation::undetermined()),
    }
}

/// Threshold-independent part of the computation: build the grid, fit both
/// densities, evaluate the ratio.
///
/// Returns `None` when a degenerate short-circuit fires: element-wise
/// identical samples (an unchanged distribution has no informative ratio) or
/// a zero-width grid.
pub fn evaluate_curve<M, F>(
    prior: &[f64],
    posterior: &[f64],
    opts: &SiOptions,
    fit: F,
) -> Result<Option<(Vec<f64>, Vec<f64>)>, AppError>
where
    M: DensityModel,
    F: Fn(&[f64]) -> Result<M, AppError>,
{
    if prior == posterior {
        return Ok(None);
    }

    let grid = build_grid(prior, posterior, opts.extend_fraction, opts.point_count)?;
    if grid[grid.len() - 1] == grid[0] {
        return Ok(None);
    }

    let prior_density = fit(prior)?;
    let posterior_density = fit(posterior)?;
    let ratio = evaluate_ratio(&prior_density, &posterior_density, &grid);
    Ok(Some((grid, ratio)))
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<(), AppError> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(AppError::new(
            2,
            format!("Invalid BF threshold: {threshold} (must be finite and > 0)."),
        ));
    }
    Ok(())
}
