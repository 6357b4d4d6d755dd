//! Pointwise density-ratio evaluation.
//!
//! `ratio[i] = posterior_density(grid[i]) / prior_density(grid[i])` — the
//! Savage–Dickey ratio at each grid point. No smoothing or clipping is applied
//! here: a zero or underflowed prior density produces `inf` or `NaN`, and the
//! region extractor excludes non-finite entries with a missing-aware
//! comparison instead of coercing them.

use crate::density::DensityModel;

/// Evaluate both densities over the grid and form the pointwise ratio.
pub fn evaluate_ratio<P, Q>(prior: &P, posterior: &Q, grid: &[f64]) -> Vec<f64>
where
    P: DensityModel,
    Q: DensityModel,
{
    grid.iter()
        .map(|&x| posterior.evaluate(x) / prior.evaluate(x))
        .collect()
}
