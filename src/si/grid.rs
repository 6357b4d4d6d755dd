//! Evaluation grid construction.
//!
//! Both densities are evaluated on one shared grid so their pointwise ratio is
//! well defined. The grid has to cover the bulk of *both* samples without
//! letting a single extreme draw stretch it out:
//!
//! - combined range: `[min(all draws), max(all draws)]`
//! - robust range: `median ± 7 × MAD` of the combined draws
//! - final range: the pairwise tighter of the two, extended slightly outward
//!   so a density tail is not truncated exactly at the data boundary
//!
//! Everything here is deterministic given the inputs.

use crate::error::AppError;

/// Normal-consistency scale factor for the MAD.
const MAD_CONSISTENCY: f64 = 1.4826;

/// Half-width of the robust range, in MAD units.
const MAD_MULTIPLIER: f64 = 7.0;

/// Build `point_count` evenly spaced evaluation points (inclusive endpoints)
/// covering the robustly-combined range of both samples.
///
/// When every draw is identical the range collapses and the grid degenerates
/// to `point_count` copies of that value; downstream code treats a zero-width
/// grid as "no support distinguishable".
pub fn build_grid(
    prior: &[f64],
    posterior: &[f64],
    extend_fraction: f64,
    point_count: usize,
) -> Result<Vec<f64>, AppError> {
    if prior.is_empty() || posterior.is_empty() {
        return Err(AppError::new(3, "Cannot build a grid from empty samples."));
    }
    if !(extend_fraction.is_finite() && extend_fraction >= 0.0) {
        return Err(AppError::new(
            2,
            format!("Invalid extend fraction: {extend_fraction} (must be finite and >= 0)."),
        ));
    }
    if point_count < 2 {
        return Err(AppError::new(2, "Grid point count must be >= 2."));
    }

    let mut combined: Vec<f64> = Vec::with_capacity(prior.len() + posterior.len());
    combined.extend_from_slice(prior);
    combined.extend_from_slice(posterior);
    if combined.iter().any(|v| !v.is_finite()) {
        return Err(AppError::new(2, "Samples contain non-finite draws."));
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in &combined {
        lo = lo.min(v);
        hi = hi.max(v);
    }

    let med = median(&mut combined.clone());
    let mad = mad(&combined, med);
    let robust_lo = med - MAD_MULTIPLIER * mad;
    let robust_hi = med + MAD_MULTIPLIER * mad;

    // Tighter bound on each side: robust against one extreme draw while still
    // covering the bulk of both samples.
    let lo = lo.max(robust_lo);
    let hi = hi.min(robust_hi);

    let pad = extend_fraction * (hi - lo);
    Ok(linspace(lo - pad, hi + pad, point_count))
}

/// `n` evenly spaced points from `lo` to `hi`, both included.
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n as f64 - 1.0);
    (0..n).map(|i| lo + step * i as f64).collect()
}

/// Median of a scratch slice (sorts in place).
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

/// Median absolute deviation around `center`, scaled for normal consistency.
fn mad(values: &[f64], center: f64) -> f64 {
    let mut abs_dev: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    MAD_CONSISTENCY * median(&mut abs_dev)
}
