//! Gaussian kernel density estimation.
//!
//! The default density backend: a plain univariate KDE with a Gaussian kernel
//! and Silverman's rule-of-thumb bandwidth,
//!
//! ```text
//! h = 0.9 * min(sd, iqr / 1.34) * n^(-1/5)
//! ```
//!
//! This is deliberately unsophisticated — the interval math only needs a
//! smooth, strictly positive density it can evaluate pointwise. Fitting
//! failures (too few draws, constant samples, non-finite values) are fatal
//! and must never be silently converted into an "undetermined interval"
//! result, which is reserved for a semantically different outcome.

use crate::error::AppError;

use super::DensityModel;

const SQRT_2PI: f64 = 2.5066282746310002;

/// A fitted Gaussian KDE over one sample of draws.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    points: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fit a KDE to a sample of draws.
    ///
    /// Errors (exit code 4) when the sample has fewer than 2 draws, contains
    /// non-finite values, or has no spread at all (a constant sample admits no
    /// positive bandwidth).
    pub fn fit(sample: &[f64]) -> Result<Self, AppError> {
        if sample.len() < 2 {
            return Err(AppError::new(
                4,
                format!(
                    "Density fitting requires at least 2 draws, got {}.",
                    sample.len()
                ),
            ));
        }
        if sample.iter().any(|v| !v.is_finite()) {
            return Err(AppError::new(4, "Density fitting rejects non-finite draws."));
        }

        let bandwidth = silverman_bandwidth(sample)?;
        Ok(Self {
            points: sample.to_vec(),
            bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

impl DensityModel for GaussianKde {
    fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let n = self.points.len() as f64;
        let mut acc = 0.0;
        for &xi in &self.points {
            let z = (x - xi) / h;
            acc += (-0.5 * z * z).exp();
        }
        acc / (n * h * SQRT_2PI)
    }
}

/// Silverman's rule-of-thumb bandwidth.
///
/// Uses the smaller of the standard deviation and IQR/1.34 as the scale
/// estimate; when the IQR is zero (heavily tied samples) the standard
/// deviation alone is used.
fn silverman_bandwidth(sample: &[f64]) -> Result<f64, AppError> {
    let n = sample.len() as f64;

    let mean = sample.iter().sum::<f64>() / n;
    let var = sample.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0);
    let sd = var.sqrt();

    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let iqr = quantile_sorted(&sorted, 0.75) - quantile_sorted(&sorted, 0.25);

    let scale = if iqr > 0.0 {
        sd.min(iqr / 1.34)
    } else {
        sd
    };

    let h = 0.9 * scale * n.powf(-0.2);
    if !(h.is_finite() && h > 0.0) {
        return Err(AppError::new(
            4,
            "Degenerate sample: no usable spread for density bandwidth.",
        ));
    }
    Ok(h)
}

/// Linear-interpolation quantile on an already sorted slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() as f64 - 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}
