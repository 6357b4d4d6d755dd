//! Density estimation boundary.
//!
//! The interval math never fits densities itself; it consumes anything that
//! implements [`DensityModel`]. The crate ships one default backend
//! ([`GaussianKde`]) so the pipeline is usable end to end, but callers can
//! plug in their own estimator at the same seam.

pub mod kde;

pub use kde::GaussianKde;

/// A fitted, continuous density over one scalar parameter.
///
/// Implementations are expected to be smooth and strictly positive almost
/// everywhere over the region of interest; values may still underflow to zero
/// far in the tails, which downstream ratio handling tolerates.
pub trait DensityModel {
    /// Density value at `x` (non-negative).
    fn evaluate(&self, x: f64) -> f64;
}
