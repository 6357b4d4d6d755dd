//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while computing support intervals
//! - exported to CSV/JSON
//! - reloaded later for plotting or comparisons

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A named collection of draw columns: one sample of draws per scalar parameter.
///
/// Prior and posterior sets correspond **by column position**, mirroring the
/// caller's column-alignment contract. Names are carried for labeling output,
/// not for matching.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ParameterSet {
    /// Build a parameter set from names and draw columns.
    ///
    /// Requirements: one column per name, unique names, and equal draw counts
    /// across columns (the columns come from one draw matrix).
    pub fn new(names: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self, AppError> {
        if names.len() != columns.len() {
            return Err(AppError::new(
                2,
                format!(
                    "Parameter set mismatch: {} names but {} draw columns.",
                    names.len(),
                    columns.len()
                ),
            ));
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].iter().any(|n| n == name) {
                return Err(AppError::new(2, format!("Duplicate parameter name '{name}'.")));
            }
        }
        if let Some(first) = columns.first() {
            let n = first.len();
            for (name, col) in names.iter().zip(&columns) {
                if col.len() != n {
                    return Err(AppError::new(
                        2,
                        format!(
                            "Ragged draw matrix: parameter '{name}' has {} draws, expected {n}.",
                            col.len()
                        ),
                    ));
                }
            }
        }
        Ok(Self { names, columns })
    }

    /// Number of parameters (columns).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Parameter names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Draws for the `i`-th parameter.
    ///
    /// # Panics
    /// Panics if `i` is out of range; callers iterate `0..len()`.
    pub fn column(&self, i: usize) -> &[f64] {
        &self.columns[i]
    }
}

/// The outer bounds of the supported region for one parameter at one threshold.
///
/// `(NaN, NaN)` is a legitimate value meaning "no interval at this support
/// level could be determined" (fewer than two supported grid points, identical
/// prior/posterior samples, or a zero-width grid). It is *not* a failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportInterval {
    pub lower: f64,
    pub upper: f64,
}

impl SupportInterval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// The `(NaN, NaN)` sentinel.
    pub fn undetermined() -> Self {
        Self {
            lower: f64::NAN,
            upper: f64::NAN,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        self.lower.is_nan() || self.upper.is_nan()
    }

    /// Interval width; NaN when undetermined.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// One output row: (parameter, requested BF threshold, interval bounds).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub parameter: String,
    pub bf: f64,
    pub interval: SupportInterval,
}

/// Per-parameter `(grid, ratio)` evaluation, kept as a secondary output so a
/// plotting/diagnostic layer does not have to recompute the densities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioCurve {
    pub parameter: String,
    pub grid: Vec<f64>,
    pub ratio: Vec<f64>,
}

/// Non-fatal conditions, accumulated in results instead of printed from the
/// math code. The CLI decides whether and where to surface them.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// No prior was supplied; the posterior stood in as its own prior.
    MissingPrior,
    /// More than one disjoint supported region was detected; the table row
    /// holds only their outer envelope.
    MultiModalSupport {
        parameter: String,
        bf: f64,
        region_count: usize,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingPrior => write!(
                f,
                "No prior supplied: using the posterior as its own prior. \
                 The resulting intervals are not interpretable as evidence."
            ),
            Diagnostic::MultiModalSupport {
                parameter,
                bf,
                region_count,
            } => write!(
                f,
                "Parameter '{parameter}' at BF={bf}: {region_count} disjoint supported \
                 regions detected; the reported interval is their outer envelope."
            ),
        }
    }
}

/// Full batch output: rows, per-parameter ratio curves, and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct SiTable {
    /// Rows grouped by threshold (outer, caller order) then parameter (inner,
    /// caller column order). Never resorted.
    pub rows: Vec<ResultRow>,
    /// One curve per parameter that was actually evaluated (degenerate
    /// parameters short-circuit before any density is fitted).
    pub curves: Vec<RatioCurve>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Tuning knobs for the interval computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiOptions {
    /// Fraction of the robust range width added to each side of the grid.
    pub extend_fraction: f64,
    /// Number of evenly spaced grid points (inclusive of both endpoints).
    pub point_count: usize,
    /// When false, suppresses the missing-prior diagnostic (the substitution
    /// itself still happens).
    pub verbose: bool,
}

impl Default for SiOptions {
    fn default() -> Self {
        Self {
            extend_fraction: 0.05,
            point_count: 256,
            verbose: true,
        }
    }
}
