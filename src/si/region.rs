//! Supported-region extraction.
//!
//! Given a grid, the ratio sequence, and a BF threshold:
//!
//! 1. drop grid points whose ratio is non-finite (missing-aware, never coerced)
//! 2. mark the rest as supported where `ratio >= threshold`
//! 3. run-length encode the supported flags to find contiguous runs
//! 4. report the outer envelope of all supported points, plus every contiguous
//!    run as its own sub-interval
//!
//! The envelope deliberately flattens disjoint support into one pair of
//! bounds; the run count drives a multi-modality diagnostic so callers can
//! tell when finer structure was hidden.

use crate::domain::SupportInterval;

/// Extraction result: the envelope plus the full run structure.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportRegions {
    /// Smallest interval enclosing *all* supported grid points, or
    /// `(NaN, NaN)` when fewer than two points are supported.
    pub envelope: SupportInterval,
    /// One interval per maximal contiguous supported run, in grid order.
    /// Empty when the envelope is undetermined.
    pub regions: Vec<SupportInterval>,
    /// True when the run-length encoding shows more than one supported run
    /// (total run count above 3).
    pub multi_modal: bool,
}

impl SupportRegions {
    fn undetermined() -> Self {
        Self {
            envelope: SupportInterval::undetermined(),
            regions: Vec::new(),
            multi_modal: false,
        }
    }
}

/// Threshold the ratio sequence and extract the supported region(s).
///
/// `grid` and `ratio` must have equal length; a zero-width grid yields the
/// undetermined result without touching the ratios.
pub fn extract_regions(grid: &[f64], ratio: &[f64], threshold: f64) -> SupportRegions {
    debug_assert_eq!(grid.len(), ratio.len());

    if grid.is_empty() || grid[grid.len() - 1] == grid[0] {
        return SupportRegions::undetermined();
    }

    // Missing-filter first: non-finite ratios disappear entirely, so a gap of
    // NaNs between two supported stretches does not split them into separate
    // runs.
    let kept: Vec<(f64, bool)> = grid
        .iter()
        .zip(ratio.iter())
        .filter(|(_, r)| r.is_finite())
        .map(|(&g, &r)| (g, r >= threshold))
        .collect();

    let runs = run_lengths(&kept);
    let supported: Vec<f64> = kept
        .iter()
        .filter(|(_, s)| *s)
        .map(|(g, _)| *g)
        .collect();

    if supported.len() < 2 {
        return SupportRegions::undetermined();
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &g in &supported {
        lo = lo.min(g);
        hi = hi.max(g);
    }

    SupportRegions {
        envelope: SupportInterval::new(lo, hi),
        regions: supported_runs(&kept),
        multi_modal: runs > 3,
    }
}

/// Number of maximal runs (supported and unsupported combined).
fn run_lengths(flags: &[(f64, bool)]) -> usize {
    let mut runs = 0;
    let mut prev: Option<bool> = None;
    for &(_, s) in flags {
        if prev != Some(s) {
            runs += 1;
            prev = Some(s);
        }
    }
    runs
}

/// Each maximal supported run as a (first, last) grid-value interval.
fn supported_runs(flags: &[(f64, bool)]) -> Vec<SupportInterval> {
    let mut out = Vec::new();
    let mut start: Option<f64> = None;
    let mut last = 0.0;
    for &(g, s) in flags {
        if s {
            if start.is_none() {
                start = Some(g);
            }
            last = g;
        } else if let Some(first) = start.take() {
            out.push(SupportInterval::new(first, last));
        }
    }
    if let Some(first) = start {
        out.push(SupportInterval::new(first, last));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
        let step = (hi - lo) / (n as f64 - 1.0);
        (0..n).map(|i| lo + step * i as f64).collect()
    }

    /// A unimodal bump peaking at `center` with peak ratio `peak`.
    fn bump(grid: &[f64], center: f64, width: f64, peak: f64) -> Vec<f64> {
        grid.iter()
            .map(|&x| {
                let z = (x - center) / width;
                peak * (-0.5 * z * z).exp()
            })
            .collect()
    }

    #[test]
    fn unimodal_widths_shrink_as_the_threshold_rises() {
        let grid = linspace(-4.0, 4.0, 401);
        let ratio = bump(&grid, 0.0, 1.0, 10.0);

        let mut prev_width = f64::INFINITY;
        for threshold in [1.0, 2.0, 4.0, 8.0] {
            let res = extract_regions(&grid, &ratio, threshold);
            assert!(!res.envelope.is_undetermined());
            assert!(!res.multi_modal);
            assert_eq!(res.regions.len(), 1);
            let w = res.envelope.width();
            assert!(w < prev_width, "width {w} did not shrink at BF={threshold}");
            prev_width = w;
        }

        // Above the peak nothing is supported.
        let res = extract_regions(&grid, &ratio, 11.0);
        assert!(res.envelope.is_undetermined());
        assert!(res.regions.is_empty());
    }

    #[test]
    fn bimodal_support_reports_the_envelope_and_the_runs() {
        let grid = linspace(-6.0, 6.0, 601);
        let left = bump(&grid, -3.0, 0.5, 5.0);
        let right = bump(&grid, 3.0, 0.5, 5.0);
        let ratio: Vec<f64> = left.iter().zip(&right).map(|(a, b)| a + b).collect();

        let res = extract_regions(&grid, &ratio, 2.0);
        assert!(res.multi_modal);
        assert_eq!(res.regions.len(), 2);

        // Envelope spans both modes even though the middle is unsupported.
        assert!(res.envelope.lower < -2.0);
        assert!(res.envelope.upper > 2.0);
        // And is exactly the hull of the per-run intervals.
        assert_eq!(res.envelope.lower, res.regions[0].lower);
        assert_eq!(res.envelope.upper, res.regions[1].upper);
        assert!(res.regions[0].upper < res.regions[1].lower);
    }

    #[test]
    fn non_finite_ratios_are_dropped_not_compared() {
        let grid = linspace(0.0, 1.0, 5);
        // inf and NaN must not count as supported, and the NaN gap must not
        // split the supported stretch into two runs.
        let ratio = [2.0, f64::NAN, 2.0, f64::INFINITY, 0.5];
        let res = extract_regions(&grid, &ratio, 1.0);

        assert!(!res.multi_modal);
        assert_eq!(res.regions.len(), 1);
        assert_eq!(res.envelope, SupportInterval::new(0.0, 0.5));
    }

    #[test]
    fn fewer_than_two_supported_points_is_undetermined() {
        let grid = linspace(0.0, 1.0, 5);
        let ratio = [0.1, 0.2, 5.0, 0.2, 0.1];
        let res = extract_regions(&grid, &ratio, 1.0);
        assert!(res.envelope.is_undetermined());
    }

    #[test]
    fn zero_width_grid_is_undetermined() {
        let grid = [2.0; 8];
        let ratio = [3.0; 8];
        let res = extract_regions(&grid, &ratio, 1.0);
        assert!(res.envelope.is_undetermined());
    }
}
