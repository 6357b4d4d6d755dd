//! Export results to CSV and ratio curves to JSON.
//!
//! The CSV export is meant to be easy to consume in spreadsheets or downstream
//! scripts; undetermined bounds are written as empty fields rather than `NaN`
//! so spreadsheet tooling does not choke. The JSON export carries the
//! per-parameter `(grid, ratio)` curves for external plotting.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{RatioCurve, SiTable};
use crate::error::AppError;

/// Write one CSV row per (parameter, BF threshold) result.
pub fn write_results_csv(path: &Path, table: &SiTable) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "parameter,bf,lower,upper")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for row in &table.rows {
        writeln!(
            file,
            "{},{},{},{}",
            row.parameter,
            row.bf,
            fmt_bound(row.interval.lower),
            fmt_bound(row.interval.upper),
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the per-parameter ratio curves as JSON.
pub fn write_curves_json(path: &Path, curves: &[RatioCurve]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create curve JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::to_writer_pretty(file, curves)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))
}

fn fmt_bound(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.6}")
    } else {
        String::new()
    }
}
