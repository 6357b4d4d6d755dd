//! Formatted terminal output for result tables.
//!
//! We keep formatting code in one place so:
//! - the interval math stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{Diagnostic, SiTable};

/// Format the full run summary (header + result table).
///
/// Diagnostics are formatted separately ([`format_diagnostics`]) so the CLI
/// can route them to stderr.
pub fn format_run_summary(table: &SiTable) -> String {
    let mut out = String::new();
    out.push_str("=== si - Support Intervals (posterior/prior density ratio) ===\n\n");
    out.push_str(&format_table(table));
    out
}

/// Format one row per (parameter, BF threshold) combination, caller order.
pub fn format_table(table: &SiTable) -> String {
    let name_width = table
        .rows
        .iter()
        .map(|r| r.parameter.chars().count())
        .chain(std::iter::once("parameter".len()))
        .max()
        .unwrap_or(9)
        .min(32);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$} {:>8} {:>12} {:>12}\n",
        "parameter", "BF", "lower", "upper"
    ));
    out.push_str(&format!(
        "{:-<name_width$} {:-<8} {:-<12} {:-<12}\n",
        "", "", "", ""
    ));

    for row in &table.rows {
        out.push_str(&format!(
            "{:<name_width$} {:>8} {:>12} {:>12}\n",
            truncate(&row.parameter, name_width),
            trim_float(row.bf),
            fmt_bound(row.interval.lower),
            fmt_bound(row.interval.upper),
        ));
    }

    out
}

/// Format the accumulated non-fatal diagnostics, one per line.
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for d in diagnostics {
        out.push_str(&format!("warning: {d}\n"));
    }
    out
}

fn fmt_bound(v: f64) -> String {
    if v.is_finite() {
        format!("{v:>12.4}")
    } else {
        format!("{:>12}", "n/a")
    }
}

/// Render thresholds like `1`, `3`, `2.5` without trailing zeros.
fn trim_float(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e12 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
