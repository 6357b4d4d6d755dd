//! CSV draw-matrix ingest.
//!
//! A draw matrix is a CSV file with a header row of parameter names and one
//! draw per parameter per data row. Prior and posterior matrices are separate
//! files; their columns correspond by position.
//!
//! Design goals:
//! - **Strict schema**: a header row is required, every data row must have
//!   exactly one finite value per parameter (clear errors + exit code 2)
//! - **No silent repair**: a bad row is fatal — dropping rows would silently
//!   shift the samples the intervals are computed from
//! - **Separation of concerns**: no interval math here

use std::fs::File;
use std::path::Path;

use crate::domain::ParameterSet;
use crate::error::AppError;

/// Read a draw matrix CSV into a [`ParameterSet`].
pub fn read_draws_csv(path: &Path) -> Result<ParameterSet, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let names: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    if names.is_empty() || names.iter().any(|n| n.is_empty()) {
        return Err(AppError::new(
            2,
            format!("CSV '{}' needs a header row of parameter names.", path.display()),
        ));
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header row, and CSV line numbers are
        // 1-based.
        let line = idx + 2;
        let record =
            result.map_err(|e| AppError::new(2, format!("CSV parse error at line {line}: {e}")))?;

        if record.len() != names.len() {
            return Err(AppError::new(
                2,
                format!(
                    "Line {line}: expected {} values, found {}.",
                    names.len(),
                    record.len()
                ),
            ));
        }

        for (col, raw) in record.iter().enumerate() {
            let value: f64 = raw.parse().map_err(|_| {
                AppError::new(
                    2,
                    format!(
                        "Line {line}, column '{}': '{raw}' is not a number.",
                        names[col]
                    ),
                )
            })?;
            if !value.is_finite() {
                return Err(AppError::new(
                    2,
                    format!("Line {line}, column '{}': non-finite draw {value}.", names[col]),
                ));
            }
            columns[col].push(value);
        }
    }

    if columns.first().is_none_or(|c| c.len() < 2) {
        return Err(AppError::new(
            3,
            format!(
                "CSV '{}' needs at least 2 draw rows for density fitting.",
                path.display()
            ),
        ));
    }

    ParameterSet::new(names, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("bayes-si-ingest-{name}.csv"));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_a_two_parameter_matrix() {
        let path = write_temp("ok", "a,b\n1.0,2.0\n1.5,2.5\n-0.5,3.0\n");
        let set = read_draws_csv(&path).unwrap();

        assert_eq!(set.names(), &["a".to_string(), "b".to_string()]);
        assert_eq!(set.column(0), &[1.0, 1.5, -0.5]);
        assert_eq!(set.column(1), &[2.0, 2.5, 3.0]);
    }

    #[test]
    fn rejects_non_numeric_values_with_a_line_number() {
        let path = write_temp("bad-value", "a\n1.0\nnope\n");
        let err = read_draws_csv(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Line 3"));
    }

    #[test]
    fn rejects_non_finite_values() {
        let path = write_temp("nan", "a\n1.0\nNaN\n");
        let err = read_draws_csv(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejects_short_matrices() {
        let path = write_temp("short", "a\n1.0\n");
        let err = read_draws_csv(&path).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
