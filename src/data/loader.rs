use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use super::model::{MeasurementRow, MeasurementTable, MetricSet};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fields per line: λ, μ, then theory and experiment values for the five
/// metrics, in the fixed column order of the dataset.
pub const FIELDS_PER_LINE: usize = 12;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading dataset")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 12 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}, field {column}: '{token}' is not a number")]
    Number {
        line: usize,
        column: usize,
        token: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the measurement dataset from a whitespace-separated text file.
///
/// Format: no header, exactly 12 numeric fields per line, decimal comma
/// (`0,8144`). Column order: λ, μ, P0/Pn/Q/A/k theory, P0/Pn/Q/A/k
/// experiment. Blank lines are skipped.
///
/// The returned table is sorted ascending by λ (stable for ties).
pub fn load_file(path: &Path) -> Result<MeasurementTable, LoadError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_line(&line, idx + 1)?);
    }

    log::info!(
        "loaded {} measurement rows from {}",
        rows.len(),
        path.display()
    );
    Ok(MeasurementTable::from_rows(rows))
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

fn parse_line(line: &str, line_no: usize) -> Result<MeasurementRow, LoadError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(LoadError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let mut values = [0f64; FIELDS_PER_LINE];
    for (i, token) in fields.iter().enumerate() {
        values[i] = parse_decimal_comma(token).ok_or_else(|| LoadError::Number {
            line: line_no,
            column: i + 1,
            token: (*token).to_string(),
        })?;
    }

    Ok(MeasurementRow {
        lambda: values[0],
        mu: values[1],
        theory: MetricSet {
            p0: values[2],
            pn: values[3],
            q: values[4],
            a: values[5],
            k: values[6],
        },
        exp: MetricSet {
            p0: values[7],
            pn: values[8],
            q: values[9],
            a: values[10],
            k: values[11],
        },
    })
}

/// Parse a float written with a decimal comma. A plain decimal point is
/// accepted as well; a token with more than one separator stays invalid.
fn parse_decimal_comma(token: &str) -> Option<f64> {
    token.replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_dataset(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write dataset");
        file
    }

    const LINE_A: &str =
        "0,5 0,2 0,1084 0,2822 0,7178 0,3589 1,7946 0,1100 0,2800 0,7200 0,3600 1,8000";
    const LINE_B: &str =
        "0,3 0,2 0,2098 0,1182 0,8818 0,2645 1,3226 0,2100 0,1200 0,8800 0,2600 1,3200";

    #[test]
    fn loads_and_sorts_by_lambda() {
        let file = write_dataset(&format!("{LINE_A}\n{LINE_B}\n"));
        let table = load_file(file.path()).expect("load");

        assert_eq!(table.len(), 2);
        let lambdas: Vec<f64> = table.rows().iter().map(|r| r.lambda).collect();
        assert_eq!(lambdas, vec![0.3, 0.5]);
        assert_eq!(table.first_mu(), Some(0.2));
    }

    #[test]
    fn parses_decimal_comma_into_columns() {
        let file = write_dataset(LINE_A);
        let table = load_file(file.path()).expect("load");

        let row = &table.rows()[0];
        assert!((row.theory.p0 - 0.1084).abs() < 1e-12);
        assert!((row.theory.k - 1.7946).abs() < 1e-12);
        assert!((row.exp.p0 - 0.11).abs() < 1e-12);
        assert!((row.exp.k - 1.8).abs() < 1e-12);
    }

    #[test]
    fn skips_blank_lines() {
        let file = write_dataset(&format!("\n{LINE_A}\n\n   \n{LINE_B}\n"));
        let table = load_file(file.path()).expect("load");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn rejects_wrong_field_count() {
        // LINE_A minus its last field: 11 columns.
        let truncated = LINE_A.rsplit_once(' ').unwrap().0;
        let file = write_dataset(truncated);

        match load_file(file.path()) {
            Err(LoadError::FieldCount { line: 1, found: 11 }) => {}
            other => panic!("expected FieldCount error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_field() {
        let bad = LINE_A.replace("0,2822", "0,28x2");
        let file = write_dataset(&bad);

        match load_file(file.path()) {
            Err(LoadError::Number { line: 1, column: 4, token }) => {
                assert_eq!(token, "0,28x2");
            }
            other => panic!("expected Number error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_double_separator() {
        assert!(parse_decimal_comma("1,5,3").is_none());
        assert_eq!(parse_decimal_comma("12,5"), Some(12.5));
        assert_eq!(parse_decimal_comma("12.5"), Some(12.5));
    }

    #[test]
    fn empty_file_yields_empty_table() {
        let file = write_dataset("");
        let table = load_file(file.path()).expect("load");
        assert!(table.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_file(Path::new("no/such/data.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
