//! CSV reading: header check and row extraction

use std::collections::HashMap;
use std::io::Read;

use super::error::ImportError;

/// One data row keyed by header name
#[derive(Debug, Clone)]
pub struct Row {
    /// 1-based line number in the file
    pub line: u64,
    fields: HashMap<String, String>,
}

impl Row {
    /// Trimmed value of a column that must be present and non-empty
    pub fn required(&self, column: &'static str) -> Result<&str, ImportError> {
        match self.fields.get(column).map(String::as_str) {
            Some(value) if !value.is_empty() => Ok(value),
            Some(_) => Err(ImportError::invalid(self.line, column, "must not be empty")),
            None => Err(ImportError::MissingColumn {
                line: self.line,
                column,
            }),
        }
    }

    /// Value of an optional column; empty counts as absent
    pub fn optional(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Read every data row, checking the header carries `columns`
///
/// Reading stops with `TooManyRows` once more than `max_rows` data rows are seen.
pub fn read_rows<R: Read>(
    input: R,
    columns: &[&'static str],
    max_rows: usize,
) -> Result<Vec<Row>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| ImportError::from_csv(&e, 1))?
        .clone();

    if let Some(column) = columns
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(ImportError::MissingColumn {
            line: 1,
            column: *column,
        });
    }

    let mut rows = Vec::new();
    for (n, result) in reader.records().enumerate() {
        let fallback_line = n as u64 + 2;
        let record = result.map_err(|e| ImportError::from_csv(&e, fallback_line))?;
        let line = record.position().map_or(fallback_line, csv::Position::line);

        // Blank lines are skipped by the reader; all-empty rows are too.
        if record.iter().all(str::is_empty) {
            continue;
        }

        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        if rows.len() == max_rows {
            return Err(ImportError::TooManyRows { limit: max_rows });
        }
        rows.push(Row { line, fields });
    }

    if rows.is_empty() {
        return Err(ImportError::Empty);
    }

    tracing::debug!(rows = rows.len(), "CSV rows read");
    Ok(rows)
}
