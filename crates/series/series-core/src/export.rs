//! Delimited-text export and file import for the sales table.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use series_spi::{Result, SalesRecord, SeriesError};

/// Header row written by [`to_csv`].
pub const CSV_HEADER: [&str; 2] = ["Month", "Sales"];

/// Serialize records as two-column CSV (`Month,Sales`).
pub fn to_csv(records: &[SalesRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| SeriesError::Csv(e.to_string()))?;

    for record in records {
        writer
            .write_record([record.label.as_str(), format_value(record.value).as_str()])
            .map_err(|e| SeriesError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SeriesError::Io(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SeriesError::Csv(e.to_string()))
}

/// Whole amounts are written without a fractional part.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Read records from CSV with a header row.
///
/// The label is taken from the first column. The value comes from `column`
/// (header name or index) or, when absent, the first column after the label
/// whose first row parses as a number. Single-column files get generated
/// labels `P1`, `P2`, ...
pub fn read_csv<R: Read>(reader: R, column: Option<&str>) -> Result<Vec<SalesRecord>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| SeriesError::Csv(e.to_string()))?
        .clone();

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| SeriesError::Csv(e.to_string()))?;

    let first = rows.first().ok_or(SeriesError::NoData)?;
    let value_idx = match column {
        Some(col) => headers
            .iter()
            .position(|h| h.trim() == col)
            .or_else(|| col.parse::<usize>().ok())
            .ok_or_else(|| SeriesError::Csv(format!("Column '{}' not found", col)))?,
        None => find_value_column(first)?,
    };

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let field = row
            .get(value_idx)
            .ok_or_else(|| SeriesError::Csv(format!("row {} has no column {}", i + 1, value_idx)))?;
        let value = field.trim().parse::<f64>().map_err(|_| {
            SeriesError::InvalidSample(format!("row {}: '{}' is not a number", i + 1, field))
        })?;
        let label = if value_idx == 0 {
            format!("P{}", i + 1)
        } else {
            row.get(0).unwrap_or_default().trim().to_string()
        };
        records.push(SalesRecord::new(label, value));
    }

    Ok(records)
}

fn find_value_column(row: &csv::StringRecord) -> Result<usize> {
    if row.len() == 1 {
        return row
            .get(0)
            .filter(|f| f.trim().parse::<f64>().is_ok())
            .map(|_| 0)
            .ok_or(SeriesError::NoData);
    }
    row.iter()
        .enumerate()
        .skip(1)
        .find(|(_, f)| f.trim().parse::<f64>().is_ok())
        .map(|(i, _)| i)
        .ok_or(SeriesError::NoData)
}

#[derive(Debug, Deserialize)]
struct JsonRow {
    #[serde(alias = "month", alias = "Month", alias = "period")]
    label: String,
    #[serde(alias = "sales", alias = "Sales", alias = "amount")]
    value: f64,
}

/// Read records from a JSON array of `{label, value}` (or `{month, sales}`) objects.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<SalesRecord>> {
    let rows: Vec<JsonRow> =
        serde_json::from_reader(reader).map_err(|e| SeriesError::Json(e.to_string()))?;
    if rows.is_empty() {
        return Err(SeriesError::NoData);
    }
    Ok(rows
        .into_iter()
        .map(|r| SalesRecord::new(r.label, r.value))
        .collect())
}

/// Load records from a file, choosing the format from its extension.
pub fn load_file(path: &Path, column: Option<&str>) -> Result<Vec<SalesRecord>> {
    let open = || {
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| SeriesError::Io(format!("{}: {}", path.display(), e)))
    };

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "json" => read_json(open()?),
        "csv" => read_csv(open()?, column),
        _ => read_csv(open()?, column).or_else(|_| read_json(open()?)),
    }
}
