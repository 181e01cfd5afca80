//! File service for loading and exporting sales tables.

use std::path::Path;

use forecast_facade::{load_file, SalesRecord, SeriesError};

/// Error type for file operations.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to write file: {0}")]
    WriteError(String),

    #[error(transparent)]
    Parse(#[from] SeriesError),
}

/// Load a CSV or JSON sales table.
pub fn load_sales_file(path: &Path) -> Result<Vec<SalesRecord>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    Ok(load_file(path, None)?)
}

/// Write exported CSV text.
pub fn save_csv(path: &Path, csv: &str) -> Result<(), LoadError> {
    std::fs::write(path, csv).map_err(|e| LoadError::WriteError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file() {
        let err = load_sales_file(Path::new("/no/such/sales.csv")).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_load_json_table() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"Month": "Jan", "Sales": 10}}, {{"Month": "Feb", "Sales": 20}}]"#)
            .unwrap();
        let records = load_sales_file(file.path()).unwrap();
        assert_eq!(records, vec![SalesRecord::new("Jan", 10.0), SalesRecord::new("Feb", 20.0)]);
    }

    #[test]
    fn test_save_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        save_csv(&path, "Month,Sales\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Month,Sales\n");
    }
}
