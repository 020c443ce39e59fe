use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LinkerError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read CSV: {0}")]
    CsvRead(String),

    #[error("Failed to write CSV: {0}")]
    CsvWrite(String),

    #[error("Column not found in header row: {0}")]
    MissingColumn(String),

    #[error("File write error: {0}")]
    FileWriteError(String),
}

pub type Result<T> = std::result::Result<T, LinkerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let error = LinkerError::FileNotFound(PathBuf::from("/test/tiles.csv"));
        let msg = format!("{}", error);
        assert!(msg.contains("File not found"));
        assert!(msg.contains("tiles.csv"));
    }

    #[test]
    fn test_csv_read_display() {
        let error = LinkerError::CsvRead("unexpected end of record".to_string());
        assert_eq!(
            format!("{}", error),
            "Failed to read CSV: unexpected end of record"
        );
    }

    #[test]
    fn test_missing_column_display() {
        let error = LinkerError::MissingColumn("Top".to_string());
        assert_eq!(format!("{}", error), "Column not found in header row: Top");
    }

    #[test]
    fn test_error_is_cloneable() {
        let error = LinkerError::CsvWrite("disk full".to_string());
        let cloned = error.clone();
        assert_eq!(format!("{}", error), format!("{}", cloned));
    }

    #[test]
    fn test_result_type_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }
}
