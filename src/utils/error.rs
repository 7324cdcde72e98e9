use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Stored card lists are unusable: {message}")]
    SnapshotError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("No card list at index {index} (have {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Data,
    Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SortError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SortError::ConfigValidationError { .. } | SortError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SortError::IoError(_) | SortError::StorageError { .. } | SortError::ZipError(_) => {
                ErrorCategory::Storage
            }
            SortError::CsvError(_)
            | SortError::SerializationError(_)
            | SortError::SnapshotError { .. }
            | SortError::ProcessingError { .. } => ErrorCategory::Data,
            SortError::IndexOutOfBounds { .. } => ErrorCategory::Usage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SortError::IndexOutOfBounds { len: 0, .. } => {
                "No card lists are stored yet, add one with `singleton-sort add <FILE>`".to_string()
            }
            SortError::IndexOutOfBounds { len, .. } => {
                format!("Use an index between 0 and {} (see `singleton-sort list`)", len - 1)
            }
            SortError::SnapshotError { .. } => {
                "Run `singleton-sort clear` to reset the stored card lists".to_string()
            }
            SortError::IoError(_) | SortError::StorageError { .. } => {
                "Check that the data directory exists and is writable".to_string()
            }
            SortError::ZipError(_) => "Check that the export directory is writable".to_string(),
            SortError::ConfigValidationError { .. } | SortError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command line flags".to_string()
            }
            SortError::CsvError(_)
            | SortError::SerializationError(_)
            | SortError::ProcessingError { .. } => {
                "Try a different output format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SortError::IndexOutOfBounds { index, .. } => {
                format!("There is no card list number {}", index)
            }
            SortError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SortError::IoError(e) => format!("Could not access a file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
