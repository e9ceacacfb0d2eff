use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input has no header line")]
    MissingHeader,

    #[error("Row {line} has {found} fields, header declares {expected}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Record is missing field '{field}'")]
    MissingField { field: String },

    #[error("Row {row}: price '{value}' is not a number")]
    InvalidPrice { row: usize, value: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) | EtlError::CsvError(_) => ErrorCategory::Input,
            EtlError::MissingHeader
            | EtlError::MalformedRow { .. }
            | EtlError::MissingField { .. }
            | EtlError::InvalidPrice { .. } => ErrorCategory::Data,
            EtlError::SerializationError(_) => ErrorCategory::Output,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Input | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::IoError(_) => "Check that the file exists and the path is readable/writable",
            EtlError::CsvError(_) => "Make sure the input is a comma-delimited file with a header row",
            EtlError::MissingHeader => "The first line of the input must name the columns",
            EtlError::MalformedRow { .. } => {
                "Fix the row so it has as many fields as the header, and remove blank lines"
            }
            EtlError::MissingField { .. } => {
                "The input needs neighbourhood_group, room_type and price columns"
            }
            EtlError::InvalidPrice { .. } => "Prices must be plain decimal numbers without currency symbols",
            EtlError::SerializationError(_) => "Check the JSON output path",
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => "Review the configuration values and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::Data => format!("Input data is invalid: {}", self),
            ErrorCategory::Output => format!("Could not write summary: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
