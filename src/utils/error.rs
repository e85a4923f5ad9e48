use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportCardError {
    #[error("Unknown subject code: {code}")]
    UnknownSubject { code: String },

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
}

impl ReportCardError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportCardError::UnknownSubject { code } => {
                format!("'{}' is not a known subject", code)
            }
            ReportCardError::IoError(e) => format!("Could not read input: {}", e),
            ReportCardError::SerializationError(e) => format!("Could not render output: {}", e),
            ReportCardError::ConfigValidationError { field, message } => {
                format!("Report card file is invalid ({}): {}", field, message)
            }
            ReportCardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Report card file has a bad value for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportCardError::UnknownSubject { .. } => "Use one of the subject codes PHY, CHEM, MATH or CS",
            ReportCardError::IoError(_) => "Check that the file exists and is readable",
            ReportCardError::SerializationError(_) => "Try the text output format instead",
            ReportCardError::ConfigValidationError { .. }
            | ReportCardError::InvalidConfigValueError { .. } => {
                "Fix the report card file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportCardError>;
