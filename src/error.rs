use thiserror::Error;

/// Errors raised while loading the dataset or running an analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("Dataset is missing the '{0}' column")]
    MissingColumn(String),

    #[error("Row {row}, '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}, '{column}': '{value}' is not a boolean")]
    InvalidBool {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}, '{column}': '{value}' is not a valid date")]
    InvalidDate {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Cannot compute {statistic} over an empty set of records")]
    EmptyInput { statistic: &'static str },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
