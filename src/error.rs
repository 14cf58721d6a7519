use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfiguratorError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Payment error: {0}")]
    PaymentError(String),
}

pub type Result<T> = std::result::Result<T, ConfiguratorError>;
