use thiserror::Error;

/// Failures reported by registry operations.
///
/// Both variants are recoverable: the console prints them and keeps going.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RegistryError {
    #[error("Apartment not found: {0}")]
    NotFound(String),
    #[error("Rent for Apartment {0} is not paid. Please pay the rent first.")]
    RentNotPaid(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Seed error on line {line}: {reason}")]
    Seed { line: u64, reason: String },
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
