use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid month `{0}`, expected YYYY-MM")]
    InvalidMonth(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reasons an expense is refused at the point of entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("expense title must not be empty")]
    EmptyTitle,
    #[error("amount must be a finite, non-negative number (got {0})")]
    InvalidAmount(f64),
    #[error("ownership percentage must be between 0 and 100 (got {0})")]
    OwnershipOutOfRange(i64),
    #[error("installment expenses need a positive installment count")]
    MissingInstallments,
    #[error("expense has no recognised frequency")]
    UnknownFrequency,
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}
