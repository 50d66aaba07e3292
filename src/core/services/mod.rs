pub mod expense_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use summary_service::{SettlementStatement, SummaryService};

use crate::errors::{LedgerError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Expense not found: {0}")]
    NotFound(String),
}
