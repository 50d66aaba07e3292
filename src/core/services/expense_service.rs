//! Business logic helpers for managing shared expenses.

use tracing::debug;

use crate::core::services::{ServiceError, ServiceResult};
use crate::errors::ValidationError;
use crate::ledger::{Expense, ExpenseBook, ExpenseDraft, Frequency};

/// Provides validated create/edit/delete helpers for an expense book.
///
/// This is the ingestion boundary: nothing reaches the balance engine without
/// passing through [`ExpenseService::validate_draft`] or
/// [`ExpenseService::validate_record`].
pub struct ExpenseService;

impl ExpenseService {
    /// Validates a draft and appends the resulting expense, returning its id.
    pub fn add(book: &mut ExpenseBook, draft: ExpenseDraft) -> ServiceResult<String> {
        let (draft, percentage) = Self::validate_draft(draft)?;
        let id = book.push(Expense::new(draft, percentage));
        debug!(expense = %id, "expense added");
        Ok(id)
    }

    /// Replaces the whole record identified by `id`, keeping its id and position.
    pub fn update(book: &mut ExpenseBook, id: &str, draft: ExpenseDraft) -> ServiceResult<()> {
        if book.get(id).is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        let (draft, percentage) = Self::validate_draft(draft)?;
        book.replace(id, Expense::with_id(id, draft, percentage))
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
        debug!(expense = %id, "expense replaced");
        Ok(())
    }

    /// Removes the expense identified by `id`, returning the removed record.
    pub fn remove(book: &mut ExpenseBook, id: &str) -> ServiceResult<Expense> {
        let removed = book
            .remove(id)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))?;
        debug!(expense = %id, "expense removed");
        Ok(removed)
    }

    /// Checks a draft for entry and normalises it.
    ///
    /// Returns the draft with a trimmed title, the installment count cleared for
    /// non-installment policies, and the ownership percentage narrowed to `u8`.
    pub fn validate_draft(mut draft: ExpenseDraft) -> Result<(ExpenseDraft, u8), ValidationError> {
        if draft.frequency == Frequency::Unknown {
            return Err(ValidationError::UnknownFrequency);
        }
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        draft.title = title.to_string();
        check_amount(draft.amount)?;
        let percentage = check_percentage(draft.ownership_percentage)?;
        match draft.frequency {
            Frequency::Installments => {
                check_installments(draft.installments_count)?;
            }
            _ => draft.installments_count = None,
        }
        Ok((draft, percentage))
    }

    /// Checks a stored record. Unknown policies pass, since the engine skips them.
    pub fn validate_record(expense: &Expense) -> Result<(), ValidationError> {
        if expense.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        check_amount(expense.amount)?;
        check_percentage(i64::from(expense.ownership_percentage))?;
        if expense.frequency == Frequency::Installments {
            check_installments(expense.installments_count)?;
        }
        Ok(())
    }
}

fn check_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount(amount))
    }
}

fn check_percentage(percentage: i64) -> Result<u8, ValidationError> {
    u8::try_from(percentage)
        .ok()
        .filter(|value| *value <= 100)
        .ok_or(ValidationError::OwnershipOutOfRange(percentage))
}

fn check_installments(count: Option<u32>) -> Result<(), ValidationError> {
    match count {
        Some(count) if count > 0 => Ok(()),
        _ => Err(ValidationError::MissingInstallments),
    }
}
