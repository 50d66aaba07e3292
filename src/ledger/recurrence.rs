//! Decides which expenses contribute to a given month.

use tracing::debug;

use super::{
    expense::{Expense, Frequency},
    month::MonthKey,
};

/// Returns whether `expense` applies to `target` under its recurrence policy.
///
/// Comparisons happen on [`MonthKey`] values only. Unknown policies and
/// installment records without a usable count are inactive rather than errors.
pub fn is_active_in_month(expense: &Expense, target: MonthKey) -> bool {
    let anchor = expense.anchor_month();
    match expense.frequency {
        Frequency::OneTime => target == anchor,
        Frequency::Monthly => target >= anchor,
        Frequency::Installments => match expense.installments_count {
            Some(count) if count > 0 => {
                let elapsed = target.months_since(anchor);
                elapsed >= 0 && i64::from(elapsed) < i64::from(count)
            }
            _ => {
                debug!(expense = %expense.id, "installment expense without a count, skipping");
                false
            }
        },
        Frequency::Unknown => {
            debug!(expense = %expense.id, "unknown recurrence policy, skipping");
            false
        }
    }
}
