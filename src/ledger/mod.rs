//! Expense records, month keys, and the balance engine built on them.

pub mod balance;
pub mod book;
pub mod expense;
pub mod month;
pub mod recurrence;

pub use balance::{
    compute_balance, generate_projection, MonthlyBalance, ProjectionPoint, SettlementDirection,
};
pub use book::ExpenseBook;
pub use expense::{Category, Expense, ExpenseDraft, Frequency, Payer};
pub use month::MonthKey;
pub use recurrence::is_active_in_month;
