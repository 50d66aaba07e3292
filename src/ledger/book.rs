use serde::{Deserialize, Serialize};

use super::expense::Expense;

/// In-memory, insertion-ordered collection of expenses.
///
/// Serializes as a plain JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseBook {
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn push(&mut self, expense: Expense) -> String {
        let id = expense.id.clone();
        self.expenses.push(expense);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// Swaps in a whole new record at the position of `id`, returning the old one.
    pub fn replace(&mut self, id: &str, mut replacement: Expense) -> Option<Expense> {
        let slot = self.expenses.iter_mut().find(|expense| expense.id == id)?;
        replacement.id = slot.id.clone();
        Some(std::mem::replace(slot, replacement))
    }

    pub fn remove(&mut self, id: &str) -> Option<Expense> {
        let idx = self.expenses.iter().position(|expense| expense.id == id)?;
        Some(self.expenses.remove(idx))
    }

    /// Stable snapshot handed to the balance engine.
    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl From<Vec<Expense>> for ExpenseBook {
    fn from(expenses: Vec<Expense>) -> Self {
        Self::from_expenses(expenses)
    }
}
