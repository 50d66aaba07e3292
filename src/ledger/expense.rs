use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::month::MonthKey;

/// One of the two people sharing expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Payer {
    #[serde(rename = "FIRST", alias = "ME")]
    First,
    #[serde(rename = "SECOND", alias = "PARTNER")]
    Second,
}

impl Payer {
    pub fn other(self) -> Payer {
        match self {
            Payer::First => Payer::Second,
            Payer::Second => Payer::First,
        }
    }
}

/// Cosmetic grouping shown next to an expense. Never used in settlement math.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Home,
    Food,
    Transport,
    Leisure,
    Health,
    #[default]
    #[serde(other)]
    Other,
}

/// Recurrence policy of an expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    /// Applies to the anchor month only.
    OneTime,
    /// Applies to the anchor month and every month after it.
    Monthly,
    /// Applies to `installments_count` consecutive months from the anchor.
    Installments,
    /// Policy written by a newer or older schema; never active.
    #[serde(other)]
    Unknown,
}

/// A shared expense as stored in the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payer: Payer,
    #[serde(default)]
    pub category: Category,
    /// Share of the amount owed by the first participant, 0..=100.
    pub ownership_percentage: u8,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments_count: Option<u32>,
}

impl Expense {
    /// Builds a record from already validated parts, assigning a fresh id.
    pub fn new(draft: ExpenseDraft, ownership_percentage: u8) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft, ownership_percentage)
    }

    pub fn with_id(id: impl Into<String>, draft: ExpenseDraft, ownership_percentage: u8) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            amount: draft.amount,
            date: draft.date,
            payer: draft.payer,
            category: draft.category,
            ownership_percentage,
            frequency: draft.frequency,
            installments_count: draft.installments_count,
        }
    }

    /// Month in which the expense starts applying.
    pub fn anchor_month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    pub fn first_share(&self) -> f64 {
        self.amount * f64::from(self.ownership_percentage) / 100.0
    }

    pub fn second_share(&self) -> f64 {
        self.amount - self.first_share()
    }

    pub fn share_of(&self, participant: Payer) -> f64 {
        match participant {
            Payer::First => self.first_share(),
            Payer::Second => self.second_share(),
        }
    }
}

/// Form input for creating or replacing an expense, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub payer: Payer,
    #[serde(default)]
    pub category: Category,
    pub ownership_percentage: i64,
    pub frequency: Frequency,
    #[serde(default)]
    pub installments_count: Option<u32>,
}

impl ExpenseDraft {
    /// An even split of a one-time expense; adjust the remaining fields with the builders.
    pub fn new(title: impl Into<String>, amount: f64, date: NaiveDate, payer: Payer) -> Self {
        Self {
            title: title.into(),
            amount,
            date,
            payer,
            category: Category::Other,
            ownership_percentage: 50,
            frequency: Frequency::OneTime,
            installments_count: None,
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn ownership(mut self, first_percentage: i64) -> Self {
        self.ownership_percentage = first_percentage;
        self
    }

    pub fn monthly(mut self) -> Self {
        self.frequency = Frequency::Monthly;
        self.installments_count = None;
        self
    }

    pub fn installments(mut self, count: u32) -> Self {
        self.frequency = Frequency::Installments;
        self.installments_count = Some(count);
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            amount: expense.amount,
            date: expense.date,
            payer: expense.payer,
            category: expense.category,
            ownership_percentage: i64::from(expense.ownership_percentage),
            frequency: expense.frequency,
            installments_count: expense.installments_count,
        }
    }
}
