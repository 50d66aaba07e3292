//! Month balances, fair shares and the settlement between the two participants.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    expense::{Expense, Payer},
    month::MonthKey,
    recurrence::is_active_in_month,
};

/// Settlements smaller than half a cent are reported as settled.
const SETTLED_TOLERANCE: f64 = 0.005;

/// Totals for one month, derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBalance {
    pub month: MonthKey,
    pub total_expenses: f64,
    pub paid_by_first: f64,
    pub paid_by_second: f64,
    pub first_fair_share: f64,
    pub second_fair_share: f64,
    /// `paid_by_first - first_fair_share`. Positive: second owes first.
    pub settlement: f64,
    /// Expenses active in the month, in collection order.
    pub items: Vec<Expense>,
}

/// Who owes whom once a month is closed out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettlementDirection {
    SecondOwesFirst(f64),
    FirstOwesSecond(f64),
    Settled,
}

impl SettlementDirection {
    pub fn amount(&self) -> f64 {
        match self {
            SettlementDirection::SecondOwesFirst(amount)
            | SettlementDirection::FirstOwesSecond(amount) => *amount,
            SettlementDirection::Settled => 0.0,
        }
    }

    /// Participant who has to pay, if anyone.
    pub fn debtor(&self) -> Option<Payer> {
        match self {
            SettlementDirection::SecondOwesFirst(_) => Some(Payer::Second),
            SettlementDirection::FirstOwesSecond(_) => Some(Payer::First),
            SettlementDirection::Settled => None,
        }
    }
}

impl MonthlyBalance {
    fn empty(month: MonthKey) -> Self {
        Self {
            month,
            total_expenses: 0.0,
            paid_by_first: 0.0,
            paid_by_second: 0.0,
            first_fair_share: 0.0,
            second_fair_share: 0.0,
            settlement: 0.0,
            items: Vec::new(),
        }
    }

    fn accumulate(&mut self, expense: &Expense) {
        self.total_expenses += expense.amount;
        match expense.payer {
            Payer::First => self.paid_by_first += expense.amount,
            Payer::Second => self.paid_by_second += expense.amount,
        }
        let first_share = expense.first_share();
        self.first_fair_share += first_share;
        self.second_fair_share += expense.amount - first_share;
    }

    pub fn paid_by(&self, participant: Payer) -> f64 {
        match participant {
            Payer::First => self.paid_by_first,
            Payer::Second => self.paid_by_second,
        }
    }

    pub fn fair_share(&self, participant: Payer) -> f64 {
        match participant {
            Payer::First => self.first_fair_share,
            Payer::Second => self.second_fair_share,
        }
    }

    pub fn direction(&self) -> SettlementDirection {
        if self.settlement.abs() < SETTLED_TOLERANCE {
            SettlementDirection::Settled
        } else if self.settlement > 0.0 {
            SettlementDirection::SecondOwesFirst(self.settlement)
        } else {
            SettlementDirection::FirstOwesSecond(-self.settlement)
        }
    }
}

/// Computes the balance of `month` over the whole collection.
///
/// Records are expected to be validated already; summation follows the input order.
pub fn compute_balance(expenses: &[Expense], month: MonthKey) -> MonthlyBalance {
    let mut balance = MonthlyBalance::empty(month);
    for expense in expenses.iter().filter(|e| is_active_in_month(e, month)) {
        balance.accumulate(expense);
        balance.items.push(expense.clone());
    }
    balance.settlement = balance.paid_by_first - balance.first_fair_share;
    debug!(
        month = %month,
        active = balance.items.len(),
        total = balance.total_expenses,
        settlement = balance.settlement,
        "computed monthly balance"
    );
    balance
}

/// One month of a spending projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub month: MonthKey,
    pub label: String,
    /// First participant's fair share for the month.
    pub first_spend: f64,
    /// Second participant's fair share for the month.
    pub second_spend: f64,
    pub total: f64,
}

impl From<&MonthlyBalance> for ProjectionPoint {
    fn from(balance: &MonthlyBalance) -> Self {
        Self {
            month: balance.month,
            label: balance.month.label(),
            first_spend: balance.first_fair_share,
            second_spend: balance.second_fair_share,
            total: balance.total_expenses,
        }
    }
}

/// Projects `horizon` consecutive months starting at `start`.
///
/// Each month is an independent [`compute_balance`] over the full collection.
pub fn generate_projection(
    expenses: &[Expense],
    start: MonthKey,
    horizon: usize,
) -> Vec<ProjectionPoint> {
    debug!(start = %start, horizon, "generating projection");
    (0..horizon)
        .map(|offset| {
            let offset = i32::try_from(offset).unwrap_or(i32::MAX);
            let balance = compute_balance(expenses, start.add_months(offset));
            ProjectionPoint::from(&balance)
        })
        .collect()
}
