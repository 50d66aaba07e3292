use std::fmt;

use crate::config::{Config, ParticipantNames};
use crate::core::time::Clock;
use crate::ledger::{
    compute_balance, generate_projection, ExpenseBook, MonthKey, MonthlyBalance, ProjectionPoint,
};

/// Settlement resolved to display names, ready for a summary or share text.
#[derive(Debug, Clone, PartialEq)]
pub enum SettlementStatement {
    Owes {
        debtor: String,
        creditor: String,
        amount: f64,
    },
    Settled,
}

impl fmt::Display for SettlementStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlementStatement::Owes {
                debtor,
                creditor,
                amount,
            } => write!(f, "{debtor} owes {creditor} {amount:.2}"),
            SettlementStatement::Settled => f.write_str("All settled"),
        }
    }
}

pub struct SummaryService;

impl SummaryService {
    pub fn month_balance(book: &ExpenseBook, month: MonthKey) -> MonthlyBalance {
        compute_balance(book.as_slice(), month)
    }

    pub fn current_balance(book: &ExpenseBook, clock: &dyn Clock) -> MonthlyBalance {
        Self::month_balance(book, MonthKey::current(clock))
    }

    /// Projection over the configured number of months, starting at `start`.
    pub fn projection(book: &ExpenseBook, start: MonthKey, config: &Config) -> Vec<ProjectionPoint> {
        generate_projection(book.as_slice(), start, config.projection_months)
    }

    pub fn settlement_statement(
        balance: &MonthlyBalance,
        names: &ParticipantNames,
    ) -> SettlementStatement {
        let direction = balance.direction();
        match direction.debtor() {
            Some(debtor) => SettlementStatement::Owes {
                debtor: names.name_for(debtor).to_string(),
                creditor: names.name_for(debtor.other()).to_string(),
                amount: direction.amount(),
            },
            None => SettlementStatement::Settled,
        }
    }
}
