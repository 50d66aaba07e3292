#![allow(dead_code)]

use chrono::NaiveDate;
use duo_split::ledger::{Expense, ExpenseDraft, Frequency, MonthKey, Payer};

pub const EPSILON: f64 = 1e-6;

pub fn month(raw: &str) -> MonthKey {
    raw.parse().expect("valid month key")
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("valid date")
}

pub fn expense(
    id: &str,
    amount: f64,
    on: &str,
    payer: Payer,
    first_pct: u8,
    frequency: Frequency,
) -> Expense {
    let draft = ExpenseDraft::new(id, amount, date(on), payer).frequency(frequency);
    Expense::with_id(id, draft, first_pct)
}

pub fn installments(id: &str, amount: f64, on: &str, count: u32, first_pct: u8) -> Expense {
    let draft = ExpenseDraft::new(id, amount, date(on), Payer::First).installments(count);
    Expense::with_id(id, draft, first_pct)
}

pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < EPSILON
}

/// Deterministic mixed collection covering every payer, policy and a spread of splits.
pub fn mixed_collection(size: usize) -> Vec<Expense> {
    let policies = [
        Frequency::OneTime,
        Frequency::Monthly,
        Frequency::Installments,
        Frequency::Unknown,
    ];
    (0..size)
        .map(|idx| {
            let frequency = policies[idx % policies.len()];
            let payer = if idx % 3 == 0 { Payer::Second } else { Payer::First };
            let on = date("2023-01-15") + chrono::Months::new((idx % 24) as u32);
            let draft = ExpenseDraft::new(
                format!("expense {idx}"),
                12.34 * (idx % 17 + 1) as f64,
                on,
                payer,
            )
            .frequency(frequency);
            let mut expense = Expense::with_id(format!("e{idx}"), draft, ((idx * 7) % 101) as u8);
            if frequency == Frequency::Installments {
                expense.installments_count = Some((idx % 5 + 1) as u32);
            }
            expense
        })
        .collect()
}
