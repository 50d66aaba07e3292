//! Upgrades expense records written by older versions of the app.
//!
//! Older records may lack `category` and `ownershipPercentage`; the very first
//! schema expressed the split through a `splitType` flag instead. Missing
//! ownership falls back to an even split unless that flag says otherwise. That
//! fallback is a best-effort guess at what the record meant, not a rule derived
//! from the data.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::services::ExpenseService;
use crate::errors::{LedgerResult, ValidationError};
use crate::ledger::{Category, Expense, ExpenseBook, Frequency, Payer};

const DEFAULT_OWNERSHIP: u8 = 50;

/// Any historical shape of a stored expense.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyExpense {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub amount: f64,
    pub date: String,
    pub payer: Payer,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub ownership_percentage: Option<f64>,
    #[serde(default)]
    pub split_type: Option<String>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub installments_count: Option<u32>,
}

/// Outcome of importing a batch of stored records.
#[derive(Debug, Clone, Default)]
pub struct MigrationReport {
    pub expenses: Vec<Expense>,
    /// Defaults applied to records that were kept.
    pub migrations: Vec<String>,
    /// Records that were dropped, with the reason.
    pub warnings: Vec<String>,
}

impl MigrationReport {
    pub fn into_book(self) -> ExpenseBook {
        ExpenseBook::from(self.expenses)
    }
}

/// Brings one legacy record to the current schema.
///
/// Returns the upgraded expense and a note for every default that was applied.
pub fn migrate_expense(legacy: LegacyExpense) -> Result<(Expense, Vec<String>), ValidationError> {
    let mut notes = Vec::new();
    let id = match legacy.id {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            let id = Uuid::new_v4().to_string();
            notes.push(format!("{id}: assigned a new id"));
            id
        }
    };

    let category = legacy.category.unwrap_or_else(|| {
        notes.push(format!("{id}: category defaulted to OTHER"));
        Category::Other
    });

    let ownership_percentage = match legacy.ownership_percentage {
        Some(value) => {
            let rounded = value.round();
            if rounded != value {
                notes.push(format!("{id}: ownership {value} rounded to {rounded}"));
            }
            if !(0.0..=100.0).contains(&rounded) {
                return Err(ValidationError::OwnershipOutOfRange(rounded as i64));
            }
            rounded as u8
        }
        None => {
            let percentage = match legacy.split_type.as_deref() {
                Some("ME_ONLY") => 100,
                Some("PARTNER_ONLY") => 0,
                _ => DEFAULT_OWNERSHIP,
            };
            notes.push(format!("{id}: ownership set to {percentage}% from legacy split"));
            percentage
        }
    };

    let frequency = legacy.frequency.unwrap_or_else(|| {
        notes.push(format!("{id}: missing frequency, record will never be active"));
        Frequency::Unknown
    });

    let expense = Expense {
        id,
        title: legacy.title,
        amount: legacy.amount,
        date: parse_anchor_date(&legacy.date)?,
        payer: legacy.payer,
        category,
        ownership_percentage,
        frequency,
        installments_count: legacy.installments_count,
    };
    Ok((expense, notes))
}

/// Reads the calendar date of a stored date string, ignoring any time suffix.
pub fn parse_anchor_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    let ymd = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(ymd, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// Parses a JSON array of stored records and upgrades each one.
///
/// Records that can not be read or fail validation are skipped and listed in
/// [`MigrationReport::warnings`]; only a malformed outer document is an error.
pub fn import_legacy_json(json: &str) -> LedgerResult<MigrationReport> {
    let raw_records: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut report = MigrationReport::default();

    for (idx, raw) in raw_records.into_iter().enumerate() {
        let legacy: LegacyExpense = match serde_json::from_value(raw) {
            Ok(legacy) => legacy,
            Err(err) => {
                warn!(record = idx, error = %err, "unreadable expense record skipped");
                report.warnings.push(format!("record {idx}: {err}"));
                continue;
            }
        };
        let checked = migrate_expense(legacy).and_then(|(expense, notes)| {
            ExpenseService::validate_record(&expense)?;
            Ok((expense, notes))
        });
        match checked {
            Ok((expense, notes)) => {
                report.migrations.extend(notes);
                report.expenses.push(expense);
            }
            Err(err) => {
                warn!(record = idx, error = %err, "invalid expense record skipped");
                report.warnings.push(format!("record {idx}: {err}"));
            }
        }
    }

    info!(
        imported = report.expenses.len(),
        migrated = report.migrations.len(),
        skipped = report.warnings.len(),
        "expense import finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(json: &str) -> LegacyExpense {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn current_records_pass_through_untouched() {
        let (expense, notes) = migrate_expense(legacy(
            r#"{"id":"1","title":"Rent","amount":2500,"date":"2023-10-01","payer":"ME",
                "category":"HOME","frequency":"MONTHLY","ownershipPercentage":50}"#,
        ))
        .unwrap();
        assert!(notes.is_empty(), "{notes:?}");
        assert_eq!(expense.id, "1");
        assert_eq!(expense.payer, Payer::First);
        assert_eq!(expense.ownership_percentage, 50);
        assert_eq!(expense.category, Category::Home);
    }

    #[test]
    fn split_flag_drives_missing_ownership() {
        let base = |split: &str| {
            format!(
                r#"{{"id":"a","title":"x","amount":10,"date":"2024-01-01","payer":"PARTNER",
                    "frequency":"ONE_TIME","splitType":"{split}"}}"#
            )
        };
        let pct = |split: &str| migrate_expense(legacy(&base(split))).unwrap().0.ownership_percentage;
        assert_eq!(pct("ME_ONLY"), 100);
        assert_eq!(pct("PARTNER_ONLY"), 0);
        assert_eq!(pct("EQUAL"), 50);
    }

    #[test]
    fn missing_category_defaults_to_other() {
        let (expense, notes) = migrate_expense(legacy(
            r#"{"id":"b","title":"x","amount":10,"date":"2024-01-01","payer":"FIRST",
                "frequency":"ONE_TIME","ownershipPercentage":30}"#,
        ))
        .unwrap();
        assert_eq!(expense.category, Category::Other);
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn date_time_suffix_is_ignored() {
        let date = parse_anchor_date("2023-12-01T02:00:00.000Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert!(matches!(
            parse_anchor_date("01/12/2023"),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn out_of_range_ownership_is_rejected() {
        let err = migrate_expense(legacy(
            r#"{"id":"c","title":"x","amount":10,"date":"2024-01-01","payer":"FIRST",
                "frequency":"ONE_TIME","ownershipPercentage":120}"#,
        ))
        .unwrap_err();
        assert_eq!(err, ValidationError::OwnershipOutOfRange(120));
    }
}
