use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    core::time::Clock,
    errors::{LedgerError, LedgerResult},
};

/// A calendar month with the day stripped away.
///
/// Every recurrence comparison runs on this value, never on timestamps, so an
/// expense can not drift into a neighbouring month because of a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Accepts months 1..=12 of any year a [`NaiveDate`] can hold.
    pub fn new(year: i32, month: u32) -> LedgerResult<Self> {
        let years = NaiveDate::MIN.year()..=NaiveDate::MAX.year();
        if !(1..=12).contains(&month) || !years.contains(&year) {
            return Err(LedgerError::InvalidMonth(format!("{year}-{month}")));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month containing the clock's current date.
    pub fn current(clock: &dyn Clock) -> Self {
        Self::from_date(clock.today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Shifts by a signed number of months, carrying across year boundaries.
    ///
    /// Saturates at the first and last month a [`NaiveDate`] can hold.
    pub fn add_months(self, months: i32) -> Self {
        let lowest = Self::from_date(NaiveDate::MIN).index();
        let highest = Self::from_date(NaiveDate::MAX).index();
        Self::from_index(self.index().saturating_add(months).clamp(lowest, highest))
    }

    /// Signed distance in months from `earlier` to `self`.
    pub fn months_since(self, earlier: MonthKey) -> i32 {
        self.index() - earlier.index()
    }

    pub fn first_day(self) -> NaiveDate {
        // year and month stay within the NaiveDate range in every constructor
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Short label used on projection charts, e.g. `Oct 23`.
    pub fn label(self) -> String {
        self.first_day().format("%b %y").to_string()
    }

    fn index(self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }

    fn from_index(index: i32) -> Self {
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidMonth(raw.to_string());
        let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(year, 4) || !digits(month, 2) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MonthKey {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}
