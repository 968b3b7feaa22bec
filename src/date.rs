use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Length of the `MMDDYYYY` wire form
const DATE_LEN: usize = 8;

/// Calendar date of a contribution, without a time component
///
/// Parsed from and rendered as `MMDDYYYY`.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionDate(NaiveDate);

/// Why a `MMDDYYYY` string is not a transaction date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Not eight ASCII digits
    #[error("expected 8 digits in MMDDYYYY form, got `{0}`")]
    Format(String),
    /// Eight digits, but no such day
    #[error("`{0}` is not a calendar date")]
    NotACalendarDate(String),
}

impl TransactionDate {
    /// Builds a date from its parts, rejecting anything that would roll over
    pub fn from_mdy(month: u32, day: u32, year: i32) -> Option<Self> {
        if !(1..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The underlying calendar date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for TransactionDate {
    type Err = DateError;

    /// Strict `MMDDYYYY` parse: exactly eight ASCII digits naming a real day
    ///
    /// Rollovers are rejected, so `02301999` fails rather than becoming March 2nd.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DATE_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::Format(s.to_owned()));
        }

        // All ASCII digits, so these slices and parses cannot fail
        let month: u32 = s[0..2].parse().map_err(|_| DateError::Format(s.to_owned()))?;
        let day: u32 = s[2..4].parse().map_err(|_| DateError::Format(s.to_owned()))?;
        let year: i32 = s[4..8].parse().map_err(|_| DateError::Format(s.to_owned()))?;

        Self::from_mdy(month, day, year).ok_or_else(|| DateError::NotACalendarDate(s.to_owned()))
    }
}

impl fmt::Display for TransactionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:04}",
            self.0.month(),
            self.0.day(),
            self.0.year()
        )
    }
}

impl From<TransactionDate> for NaiveDate {
    fn from(value: TransactionDate) -> Self {
        value.0
    }
}
