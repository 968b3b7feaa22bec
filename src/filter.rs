//! Eligibility rules for raw contribution records
//!
//! A record is one `|`-delimited line in the FEC individual contributions layout.
//! Only five fields matter here, picked out by position.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::date::{DateError, TransactionDate};

/// Field delimiter of the input records
pub const FIELD_DELIMITER: char = '|';

/// `CMTE_ID`: the recipient of the contribution
pub const RECIPIENT_FIELD: usize = 0;
/// `ZIP_CODE` of the contributor
pub const ZIP_FIELD: usize = 10;
/// `TRANSACTION_DT`, as `MMDDYYYY`
pub const DATE_FIELD: usize = 13;
/// `TRANSACTION_AMT`
pub const AMOUNT_FIELD: usize = 14;
/// `OTHER_ID`: set when the contribution came through another entity
pub const OTHER_ID_FIELD: usize = 15;
/// Records with fewer fields than this are malformed
pub const MIN_FIELDS: usize = OTHER_ID_FIELD + 1;

/// Number of leading characters of the raw zip field that make up a [`ZipCode`]
pub const ZIP_LEN: usize = 5;

/// Five character zip code, cut from the front of the raw zip field
///
/// Not checked to be numeric.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Takes the first five characters of `raw`
    ///
    /// Returns `None` when `raw` is shorter than that. No padding is applied.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let zip: String = raw.chars().take(ZIP_LEN).collect();
        if zip.is_empty() || zip.chars().count() < ZIP_LEN {
            return None;
        }
        Some(Self(zip))
    }

    /// The five characters
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single accepted contribution, keyed for one of the two reports
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution<K> {
    /// Recipient id (`CMTE_ID`)
    pub recipient: String,
    /// Zip code or transaction date
    pub key: K,
    /// Transaction amount, exact
    pub amount: Decimal,
}

/// A contribution grouped by contributor zip code
pub type ZipContribution = Contribution<ZipCode>;
/// A contribution grouped by transaction date
pub type DateContribution = Contribution<TransactionDate>;

/// Why a record, or one branch of it, was left out of a report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum Rejection {
    #[error("record has {found} fields, expected at least {}", MIN_FIELDS)]
    TooFewFields { found: usize },
    #[error("contribution came through another entity (OTHER_ID set)")]
    IntermediaryEntity,
    #[error("recipient id is empty")]
    MissingRecipient,
    #[error("amount is empty")]
    MissingAmount,
    #[error("amount `{0}` is not a number")]
    InvalidAmount(String),
    #[error("zip code has fewer than {} characters", ZIP_LEN)]
    ShortZipCode,
    #[error("transaction date is empty")]
    MissingDate,
    #[error("invalid transaction date: {0}")]
    InvalidDate(#[from] DateError),
}

impl Rejection {
    /// Short stable name for counting rejections by kind
    pub fn kind(&self) -> &'static str {
        match self {
            Rejection::TooFewFields { .. } => "too_few_fields",
            Rejection::IntermediaryEntity => "intermediary_entity",
            Rejection::MissingRecipient => "missing_recipient",
            Rejection::MissingAmount => "missing_amount",
            Rejection::InvalidAmount(_) => "invalid_amount",
            Rejection::ShortZipCode => "short_zip_code",
            Rejection::MissingDate => "missing_date",
            Rejection::InvalidDate(_) => "invalid_date",
        }
    }
}

/// A record that passed the record-level rules
///
/// The zip and date branches are judged independently, so either may still be rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRecord {
    /// Contribution for the zip report, or why there is none
    pub zip: Result<ZipContribution, Rejection>,
    /// Contribution for the date report, or why there is none
    pub date: Result<DateContribution, Rejection>,
}

/// Applies the eligibility rules to one raw record
///
/// Record-level rules, in order:
/// 1. at least [`MIN_FIELDS`] fields
/// 2. `OTHER_ID` is empty
/// 3. recipient and amount are non-empty
/// 4. amount parses as a number
///
/// A failure of any of these rejects the whole record.
/// Past them, the zip branch needs a raw zip of at least five characters and
/// the date branch needs a valid `MMDDYYYY` date.
pub fn filter_record(line: &str) -> Result<FilteredRecord, Rejection> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < MIN_FIELDS {
        return Err(Rejection::TooFewFields {
            found: fields.len(),
        });
    }

    if !fields[OTHER_ID_FIELD].is_empty() {
        return Err(Rejection::IntermediaryEntity);
    }

    let recipient = fields[RECIPIENT_FIELD];
    if recipient.is_empty() {
        return Err(Rejection::MissingRecipient);
    }
    if fields[AMOUNT_FIELD].is_empty() {
        return Err(Rejection::MissingAmount);
    }
    let amount = parse_amount(fields[AMOUNT_FIELD])?;

    let zip = ZipCode::from_raw(fields[ZIP_FIELD])
        .map(|key| Contribution {
            recipient: recipient.to_owned(),
            key,
            amount,
        })
        .ok_or(Rejection::ShortZipCode);

    let date = parse_date(fields[DATE_FIELD]).map(|key| Contribution {
        recipient: recipient.to_owned(),
        key,
        amount,
    });

    Ok(FilteredRecord { zip, date })
}

/// Parses a transaction amount
///
/// Plain decimals and scientific notation are accepted, with surrounding whitespace ignored.
/// Digit separators are not. Amounts too small for 28 decimal places round toward zero;
/// amounts too large for [`Decimal`] are rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal, Rejection> {
    let invalid = || Rejection::InvalidAmount(raw.to_owned());

    let trimmed = raw.trim();
    if trimmed.contains('_') {
        return Err(invalid());
    }

    if trimmed.contains(is_exponent_marker) {
        parse_scientific(trimmed).ok_or_else(invalid)
    } else {
        Decimal::from_str(trimmed).map_err(|_| invalid())
    }
}

fn is_exponent_marker(c: char) -> bool {
    c == 'e' || c == 'E'
}

fn parse_scientific(s: &str) -> Option<Decimal> {
    if let Ok(value) = Decimal::from_scientific(s) {
        return Some(value);
    }

    // Only underflow is recoverable: shift the mantissa right until it rounds away
    let (mantissa, exponent) = s.split_once(is_exponent_marker)?;
    let mut value = Decimal::from_str(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;
    if exponent >= 0 {
        return None;
    }
    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value /= Decimal::TEN;
    }
    Some(value)
}

fn parse_date(raw: &str) -> Result<TransactionDate, Rejection> {
    if raw.is_empty() {
        return Err(Rejection::MissingDate);
    }
    Ok(raw.parse()?)
}
