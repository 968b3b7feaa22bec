use std::fmt;

use crate::aggregate::RunningAggregate;
use crate::filter::FIELD_DELIMITER;

/// One output row: `recipient|key|median|count|total`
///
/// The key renders through its own [`fmt::Display`], so zip codes come out as five characters
/// and dates as `MMDDYYYY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine<'a, K> {
    /// Recipient id
    pub recipient: &'a str,
    /// Zip code or transaction date
    pub key: &'a K,
    /// Running median, rounded
    pub median: i64,
    /// Number of contributions
    pub count: u64,
    /// Running total, rounded
    pub total: i64,
}

impl<'a, K> ReportLine<'a, K> {
    /// Snapshot of `aggregate` as it stands now
    pub fn new(recipient: &'a str, key: &'a K, aggregate: &RunningAggregate) -> Self {
        Self {
            recipient,
            key,
            median: aggregate.median(),
            count: aggregate.count(),
            total: aggregate.total(),
        }
    }
}

impl<K: fmt::Display> fmt::Display for ReportLine<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = FIELD_DELIMITER;
        write!(
            f,
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.recipient, self.key, self.median, self.count, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::date::TransactionDate;
    use crate::filter::ZipCode;

    #[test]
    fn zip_line() {
        let zip = ZipCode::from_raw("028956146").unwrap();
        let aggregate: RunningAggregate = [Decimal::from(250), Decimal::from(333)]
            .into_iter()
            .collect();

        let line = ReportLine::new("C00384818", &zip, &aggregate);
        assert_eq!(line.to_string(), "C00384818|02895|292|2|583");
    }

    #[test]
    fn date_line_keeps_leading_zeros() {
        let date: TransactionDate = "01032017".parse().unwrap();
        let aggregate: RunningAggregate = [Decimal::from(40)].into_iter().collect();

        let line = ReportLine::new("C00629618", &date, &aggregate);
        assert_eq!(line.to_string(), "C00629618|01032017|40|1|40");
    }
}
