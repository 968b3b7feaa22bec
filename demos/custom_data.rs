//! An example showing a [`GroupedIndex`] keyed by something other than a zip code or date
//!
//! Any [`Ord`] key works; here contributions are grouped by recipient and state

use donor_medians::{GroupedIndex, ReportLine};
use rust_decimal::Decimal;

/// (recipient, state, whole dollars)
const DATA: [(&str, &str, i64); 6] = [
    ("C00177436", "GA", 384),
    ("C00384818", "RI", 250),
    ("C00177436", "GA", 230),
    ("C00177436", "AL", 500),
    ("C00384818", "RI", 333),
    ("C00177436", "GA", 384),
];

fn main() {
    let mut index = GroupedIndex::new();

    for (recipient, state, dollars) in DATA {
        index.insert(recipient, state.to_owned(), Decimal::from(dollars));
    }

    // Sorted by recipient, then state
    for recipient in index.sorted_recipients() {
        for state in index.sorted_keys_for(recipient) {
            if let Some(aggregate) = index.aggregate_for(recipient, state) {
                println!("{}", ReportLine::new(recipient, state, aggregate));
            }
        }
    }
}
