#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Running median, count and total for one group of contributions
pub mod aggregate;
pub mod app;
/// Input and output path resolution
pub mod config;
/// `MMDDYYYY` transaction dates
pub mod date;
mod error;
pub mod filter;
/// Recipient, then secondary key, to running aggregate
pub mod index;
/// The streaming zip report and the deferred date report
pub mod processor;
/// Report line formatting
pub mod report;
/// Where report lines go
pub mod sink;

pub use aggregate::{round_whole, RunningAggregate};
pub use config::Paths;
pub use date::{DateError, TransactionDate};
pub use error::{Error, Result};
pub use filter::{
    filter_record, Contribution, DateContribution, FilteredRecord, Rejection, ZipCode,
    ZipContribution,
};
pub use index::GroupedIndex;
pub use processor::{ContributionProcessor, Flushed, ProcessorStats, RecordOutcome};
pub use report::ReportLine;
pub use sink::{LineSink, WriteSink};
