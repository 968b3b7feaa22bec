use std::collections::BTreeMap;

use crate::date::TransactionDate;
use crate::error::{Error, Result};
use crate::filter::{filter_record, Rejection, ZipCode};
use crate::index::GroupedIndex;
use crate::report::ReportLine;
use crate::sink::LineSink;

/// Which reports a single record made it into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordOutcome {
    /// A zip report line was written
    pub zip: bool,
    /// The date index took the contribution
    pub date: bool,
}

/// Counters kept over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessorStats {
    /// Records offered to [`ContributionProcessor::process_record`]
    pub records: u64,
    /// Records that failed a record-level rule and reached neither report
    pub rejected: u64,
    /// Lines written to the zip report
    pub zip_lines: u64,
    /// Contributions added to the date index
    pub date_contributions: u64,
    /// Lines written to the date report by [`ContributionProcessor::flush`]
    pub date_lines: u64,
    /// Rejections by [`Rejection::kind`], counting each branch separately
    pub rejections: BTreeMap<&'static str, u64>,
}

impl ProcessorStats {
    fn reject(&mut self, rejection: &Rejection) {
        *self.rejections.entry(rejection.kind()).or_insert(0) += 1;
    }
}

/// What is left once the date report has been written
#[derive(Debug)]
#[allow(missing_docs)]
pub struct Flushed<Z, D> {
    pub zip_sink: Z,
    pub date_sink: D,
    pub stats: ProcessorStats,
}

/// Streams contribution records into the zip and date reports
///
/// Each accepted zip contribution writes its report line straight away, in input order.
/// Date contributions are only buffered; [`Self::flush`] writes them all at the end, sorted by
/// recipient and then date. `flush` consumes the processor, so it runs exactly once and nothing
/// can be processed after it.
#[derive(Debug)]
pub struct ContributionProcessor<Z, D> {
    by_zip: GroupedIndex<ZipCode>,
    by_date: GroupedIndex<TransactionDate>,
    zip_sink: Z,
    date_sink: D,
    stats: ProcessorStats,
}

impl<Z: LineSink, D: LineSink> ContributionProcessor<Z, D> {
    /// Constructs a processor writing to the given sinks, with both indices empty
    pub fn new(zip_sink: Z, date_sink: D) -> Self {
        Self {
            by_zip: GroupedIndex::new(),
            by_date: GroupedIndex::new(),
            zip_sink,
            date_sink,
            stats: ProcessorStats::default(),
        }
    }

    /// Filters one raw record and folds it into whichever reports accept it
    ///
    /// Bad records are skipped and counted, never returned as errors.
    /// The only error is a failure to write the zip report line.
    pub fn process_record(&mut self, line: &str) -> Result<RecordOutcome> {
        self.stats.records += 1;

        let filtered = match filter_record(line) {
            Ok(filtered) => filtered,
            Err(rejection) => {
                #[cfg(feature = "log")]
                log::trace!("record {}: skipped: {}", self.stats.records, rejection);

                self.stats.rejected += 1;
                self.stats.reject(&rejection);
                return Ok(RecordOutcome::default());
            }
        };

        let mut outcome = RecordOutcome::default();

        match filtered.zip {
            Ok(contribution) => {
                let aggregate = self.by_zip.insert(
                    &contribution.recipient,
                    contribution.key.clone(),
                    contribution.amount,
                );
                let report = ReportLine::new(&contribution.recipient, &contribution.key, aggregate);

                self.zip_sink
                    .write_line(&report.to_string())
                    .map_err(|source| Error::Sink {
                        report: "zip",
                        source,
                    })?;
                self.stats.zip_lines += 1;
                outcome.zip = true;
            }
            Err(rejection) => {
                #[cfg(feature = "log")]
                log::trace!("record {}: not in zip report: {}", self.stats.records, rejection);

                self.stats.reject(&rejection);
            }
        }

        match filtered.date {
            Ok(contribution) => {
                self.by_date
                    .insert(&contribution.recipient, contribution.key, contribution.amount);
                self.stats.date_contributions += 1;
                outcome.date = true;
            }
            Err(rejection) => {
                #[cfg(feature = "log")]
                log::trace!("record {}: not in date report: {}", self.stats.records, rejection);

                self.stats.reject(&rejection);
            }
        }

        Ok(outcome)
    }

    /// Writes the date report and hands back both sinks
    ///
    /// One line per (recipient, date), recipients ascending and each recipient's dates in
    /// chronological order.
    pub fn flush(mut self) -> Result<Flushed<Z, D>> {
        for (recipient, date, aggregate) in self.by_date.entries() {
            let report = ReportLine::new(recipient, date, aggregate);
            self.date_sink
                .write_line(&report.to_string())
                .map_err(|source| Error::Sink {
                    report: "date",
                    source,
                })?;
            self.stats.date_lines += 1;
        }

        #[cfg(feature = "log")]
        log::info!(
            "processed {} records ({} rejected): {} zip lines, {} date lines, skipped by reason: {:?}",
            self.stats.records,
            self.stats.rejected,
            self.stats.zip_lines,
            self.stats.date_lines,
            self.stats.rejections
        );

        Ok(Flushed {
            zip_sink: self.zip_sink,
            date_sink: self.date_sink,
            stats: self.stats,
        })
    }

    /// Counters so far
    pub fn stats(&self) -> &ProcessorStats {
        &self.stats
    }

    /// Aggregates by recipient and zip code
    pub fn zip_index(&self) -> &GroupedIndex<ZipCode> {
        &self.by_zip
    }

    /// Aggregates by recipient and transaction date, not yet written
    pub fn date_index(&self) -> &GroupedIndex<TransactionDate> {
        &self.by_date
    }
}
