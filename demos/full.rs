//! A more fully-fledged example: both reports from a handful of raw records
//!
//! The zip report streams to stdout while records are read.
//! The date report is kept in memory and printed once everything has been processed.

use std::io;

use donor_medians::{ContributionProcessor, WriteSink};

/// Raw records in the FEC pipe-delimited layout
///
/// The first has `OTHER_ID` set, so it is skipped entirely.
/// The last has a four digit zip code, so it only counts towards the date report.
const RECORDS: [&str; 5] = [
    "C00629618|N|TER|P|201701230300133512|15C|IND|PEREZ, JOHN A|LOS ANGELES|CA|90017|PRINCIPAL|DOUBLE NICKEL ADVISORS|01032017|40|H6CA34245|SA01251735122|1141239|||2012520171368850783",
    "C00177436|N|M2|P|201702039042410894|15|IND|DEEHAN, WILLIAM N|ALPHARETTA|GA|300047357|UNUM|SVP, SALES, CL|01312017|384||PR2283873845050|1147350||P/R DEDUCTION ($192.00 BI-WEEKLY)|4020820171370029337",
    "C00384818|N|M2|P|201702039042412112|15|IND|ABBOTT, JOSEPH|WOONSOCKET|RI|028956146|CVS HEALTH|VP, RETAIL PHARMACY OPS|01122017|250||2017020211435-887|1147467|||4020820171370030285",
    "C00177436|N|M2|P|201702039042410893|15|IND|SABOURIN, JAMES|LOOKOUT MOUNTAIN|GA|307502818|UNUM|SVP, CORPORATE COMMUNICATIONS|01312017|230||PR1890575345050|1147350||P/R DEDUCTION ($115.00 BI-WEEKLY)|4020820171370029335",
    "C00177436|N|M2|P|201702039042410896|15|IND|DOE, JANE|SOMEWHERE|GA|3075|UNUM|ANALYST|01312017|100||PR2283905245051|1147350|||4020820171370029343",
];

fn main() -> Result<(), donor_medians::Error> {
    let stdout = WriteSink::new(io::stdout().lock());
    let mut processor = ContributionProcessor::new(stdout, Vec::<String>::new());

    println!("-- by zip, as records arrive --");
    for record in RECORDS {
        let outcome = processor.process_record(record)?;
        if !outcome.zip && !outcome.date {
            eprintln!("skipped a record");
        }
    }

    // We can inspect the buffered date index before flushing
    println!(
        "-- {} recipient/date pairs buffered --",
        processor.date_index().len()
    );

    let flushed = processor.flush()?;
    println!("-- by date --");
    for line in &flushed.date_sink {
        println!("{line}");
    }

    println!("-- {:?} --", flushed.stats);
    Ok(())
}
