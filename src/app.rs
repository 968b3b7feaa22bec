//! File plumbing around [`ContributionProcessor`]: open, stream, flush, close

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Read};
use std::path::Path;

use crate::config::Paths;
use crate::error::{Error, Result};
use crate::processor::{ContributionProcessor, ProcessorStats};
use crate::sink::{LineSink, WriteSink};

/// Runs the whole pipeline over the files named in `paths`
///
/// Both reports are created up front, so a run without a single valid record still leaves two
/// empty files behind.
pub fn run(paths: &Paths) -> Result<ProcessorStats> {
    #[cfg(feature = "log")]
    log::debug!(
        "reading {}, writing {} and {}",
        paths.input.display(),
        paths.zip_output.display(),
        paths.date_output.display()
    );

    let input = File::open(&paths.input).map_err(Error::io("open input", &paths.input))?;
    let zip_sink = WriteSink::new(BufWriter::new(create_output(&paths.zip_output)?));
    let date_sink = WriteSink::new(BufWriter::new(create_output(&paths.date_output)?));

    let mut processor = ContributionProcessor::new(zip_sink, date_sink);
    process_reader(&mut processor, input, &paths.input)?;
    let flushed = processor.flush()?;

    flushed
        .zip_sink
        .into_inner()
        .map_err(Error::io("write", &paths.zip_output))?;
    flushed
        .date_sink
        .into_inner()
        .map_err(Error::io("write", &paths.date_output))?;

    Ok(flushed.stats)
}

/// Feeds every line of `reader` to `processor`
///
/// Lines are split on `\n` and decoded leniently, so stray non-UTF-8 bytes only garble the
/// fields they sit in.
pub fn process_reader<Z, D, R>(
    processor: &mut ContributionProcessor<Z, D>,
    reader: R,
    source: &Path,
) -> Result<()>
where
    Z: LineSink,
    D: LineSink,
    R: Read,
{
    for line in BufReader::new(reader).split(b'\n') {
        let line = line.map_err(|err| Error::Io {
            action: "read",
            path: source.to_path_buf(),
            source: err,
        })?;
        processor.process_record(&String::from_utf8_lossy(&line))?;
    }
    Ok(())
}

fn create_output(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(Error::io("create directory", parent))?;
    }
    File::create(path).map_err(Error::io("create", path))
}
