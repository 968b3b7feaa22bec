use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use donor_medians::{app, Paths};

/// Running medians of political contributions by recipient and zip code, and by recipient and
/// transaction date
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Pipe-delimited contributions file [default: input/itcont.txt]
    input: Option<PathBuf>,
    /// Streaming report by zip code [default: output/medianvals_by_zip.txt]
    zip_output: Option<PathBuf>,
    /// Report by transaction date [default: output/medianvals_by_date.txt]
    date_output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let paths = Paths::resolve(args.input, args.zip_output, args.date_output, &cwd);

    app::run(&paths)?;
    Ok(())
}
