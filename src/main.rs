use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use commonwords::{parse_limit, Pipeline, DEFAULT_LIMIT};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Report the most common words in a text file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The text file to count words in.
    file: PathBuf,

    /// The number of ranked words to report.
    #[arg(default_value_t = DEFAULT_LIMIT, value_parser = parse_limit, allow_negative_numbers = true)]
    limit: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(v) => v,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors exit with 1 rather than clap's default of 2.
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    init_logging(args.verbose);
    debug!("{args:?}");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let report = Pipeline::new(args.limit).run_path(&args.file)?;

    report
        .write_to(BufWriter::new(io::stdout().lock()))
        .context("report output failed")?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // Logging is best-effort; a failure to install the logger is not fatal.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
