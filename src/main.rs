use std::{path::PathBuf, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use eolcheck::{Classifier, LineEnding};
use log::debug;

/// Check that a file uses one consistent line-ending convention.
///
/// Exits with 0 when the file uses only DOS "\r\n" or only UNIX "\n" line
/// endings, and with 1 when it is unreadable, empty, mixes both, or contains
/// old Mac "\r" or "\r\r\n" line endings.
#[derive(Debug, Parser)]
#[command(name = "eolcheck", version, about)]
struct Cli {
    /// File to check. Use `eolcheck -- <FILE>` for names starting with '-'.
    file: PathBuf,

    /// Also fail unless the file uses only this convention (dos or unix).
    #[arg(short, long, value_name = "STYLE", value_parser = parse_expected)]
    expect: Option<LineEnding>,

    /// Print nothing and report through the exit status only.
    #[arg(short, long)]
    quiet: bool,
}

fn parse_expected(s: &str) -> Result<LineEnding, String> {
    match s.parse::<LineEnding>().map_err(|e| e.to_string())? {
        LineEnding::Legacy => Err("old Mac line endings are never accepted".to_owned()),
        line_ending => Ok(line_ending),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Usage errors exit with 1, not clap's default of 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    debug!("{cli:?}");

    Classifier::new()
        .expected(cli.expect)
        .report(!cli.quiet)
        .verbose(!cli.quiet)
        .classify_file(&cli.file)
        .into()
}
