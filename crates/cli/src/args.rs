// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser, ValueHint};

use crate::parsers::SizeArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "filestats",
    version = crate::VERSION,
    about = "Per-extension line heuristics and size totals for directory trees"
)]
pub struct Args {
    /// File extensions to look for (comma separated, e.g. -f js,ts,tsx,py,go or -f '*')
    #[arg(short = 'f', value_name = "EXTS", required = true, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Directories to search (comma separated, e.g. -d .,./src,./dist)
    #[arg(
        short = 'd',
        value_name = "DIRS",
        required = true,
        value_delimiter = ',',
        value_parser = OsStringValueParser::new().map(PathBuf::from),
        value_hint = ValueHint::DirPath
    )]
    pub dirs: Vec<PathBuf>,

    /// Additional directories to ignore (comma separated, e.g. -i .vscode,.idea)
    #[arg(short = 'i', value_name = "DIRS", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Include per-extension stats next to the overall total
    #[arg(short = 'a', long = "all")]
    pub include_all: bool,

    /// Write the JSON report to a file instead of stdout
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Stop at the first unreadable path instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Longest accepted line (e.g. 512K, 2M); longer lines skip the file
    #[arg(long, value_name = "SIZE", default_value = "512K")]
    pub max_line_length: SizeArg,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
