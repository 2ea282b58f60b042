use clap::Parser;
use filestats_cli::args::Args;
use filestats_cli::config::Config;
use filestats_cli::error::Result;
use filestats_cli::presentation;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let output = args.output.clone();
    let config = Config::try_from(args)?;

    let result = filestats_engine::run(&config)?;
    presentation::print_errors(&result.errors);

    let report = result.tally.finalize(config.include_all);
    presentation::print_report(&report, output.as_deref())
}

/// Logs go to stderr; stdout carries only the JSON report.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}
