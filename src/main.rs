use std::io;
use std::process::ExitCode;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use testskipper::cli::Args;
use testskipper::logging::{self, Verbosity};
use testskipper::runner::{Runner, EXIT_FAILURE};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("gotestskipper: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &Args) -> Result<u8> {
    let config = args.resolve_config().context("Invalid configuration")?;
    let runner = Runner::new(&config, args.action(), args.output_mode());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = runner.run(&args.paths, &mut out);

    for error in report.errors() {
        eprintln!("{error}");
    }
    Ok(report.exit_code())
}
