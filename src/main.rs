use std::process::ExitCode;

use clap::Parser;
use savecheck::args::Args;
use savecheck::presentation;
use savecheck::{EchoTreeEngine, FixtureDir, RegressionSuite, RunOptions, StatsComputer};

fn main() -> ExitCode {
    let args = Args::parse();

    let tables = match savecheck::load_manifest(&args.manifest) {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("Manifest error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let store = FixtureDir::new(&args.fixtures);
    let engine = EchoTreeEngine::new();
    let suite = RegressionSuite::with_computer(
        &engine,
        &store,
        StatsComputer::with_volatile_prefix(args.volatile_prefix.as_str()),
        RunOptions {
            dump_mismatches: args.save_out,
        },
    );

    match suite.run_all(&tables) {
        Ok(report) => {
            presentation::print_report(&report);
            if report.is_failure() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Suite error: {e}");
            ExitCode::FAILURE
        }
    }
}
