// src/args.rs
use std::path::PathBuf;

use clap::Parser;

/// Run the regression suite described by a case manifest against the
/// built-in echo engine.
#[derive(Debug, Parser)]
#[command(name = "savecheck", version = crate::VERSION, about)]
pub struct Args {
    /// JSON case-table manifest.
    #[arg(long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Directory holding the test fixtures.
    #[arg(long, value_name = "DIR", default_value = "testfiles")]
    pub fixtures: PathBuf,

    /// Write mismatched serializer output next to the fixture as
    /// `<name>.out` for offline inspection.
    #[arg(long)]
    pub save_out: bool,

    /// Opening-tag prefix whose line is exempt from size accounting.
    #[arg(
        long,
        value_name = "PREFIX",
        default_value = savecheck_domain::DEFAULT_VOLATILE_PREFIX
    )]
    pub volatile_prefix: String,
}
