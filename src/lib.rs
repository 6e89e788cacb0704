//! # savecheck
//!
//! Round-trip regression harness for hierarchical test-plan documents:
//! load a fixture through a document engine, serialize it back, and
//! compare size and line count against the most authoritative baseline,
//! alongside fixture-independent version and class-registry consistency
//! checks.
//!
//! The library surface re-exports the workspace crates; the binary wires
//! them to the built-in echo engine.

// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod presentation;

pub use savecheck_domain::{
    CaseReport, CaseStatus, CaseTables, FileStats, LoadOnlyCase, RoundTripCase, StatsComputer,
    Strictness, SuiteReport, VersionExpectations,
};
pub use savecheck_infra::{EchoTreeEngine, FixtureDir, load_manifest, parse_manifest};
pub use savecheck_ports::{DocumentEngine, FixtureStore};
pub use savecheck_shared_kernel::{Result, SaveCheckError};
pub use savecheck_usecase::{RegressionSuite, RoundTripValidator, RunOptions};

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
