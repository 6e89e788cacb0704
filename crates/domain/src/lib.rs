//! # Domain
//!
//! Core value types of the regression harness:
//!
//! - [`stats`]: content fingerprints of serialized documents and the
//!   volatile-prefix-aware computer that produces them
//! - [`case`]: data-driven case tables (round-trip, load-only, version
//!   expectations)
//! - [`outcome`]: per-case results and their aggregation into a suite report
//!
//! The domain knows nothing about files on disk or the document engine;
//! both are reached through ports.

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod case;
pub mod outcome;
pub mod stats;

pub use case::{CaseTables, LoadOnlyCase, RoundTripCase, Strictness, VersionExpectations};
pub use outcome::{CaseReport, CaseStatus, SuiteReport};
pub use stats::{DEFAULT_VOLATILE_PREFIX, FileStats, StatsComputer};
