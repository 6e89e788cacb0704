// crates/domain/src/outcome.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::FileStats;

/// Outcome of a single check. Content mismatches and per-entry load
/// failures are recorded here rather than raised, so one bad fixture
/// never hides the others; environment failures bypass this type and
/// propagate as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CaseStatus {
    Passed,
    /// Round-trip output stats differ from the baseline.
    RoundTripMismatch {
        baseline: FileStats,
        output: FileStats,
    },
    /// A load-only fixture could not be loaded.
    LoadFailed { path: String, details: String },
    /// An engine-reported version constant differs from the expected one.
    VersionMismatch {
        what: String,
        expected: String,
        actual: String,
    },
    /// The engine's own versions-compatibility predicate returned false.
    VersionsIncompatible,
    /// Registry entries whose classes do not resolve to loadable types.
    UnresolvedClasses { classes: Vec<String> },
}

impl CaseStatus {
    pub fn is_failure(&self) -> bool {
        !matches!(self, CaseStatus::Passed)
    }
}

/// One named check plus its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub name: String,
    pub status: CaseStatus,
}

impl CaseReport {
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CaseStatus::Passed,
        }
    }

    pub fn new(name: impl Into<String>, status: CaseStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status.is_failure()
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            CaseStatus::Passed => write!(f, "{}: ok", self.name),
            CaseStatus::RoundTripMismatch { baseline, output } => {
                write!(
                    f,
                    "Loading file {} and saving it back changes its size from {} to {}.",
                    self.name, baseline.size, output.size
                )?;
                if baseline.lines != output.lines {
                    write!(
                        f,
                        "\nNumber of lines changes from {} to {}",
                        baseline.lines, output.lines
                    )?;
                }
                Ok(())
            }
            CaseStatus::LoadFailed { path, details } => {
                write!(f, "Failed loading {path}: {details}")
            }
            CaseStatus::VersionMismatch {
                what,
                expected,
                actual,
            } => write!(f, "{what} mismatch: expected '{expected}', got '{actual}'"),
            CaseStatus::VersionsIncompatible => {
                write!(f, "{}: unexpected version found", self.name)
            }
            CaseStatus::UnresolvedClasses { classes } => {
                write!(f, "One or more classes not found: {}", classes.join(", "))
            }
        }
    }
}

/// Aggregate of all case reports from one run. The suite verdict is a
/// logical OR over case failures, so merging partial reports is
/// associative and commutative and safe under parallel execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, case: CaseReport) {
        self.cases.push(case);
    }

    pub fn merge(&mut self, other: SuiteReport) {
        self.cases.extend(other.cases);
    }

    pub fn is_failure(&self) -> bool {
        self.cases.iter().any(CaseReport::is_failure)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|c| c.is_failure())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

impl FromIterator<CaseReport> for SuiteReport {
    fn from_iter<T: IntoIterator<Item = CaseReport>>(iter: T) -> Self {
        Self {
            cases: iter.into_iter().collect(),
        }
    }
}
