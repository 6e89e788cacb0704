// crates/domain/src/case.rs
use serde::{Deserialize, Serialize};

use savecheck_shared_kernel::DomainError;

/// How strictly a round-trip output must match its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Size and line count must both match.
    Strict,
    /// Line count must match; size may drift because referenced feature
    /// implementations evolved since the fixture was captured.
    LinesOnly,
}

impl Strictness {
    pub fn requires_size_match(self) -> bool {
        matches!(self, Strictness::Strict)
    }
}

/// One fixture to load, re-serialize and compare against a baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTripCase {
    pub file_name: String,
    pub strictness: Strictness,
    /// Explicit reference file; defaults to the `Saved<name>` convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_file_name: Option<String>,
}

impl RoundTripCase {
    pub fn new(file_name: impl Into<String>, strictness: Strictness) -> Self {
        Self {
            file_name: file_name.into(),
            strictness,
            reference_file_name: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_file_name = Some(reference.into());
        self
    }

    /// Name of the reference fixture this case compares against.
    pub fn reference_name(&self) -> String {
        match &self.reference_file_name {
            Some(name) => name.clone(),
            None => format!("Saved{}", self.file_name),
        }
    }
}

/// One fixture that must merely load without error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOnlyCase {
    pub file_name: String,
}

impl LoadOnlyCase {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// Expected version constants the engine must report. These are the
/// harness-side authoritative values; the engine-reported values are
/// compared against them by the consistency suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionExpectations {
    /// `_version` property value of the versioned properties resource.
    pub property_version: String,
    /// Content fingerprint of the properties resource itself.
    pub file_fingerprint: String,
}

/// The complete data-driven case tables for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTables {
    pub round_trip: Vec<RoundTripCase>,
    pub load_only: Vec<LoadOnlyCase>,
    /// Absent when the manifest targets an engine without versioned
    /// properties; the consistency family is then skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<VersionExpectations>,
}

impl CaseTables {
    /// Reject tables that cannot drive any check at all, and entries
    /// whose file name is empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.round_trip.is_empty() && self.load_only.is_empty() && self.versions.is_none() {
            return Err(DomainError::InvalidManifest {
                reason: "no cases and no version expectations".to_string(),
            });
        }
        for case in &self.round_trip {
            if case.file_name.is_empty() {
                return Err(DomainError::InvalidManifest {
                    reason: "empty file name in round-trip table".to_string(),
                });
            }
        }
        for case in &self.load_only {
            if case.file_name.is_empty() {
                return Err(DomainError::InvalidManifest {
                    reason: "empty file name in load-only table".to_string(),
                });
            }
        }
        Ok(())
    }
}
