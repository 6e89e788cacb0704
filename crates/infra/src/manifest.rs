// crates/infra/src/manifest.rs
//! JSON case-table manifests.
//!
//! ```json
//! {
//!   "strict": ["LoopTestPlan.jmx", { "file": "GuiTest.jmx", "reference": "GuiTestRef.jmx" }],
//!   "lines_only": ["GenTest25.jmx"],
//!   "load_only": ["GenTest22.jmx"],
//!   "versions": { "property_version": "5.0", "file_fingerprint": "A1B2" }
//! }
//! ```
//!
//! Entries in `strict` and `lines_only` are bare file names, or objects
//! when a reference name other than `Saved<name>` is needed.

use std::{fs, path::Path};

use serde::Deserialize;

use savecheck_domain::{CaseTables, LoadOnlyCase, RoundTripCase, Strictness, VersionExpectations};
use savecheck_shared_kernel::{ErrorContext, InfrastructureError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    strict: Vec<CaseSpec>,
    #[serde(default)]
    lines_only: Vec<CaseSpec>,
    #[serde(default)]
    load_only: Vec<String>,
    #[serde(default)]
    versions: Option<VersionExpectations>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CaseSpec {
    Name(String),
    Detailed {
        file: String,
        #[serde(default)]
        reference: Option<String>,
    },
}

impl CaseSpec {
    fn into_case(self, strictness: Strictness) -> RoundTripCase {
        match self {
            CaseSpec::Name(file) => RoundTripCase::new(file, strictness),
            CaseSpec::Detailed { file, reference } => RoundTripCase {
                file_name: file,
                strictness,
                reference_file_name: reference,
            },
        }
    }
}

/// Load and validate the case tables from a JSON manifest file.
pub fn load_manifest(path: &Path) -> Result<CaseTables> {
    let text = fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&text).with_context(|| format!("loading manifest '{}'", path.display()))
}

/// Parse case tables from manifest text.
pub fn parse_manifest(text: &str) -> Result<CaseTables> {
    let raw: RawManifest = serde_json::from_str(text)?;
    let tables = CaseTables {
        round_trip: raw
            .strict
            .into_iter()
            .map(|spec| spec.into_case(Strictness::Strict))
            .chain(
                raw.lines_only
                    .into_iter()
                    .map(|spec| spec.into_case(Strictness::LinesOnly)),
            )
            .collect(),
        load_only: raw.load_only.into_iter().map(LoadOnlyCase::new).collect(),
        versions: raw.versions,
    };
    tables.validate()?;
    Ok(tables)
}
