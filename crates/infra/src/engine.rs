// crates/infra/src/engine.rs
use std::{
    fs,
    io::Write,
    path::Path,
};

use savecheck_ports::DocumentEngine;
use savecheck_shared_kernel::EngineError;
use savecheck_shared_kernel::error::EngineResult;

/// Reference engine whose tree is just the document's lines and whose
/// serializer emits them back unchanged. It implements no document
/// format; it exists so manifests, fixtures and baselines can be
/// exercised end to end from the CLI before a real serializer is
/// embedded.
#[derive(Debug, Default)]
pub struct EchoTreeEngine;

/// The `_version` constant the echo engine reports.
pub const ECHO_PROPERTY_VERSION: &str = "1.0";
/// The properties-resource fingerprint the echo engine reports.
pub const ECHO_FINGERPRINT: &str = "echo";

/// Line-level tree of a loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTree {
    lines: Vec<String>,
}

impl LineTree {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl EchoTreeEngine {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentEngine for EchoTreeEngine {
    type Tree = LineTree;

    fn load_tree(&self, path: &Path) -> EngineResult<Self::Tree> {
        let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if text.trim().is_empty() {
            return Err(EngineError::MalformedDocument {
                path: path.to_path_buf(),
                details: "empty document".to_string(),
            });
        }
        Ok(LineTree {
            lines: text.lines().map(str::to_string).collect(),
        })
    }

    fn save_tree(&self, tree: &Self::Tree, out: &mut dyn Write) -> EngineResult<()> {
        for line in &tree.lines {
            writeln!(out, "{line}").map_err(|e| EngineError::Serialization {
                details: e.to_string(),
            })?;
        }
        Ok(())
    }

    fn property_version(&self) -> String {
        ECHO_PROPERTY_VERSION.to_string()
    }

    fn properties_fingerprint(&self) -> String {
        ECHO_FINGERPRINT.to_string()
    }

    fn versions_consistent(&self) -> bool {
        true
    }

    fn unresolved_classes(&self) -> Vec<String> {
        Vec::new()
    }
}
