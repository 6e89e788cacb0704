// crates/usecase/src/test_support.rs
//! In-memory doubles for the two ports, shared by the unit tests in this
//! crate.

use std::{
    collections::HashMap,
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use savecheck_ports::{DocumentEngine, FixtureStore};
use savecheck_shared_kernel::error::EngineResult;
use savecheck_shared_kernel::{EngineError, InfrastructureError, Result};

type SharedFixtures = Arc<Mutex<HashMap<String, String>>>;

/// Fixture store backed by a map; dumps are recorded, not written.
pub struct MemoryStore {
    fixtures: SharedFixtures,
    dumps: Mutex<Vec<String>>,
    failing_dump: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            fixtures: Arc::new(Mutex::new(HashMap::new())),
            dumps: Mutex::new(Vec::new()),
            failing_dump: false,
        }
    }

    pub fn with_fixture(self, name: &str, contents: &str) -> Self {
        self.fixtures
            .lock()
            .unwrap()
            .insert(name.to_string(), contents.to_string());
        self
    }

    /// Make every dump write fail as if the directory were read-only.
    pub fn with_failing_dump(mut self) -> Self {
        self.failing_dump = true;
        self
    }

    /// Names of the cases whose output was dumped.
    pub fn dumped(&self) -> Vec<String> {
        self.dumps.lock().unwrap().clone()
    }
}

impl FixtureStore for MemoryStore {
    fn resolve(&self, name: &str) -> PathBuf {
        PathBuf::from("/fixtures").join(name)
    }

    fn read_text(&self, name: &str) -> Result<Option<String>> {
        Ok(self.fixtures.lock().unwrap().get(name).cloned())
    }

    fn write_dump(&self, name: &str, _bytes: &[u8]) -> Result<PathBuf> {
        if self.failing_dump {
            return Err(InfrastructureError::FileWrite {
                path: self.resolve(&format!("{name}.out")),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .into());
        }
        self.dumps.lock().unwrap().push(name.to_string());
        Ok(self.resolve(&format!("{name}.out")))
    }
}

/// Engine double that replays scripted output. In echo mode it emits the
/// fixture text verbatim; individual files can be overridden with drifted
/// output or a load failure.
pub struct ScriptedEngine {
    fixtures: SharedFixtures,
    outputs: HashMap<String, String>,
    failing_loads: Vec<String>,
    property_version: String,
    properties_fingerprint: String,
    versions_consistent: bool,
    unresolved: Vec<String>,
}

impl ScriptedEngine {
    /// Echo engine over the same fixtures the store serves.
    pub fn echo_from(store: &MemoryStore) -> Self {
        Self {
            fixtures: Arc::clone(&store.fixtures),
            outputs: HashMap::new(),
            failing_loads: Vec::new(),
            property_version: "5.0".to_string(),
            properties_fingerprint: "F0F0".to_string(),
            versions_consistent: true,
            unresolved: Vec::new(),
        }
    }

    pub fn with_output(mut self, name: &str, output: &str) -> Self {
        self.outputs.insert(name.to_string(), output.to_string());
        self
    }

    pub fn with_load_failure(mut self, name: &str) -> Self {
        self.failing_loads.push(name.to_string());
        self
    }

    pub fn with_property_version(mut self, version: &str) -> Self {
        self.property_version = version.to_string();
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: &str) -> Self {
        self.properties_fingerprint = fingerprint.to_string();
        self
    }

    pub fn with_inconsistent_versions(mut self) -> Self {
        self.versions_consistent = false;
        self
    }

    pub fn with_unresolved(mut self, classes: &[&str]) -> Self {
        self.unresolved = classes.iter().map(|c| c.to_string()).collect();
        self
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl DocumentEngine for ScriptedEngine {
    // The "tree" is simply the text the engine will emit on save.
    type Tree = String;

    fn load_tree(&self, path: &Path) -> EngineResult<Self::Tree> {
        let name = Self::file_name(path);
        if self.failing_loads.contains(&name) {
            return Err(EngineError::MalformedDocument {
                path: path.to_path_buf(),
                details: "scripted load failure".to_string(),
            });
        }
        if let Some(output) = self.outputs.get(&name) {
            return Ok(output.clone());
        }
        self.fixtures
            .lock()
            .unwrap()
            .get(&name)
            .cloned()
            .ok_or_else(|| EngineError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }

    fn save_tree(&self, tree: &Self::Tree, out: &mut dyn Write) -> EngineResult<()> {
        out.write_all(tree.as_bytes())
            .map_err(|e| EngineError::Serialization {
                details: e.to_string(),
            })
    }

    fn property_version(&self) -> String {
        self.property_version.clone()
    }

    fn properties_fingerprint(&self) -> String {
        self.properties_fingerprint.clone()
    }

    fn versions_consistent(&self) -> bool {
        self.versions_consistent
    }

    fn unresolved_classes(&self) -> Vec<String> {
        self.unresolved.clone()
    }
}
