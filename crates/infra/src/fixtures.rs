// crates/infra/src/fixtures.rs
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use savecheck_ports::FixtureStore;
use savecheck_shared_kernel::{InfrastructureError, Result};

/// Fixture store rooted at a directory. Reference fixtures live next to
/// their originals under the `Saved<name>` convention; mismatch dumps are
/// written as `<name>.out` siblings.
#[derive(Debug, Clone)]
pub struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FixtureStore for FixtureDir {
    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn read_text(&self, name: &str) -> Result<Option<String>> {
        let path = self.resolve(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InfrastructureError::FileRead { path, source }.into()),
        }
    }

    fn write_dump(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.resolve(&format!("{name}.out"));
        fs::write(&path, bytes).map_err(|source| InfrastructureError::FileWrite {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
