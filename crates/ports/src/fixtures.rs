// crates/ports/src/fixtures.rs
use std::path::PathBuf;

use savecheck_shared_kernel::Result;

/// Port for locating and reading test fixtures.
///
/// A missing fixture is an expected condition (`Ok(None)` from
/// [`FixtureStore::read_text`]); an unreadable one is an environment
/// failure and surfaces as an error.
pub trait FixtureStore: Send + Sync {
    /// Absolute path a fixture name resolves to, whether or not the file
    /// exists. Used for loading and for failure diagnostics.
    fn resolve(&self, name: &str) -> PathBuf;

    /// Full text of the fixture, or `None` when it does not exist.
    fn read_text(&self, name: &str) -> Result<Option<String>>;

    /// Persist serializer output for offline inspection, returning the
    /// path written. Write failures are fatal environment failures.
    fn write_dump(&self, name: &str, bytes: &[u8]) -> Result<PathBuf>;
}
