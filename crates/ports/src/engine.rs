// crates/ports/src/engine.rs
use std::io::Write;
use std::path::Path;

use savecheck_shared_kernel::error::EngineResult;

/// Port for the document load/save engine whose round-trip fidelity the
/// harness validates. The harness never inspects the tree; it only loads
/// one and hands it straight back for serialization.
pub trait DocumentEngine: Send + Sync {
    /// Opaque in-memory document produced by [`DocumentEngine::load_tree`].
    type Tree;

    /// Load a serialized document into a tree. Malformed input fails with
    /// a domain-specific error, never with a silently-empty tree.
    fn load_tree(&self, path: &Path) -> EngineResult<Self::Tree>;

    /// Serialize a tree to `out`.
    fn save_tree(&self, tree: &Self::Tree, out: &mut dyn Write) -> EngineResult<()>;

    /// The built-in `_version` value of the versioned properties resource.
    fn property_version(&self) -> String;

    /// Content fingerprint of the versioned properties resource.
    fn properties_fingerprint(&self) -> String;

    /// The engine's own version-compatibility predicate.
    fn versions_consistent(&self) -> bool;

    /// Registry entries whose classes do not resolve to loadable types.
    /// Empty when the registry is complete.
    fn unresolved_classes(&self) -> Vec<String>;
}
