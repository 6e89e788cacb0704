//! # Infra
//!
//! Concrete adapters behind the ports:
//!
//! - [`fixtures`]: directory-backed fixture store with the `Saved<name>`
//!   reference and `<name>.out` dump conventions
//! - [`manifest`]: JSON case-table loading
//! - [`engine`]: a line-preserving echo engine for manifest and fixture
//!   authoring

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod engine;
pub mod fixtures;
pub mod manifest;

pub use engine::EchoTreeEngine;
pub use fixtures::FixtureDir;
pub use manifest::{load_manifest, parse_manifest};
