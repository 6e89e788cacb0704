//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`engine`]: the document load/save engine under test
//! - [`fixtures`]: fixture resolution and mismatch-dump persistence
//!
//! These ports keep the suite logic independent of any concrete
//! serializer or filesystem layout.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod engine;
pub mod fixtures;

pub use engine::DocumentEngine;
pub use fixtures::FixtureStore;
