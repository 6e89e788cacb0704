//! # Shared kernel
//!
//! Error taxonomy and the `Result` alias shared across the workspace.

// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod error;

pub use error::{
    DomainError, EngineError, ErrorContext, InfrastructureError, Result, SaveCheckError,
};
