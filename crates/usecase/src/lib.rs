//! # Usecase
//!
//! Suite orchestration: one round-trip validation ([`validator`]), the
//! fixture-independent consistency checks ([`consistency`]), and the
//! data-driven suite runner tying both together ([`suite`]).

// crates/usecase/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod consistency;
pub mod suite;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

pub use suite::{RegressionSuite, RunOptions};
pub use validator::RoundTripValidator;
