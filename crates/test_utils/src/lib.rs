//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! postcode test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known valid and invalid postcode inputs
//! - `builders`: Builder for raw postcode input with chosen spacing and case
//! - `logging`: One-time tracing subscriber setup for tests
//! - `assertions`: Custom assertion helpers for postcode types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod logging;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use logging::*;
pub use assertions::*;
pub use generators::*;
