//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks are more explicit and easier to debug than macro-generated
//! ones, and the tests here only need a handful of configurable behaviors
//! (seeded data, recorded dispatches, forced failures).

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
