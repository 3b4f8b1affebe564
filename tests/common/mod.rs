//! Shared test utilities for rhymer integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Fixtures are small enough to reason about by hand; the
//! expected batches quoted in harness docs come straight from them.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
