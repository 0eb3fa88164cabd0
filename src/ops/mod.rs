//! High-level operations.
//!
//! This module contains the implementation of Homepack commands. Every
//! operation takes an already-validated Configuration; validation failures
//! abort before any of these run.

pub mod build;
pub mod export;
pub mod generate;
pub mod package;

pub use build::{build, BuildOptions};
pub use export::export;
pub use generate::{generate, GenerateOutput};
pub use package::package;
