//! Shared utilities

pub mod diagnostic;
pub mod fs;
pub mod process;
pub mod profile;

pub use diagnostic::Diagnostic;
pub use profile::Profile;
