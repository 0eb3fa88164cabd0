//! Core data structures for Homepack.
//!
//! This module contains the foundational types used throughout the pipeline:
//! - Platform settings and build options
//! - The validated, immutable Configuration
//! - Requirement and Component descriptors

pub mod component;
pub mod config;
pub mod options;
pub mod requirement;
pub mod settings;

pub use component::Component;
pub use config::{ConfigError, Configuration};
pub use options::RawOptions;
pub use requirement::Requirement;
pub use settings::Settings;
