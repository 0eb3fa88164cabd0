//! Homepack - build and packaging pipeline for the HomeBlocks native library
//!
//! This crate turns caller-supplied platform settings and build options into
//! everything the external build tool and downstream consumers need: a
//! validated configuration, a build directory layout, an upstream requirement
//! set, a CMake variable set, packaging copy rules, and an exported component
//! manifest.

pub mod core;
pub mod export;
pub mod layout;
pub mod ops;
pub mod packaging;
pub mod recipe;
pub mod resolver;
pub mod toolchain;
pub mod util;

pub use crate::core::{
    component::Component, config::Configuration, options::RawOptions, requirement::Requirement,
    settings::Settings,
};

pub use layout::LayoutPaths;
pub use resolver::RequirementSet;
pub use toolchain::VariableSet;
