//! The generate operation.
//!
//! Resolves the layout for the validated configuration and writes the
//! generated files into the generators directory: the CMake cache-preload
//! script, the requirement manifest for the upstream resolver, and the
//! configuration fingerprint.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::core::config::Configuration;
use crate::core::requirement::Requirement;
use crate::layout::LayoutPaths;
use crate::recipe;
use crate::toolchain;
use crate::util::fs::write_string;

/// File name of the CMake cache-preload script.
pub const TOOLCHAIN_FILE: &str = "homepack_toolchain.cmake";

/// File name of the requirement manifest.
pub const REQUIREMENTS_FILE: &str = "requirements.json";

/// File name of the configuration fingerprint.
pub const FINGERPRINT_FILE: &str = "homepack.fingerprint";

/// Requirement manifest handed to the upstream resolver.
#[derive(Debug, Serialize)]
struct RequirementManifest {
    name: &'static str,
    version: &'static str,
    requirements: Vec<Requirement>,
    test_requirements: Vec<Requirement>,
}

/// What `generate` produced.
#[derive(Debug, Clone)]
pub struct GenerateOutput {
    pub layout: LayoutPaths,
    pub toolchain_file: PathBuf,
    pub requirements_file: PathBuf,
    pub fingerprint_file: PathBuf,
}

/// Generate the toolchain script, requirement manifest, and fingerprint.
pub fn generate(config: &Configuration, project_root: &Path) -> Result<GenerateOutput> {
    let layout = LayoutPaths::resolve(config);
    let generators_dir = project_root.join(&layout.generators_dir);

    let vars = toolchain::generate(config);
    let toolchain_file = generators_dir.join(TOOLCHAIN_FILE);
    vars.write_preload(&toolchain_file)?;
    tracing::info!("wrote {}", toolchain_file.display());

    let requirements = recipe::requirements()?;
    let manifest = RequirementManifest {
        name: recipe::NAME,
        version: recipe::VERSION,
        requirements: requirements.iter().cloned().collect(),
        test_requirements: recipe::test_requirements(),
    };
    let requirements_file = generators_dir.join(REQUIREMENTS_FILE);
    write_string(&requirements_file, &serde_json::to_string_pretty(&manifest)?)?;
    tracing::info!("wrote {}", requirements_file.display());

    let fingerprint_file = generators_dir.join(FINGERPRINT_FILE);
    write_string(&fingerprint_file, &config.fingerprint())?;

    Ok(GenerateOutput {
        layout,
        toolchain_file,
        requirements_file,
        fingerprint_file,
    })
}
