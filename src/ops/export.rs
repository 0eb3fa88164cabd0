//! The export operation.
//!
//! Emits the component manifest consumed by downstream consumers linking
//! against the packaged library.

use std::path::Path;

use anyhow::Result;

use crate::core::config::Configuration;
use crate::export::{manifest, ComponentManifest};
use crate::util::fs::write_string;

/// Build the component manifest, optionally writing it as JSON.
pub fn export(config: &Configuration, output: Option<&Path>) -> Result<ComponentManifest> {
    let manifest = manifest(config)?;

    if let Some(path) = output {
        write_string(path, &serde_json::to_string_pretty(&manifest)?)?;
        tracing::info!("wrote {}", path.display());
    }

    Ok(manifest)
}
