//! The package operation.
//!
//! Runs after the external build step: applies the recipe's copy rules to
//! the artifact tree on disk and produces the normalized package tree.

use std::path::Path;

use anyhow::Result;

use crate::core::config::Configuration;
use crate::layout::LayoutPaths;
use crate::packaging::{apply_rules, PackageTrees, PackagingReport};
use crate::recipe;

/// Apply the recipe copy rules from the build tree into `package_dir`.
pub fn package(
    config: &Configuration,
    project_root: &Path,
    package_dir: &Path,
) -> Result<PackagingReport> {
    let layout = LayoutPaths::resolve(config);

    let trees = PackageTrees {
        source_dir: project_root.join(&layout.source_dir),
        build_dir: project_root.join(&layout.build_dir),
        package_dir: package_dir.to_path_buf(),
    };

    apply_rules(&recipe::copy_rules(), &trees)
}
