//! The build operation.
//!
//! Drives the external build tool: generate first, then CMake configure and
//! build in the resolved build directory, then ctest unless tests are
//! skipped. The build tool itself is a black box; we only hand it the
//! generated variable set and report its pass/fail status.

use std::path::Path;

use anyhow::{bail, Result};

use crate::core::config::Configuration;
use crate::ops::generate::generate;
use crate::util::process::{find_cmake, find_ctest, ProcessBuilder};

/// Options for the build operation.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Skip the test step after a successful build
    pub skip_tests: bool,

    /// Number of parallel build jobs (build tool default when absent)
    pub jobs: Option<usize>,
}

/// Arguments for the CMake configure step.
fn configure_args(
    source_dir: &Path,
    build_dir: &Path,
    preload: &Path,
    build_type: &str,
) -> Vec<String> {
    vec![
        "-S".to_string(),
        source_dir.display().to_string(),
        "-B".to_string(),
        build_dir.display().to_string(),
        "-C".to_string(),
        preload.display().to_string(),
        format!("-DCMAKE_BUILD_TYPE={}", build_type),
    ]
}

/// Generate, configure, build, and (optionally) test.
pub fn build(config: &Configuration, project_root: &Path, opts: &BuildOptions) -> Result<()> {
    let Some(cmake) = find_cmake() else {
        bail!(
            "CMake not found\n\
             \n\
             CMake is required to build the library.\n\
             Install CMake and ensure it's in your PATH."
        );
    };

    let out = generate(config, project_root)?;
    let build_dir = project_root.join(&out.layout.build_dir);

    tracing::info!("configuring in {}", build_dir.display());
    ProcessBuilder::new(&cmake)
        .args(configure_args(
            project_root,
            &build_dir,
            &out.toolchain_file,
            &config.settings().build_type,
        ))
        .exec_checked()?;

    tracing::info!("building {}", crate::recipe::NAME);
    let mut compile = ProcessBuilder::new(&cmake)
        .arg("--build")
        .arg(&build_dir)
        .arg("--parallel");
    if let Some(jobs) = opts.jobs {
        compile = compile.arg(jobs.to_string());
    }
    compile.exec_checked()?;

    if opts.skip_tests {
        tracing::info!("skipping tests");
        return Ok(());
    }

    let Some(ctest) = find_ctest() else {
        bail!("ctest not found; rerun with --skip-tests or install CTest");
    };

    tracing::info!("running tests");
    ProcessBuilder::new(&ctest)
        .arg("--output-on-failure")
        .cwd(&build_dir)
        .exec_checked()?;

    Ok(())
}
