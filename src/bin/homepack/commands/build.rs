//! `homepack build` command

use anyhow::Result;

use homepack::ops::{build, BuildOptions};

use crate::cli::BuildArgs;
use crate::commands::{load_configuration, project_root};

pub fn execute(args: BuildArgs) -> Result<()> {
    let config = load_configuration(&args.config)?;
    let root = project_root(&args.root)?;

    let opts = BuildOptions {
        skip_tests: args.skip_tests,
        jobs: args.jobs,
    };

    build(&config, &root, &opts)
}
