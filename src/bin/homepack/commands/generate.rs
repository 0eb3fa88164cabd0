//! `homepack generate` command

use anyhow::Result;

use homepack::ops::generate;

use crate::cli::GenerateArgs;
use crate::commands::{load_configuration, project_root};

pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = load_configuration(&args.config)?;
    let root = project_root(&args.root)?;

    let out = generate(&config, &root)?;

    println!("build dir:  {}", out.layout.build_dir.display());
    println!("generators: {}", out.layout.generators_dir.display());
    println!("wrote {}", out.toolchain_file.display());
    println!("wrote {}", out.requirements_file.display());

    Ok(())
}
