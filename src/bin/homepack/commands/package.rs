//! `homepack package` command

use anyhow::Result;

use homepack::ops::package;

use crate::cli::PackageArgs;
use crate::commands::{load_configuration, project_root};

pub fn execute(args: PackageArgs) -> Result<()> {
    let config = load_configuration(&args.config)?;
    let root = project_root(&args.root)?;

    let package_dir = if args.package_folder.is_absolute() {
        args.package_folder.clone()
    } else {
        root.join(&args.package_folder)
    };

    let report = package(&config, &root, &package_dir)?;

    for outcome in &report.outcomes {
        println!(
            "{:>20} -> {}/: {} file(s)",
            outcome.pattern,
            outcome.dest.display(),
            outcome.copied
        );
    }
    println!("packaged {} file(s) into {}", report.total(), package_dir.display());

    Ok(())
}
