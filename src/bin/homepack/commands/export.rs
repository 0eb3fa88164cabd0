//! `homepack export` command

use anyhow::Result;

use homepack::ops::export;

use crate::cli::ExportArgs;
use crate::commands::load_configuration;

pub fn execute(args: ExportArgs) -> Result<()> {
    let config = load_configuration(&args.config)?;

    let manifest = export(&config, args.output.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }

    for component in &manifest.components {
        println!("{}", component.name());
        for lib in component.libs() {
            println!("  lib: {}", lib);
        }
        for req in component.requires() {
            println!("  requires: {}", req);
        }
        for lib in component.system_libs() {
            println!("  system: {}", lib);
        }
        for flag in component.shared_link_flags() {
            println!("  sharedlink: {}", flag);
        }
        for flag in component.exe_link_flags() {
            println!("  exelink: {}", flag);
        }
    }

    Ok(())
}
