//! `homepack deps` command

use anyhow::Result;

use homepack::recipe;

use crate::cli::DepsArgs;
use crate::commands::load_configuration;

pub fn execute(args: DepsArgs) -> Result<()> {
    // Validation still runs first: an invalid configuration aborts every
    // command, including read-only ones.
    let _config = load_configuration(&args.config)?;

    let requirements = recipe::requirements()?;

    if args.json {
        let entries: Vec<_> = requirements.iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for req in &requirements {
        println!("{}", req);
    }
    for req in recipe::test_requirements() {
        println!("{} (test)", req);
    }

    Ok(())
}
