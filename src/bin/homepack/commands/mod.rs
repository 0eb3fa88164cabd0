//! Command implementations

pub mod build;
pub mod deps;
pub mod export;
pub mod generate;
pub mod package;

use anyhow::{bail, Result};

use homepack::util::diagnostic::emit;
use homepack::util::Profile;
use homepack::{Configuration, RawOptions, Settings};

use crate::cli::ConfigArgs;

/// Build a validated Configuration from the shared CLI inputs.
///
/// Precedence: defaults < profile file < `-s`/`-o` flags. Any validation
/// failure prints a diagnostic and aborts before a command runs.
pub fn load_configuration(args: &ConfigArgs) -> Result<Configuration> {
    let mut settings = Settings::default();
    let mut options = RawOptions::default();

    if let Some(ref path) = args.profile {
        let profile = Profile::load(path)?;
        profile.apply_settings(&mut settings);
        options = options.merge(&profile.options);
    }

    for pair in &args.settings {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid setting `{}`: expected KEY=VALUE", pair);
        };
        settings.set(key, value)?;
    }

    for pair in &args.options {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid option `{}`: expected KEY=VALUE", pair);
        };
        if let Err(err) = options.set(key, value) {
            emit(&err.to_diagnostic(), false);
            bail!("invalid configuration");
        }
    }

    match Configuration::validate(settings, options) {
        Ok(config) => Ok(config),
        Err(err) => {
            emit(&err.to_diagnostic(), false);
            bail!("invalid configuration");
        }
    }
}

/// The project root a command operates on.
pub fn project_root(root: &Option<std::path::PathBuf>) -> Result<std::path::PathBuf> {
    match root {
        Some(path) => Ok(path.clone()),
        None => Ok(std::env::current_dir()?),
    }
}
