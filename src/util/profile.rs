//! Profile file loading.
//!
//! A profile is a TOML file with `[settings]` and `[options]` tables that
//! seeds the configuration before CLI flags are applied. Precedence is
//! defaults < profile < command line.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::options::RawOptions;
use crate::core::settings::Settings;
use crate::util::fs::read_to_string;

/// Settings as they appear in a profile file; every axis is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSettings {
    pub os: Option<String>,
    pub arch: Option<String>,
    pub compiler: Option<String>,
    pub build_type: Option<String>,
    pub cppstd: Option<u32>,
}

/// A parsed profile file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub settings: ProfileSettings,

    #[serde(default)]
    pub options: RawOptions,
}

impl Profile {
    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Profile> {
        let contents = read_to_string(path)?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse profile: {}", path.display()))
    }

    /// Overlay this profile's settings onto a base.
    pub fn apply_settings(&self, base: &mut Settings) {
        if let Some(ref os) = self.settings.os {
            base.os = os.clone();
        }
        if let Some(ref arch) = self.settings.arch {
            base.arch = arch.clone();
        }
        if let Some(ref compiler) = self.settings.compiler {
            base.compiler = compiler.clone();
        }
        if let Some(ref build_type) = self.settings.build_type {
            base.build_type = build_type.clone();
        }
        if let Some(cppstd) = self.settings.cppstd {
            base.cppstd = Some(cppstd);
        }
    }
}
