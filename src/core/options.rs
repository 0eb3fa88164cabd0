//! Build options and their domains.
//!
//! Options are declared switches with a fixed boolean domain. Raw values
//! arrive from the profile file or `-o key=value` flags and are merged with
//! the recipe defaults during validation.

use serde::{Deserialize, Serialize};

use crate::core::config::ConfigError;

/// Default option values for the recipe.
pub mod defaults {
    pub const SHARED: bool = false;
    pub const FPIC: bool = true;
    pub const COVERAGE: bool = false;
    pub const SANITIZE: bool = false;
    pub const FIXED_INDEX: bool = true;
}

/// Raw, possibly-partial option values before validation.
///
/// Every field is optional; an absent field falls back to the recipe default
/// when the configuration is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOptions {
    /// Build a shared library instead of a static one
    #[serde(default)]
    pub shared: Option<bool>,

    /// Compile position-independent code
    #[serde(default, rename = "fPIC")]
    pub fpic: Option<bool>,

    /// Instrument for code coverage
    #[serde(default)]
    pub coverage: Option<bool>,

    /// Instrument with address/UB sanitizers
    #[serde(default)]
    pub sanitize: Option<bool>,

    /// Use the fixed index format
    #[serde(default)]
    pub fixed_index: Option<bool>,
}

impl RawOptions {
    /// Set an option by name, as given on the command line (`-o key=value`).
    ///
    /// Accepts `True`/`False` in any capitalization. A name outside the
    /// declared option set, or a value outside the boolean domain, is a
    /// configuration error.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let parsed = parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
            option: name.to_string(),
            value: value.to_string(),
        })?;

        match name {
            "shared" => self.shared = Some(parsed),
            "fPIC" => self.fpic = Some(parsed),
            "coverage" => self.coverage = Some(parsed),
            "sanitize" => self.sanitize = Some(parsed),
            "fixed_index" => self.fixed_index = Some(parsed),
            _ => {
                return Err(ConfigError::UnknownOption {
                    option: name.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Overlay another set of raw options on top of this one.
    ///
    /// Fields present in `other` win; absent fields keep the current value.
    pub fn merge(&self, other: &RawOptions) -> RawOptions {
        RawOptions {
            shared: other.shared.or(self.shared),
            fpic: other.fpic.or(self.fpic),
            coverage: other.coverage.or(self.coverage),
            sanitize: other.sanitize.or(self.sanitize),
            fixed_index: other.fixed_index.or(self.fixed_index),
        }
    }
}

/// Parse the boolean option domain (`True`/`False`, case-insensitive).
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
