//! Toolchain variable generation.
//!
//! Derives the flat key/value set consumed by the external build tool from
//! the validated configuration, and renders it as a CMake cache-preload
//! script for `cmake -C`.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::core::config::Configuration;
use crate::recipe;
use crate::util::fs::write_string;

/// A single variable handed to the build tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
}

/// An ordered set of toolchain variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableSet {
    variables: Vec<Variable>,
}

impl VariableSet {
    /// Set a variable, replacing an earlier value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(var) = self.variables.iter_mut().find(|v| v.key == key) {
            var.value = value;
        } else {
            self.variables.push(Variable { key, value });
        }
    }

    /// Look up a variable by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }

    /// Iterate variables in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    /// Render as a CMake cache-preload script (for `cmake -C`).
    pub fn to_cmake_preload(&self) -> String {
        let mut out = String::new();
        for var in &self.variables {
            // writeln! to a String cannot fail
            let _ = writeln!(
                out,
                "set({} \"{}\" CACHE STRING \"\" FORCE)",
                var.key, var.value
            );
        }
        out
    }

    /// Write the preload script to disk.
    pub fn write_preload(&self, path: &Path) -> Result<()> {
        write_string(path, &self.to_cmake_preload())
    }
}

/// ON/OFF string for a boolean toolchain switch.
fn on_off(value: bool) -> &'static str {
    if value {
        "ON"
    } else {
        "OFF"
    }
}

/// Derive the toolchain variable set from a configuration.
///
/// The three CMake switches and PROJECT_VERSION are emitted unconditionally.
/// Coverage and sanitizer instrumentation only take effect on Debug builds;
/// the two can never both be ON because validation rejects that combination.
pub fn generate(config: &Configuration) -> VariableSet {
    let mut vars = VariableSet::default();

    vars.set("CONAN_CMAKE_SILENT_OUTPUT", "ON");
    vars.set("CMAKE_EXPORT_COMPILE_COMMANDS", "ON");
    vars.set("CTEST_OUTPUT_ON_FAILURE", "ON");
    vars.set("MEMORY_SANITIZER_ON", "OFF");
    vars.set("CODE_COVERAGE", "OFF");
    vars.set("PROJECT_VERSION", recipe::VERSION);
    vars.set("USE_FIXED_INDEX", on_off(config.fixed_index()));

    if config.is_debug() {
        if config.coverage() {
            vars.set("CODE_COVERAGE", "ON");
        } else if config.sanitize() {
            vars.set("MEMORY_SANITIZER_ON", "ON");
        }
    }

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::RawOptions;
    use crate::core::settings::Settings;

    fn config(build_type: &str, raw: RawOptions) -> Configuration {
        let settings = Settings {
            os: "Linux".to_string(),
            arch: "x86_64".to_string(),
            compiler: "gcc".to_string(),
            build_type: build_type.to_string(),
            cppstd: None,
        };
        Configuration::validate(settings, raw).unwrap()
    }

    #[test]
    fn test_fixed_entries_always_emitted() {
        let vars = generate(&config("Release", RawOptions::default()));

        assert_eq!(vars.get("CONAN_CMAKE_SILENT_OUTPUT"), Some("ON"));
        assert_eq!(vars.get("CMAKE_EXPORT_COMPILE_COMMANDS"), Some("ON"));
        assert_eq!(vars.get("CTEST_OUTPUT_ON_FAILURE"), Some("ON"));
        assert_eq!(vars.get("PROJECT_VERSION"), Some("2.1.2"));
    }

    #[test]
    fn test_debug_sanitize_sets_sanitizer_only() {
        let raw = RawOptions {
            sanitize: Some(true),
            ..Default::default()
        };
        let vars = generate(&config("Debug", raw));

        assert_eq!(vars.get("MEMORY_SANITIZER_ON"), Some("ON"));
        assert_eq!(vars.get("CODE_COVERAGE"), Some("OFF"));
    }

    #[test]
    fn test_debug_coverage_sets_coverage_only() {
        let raw = RawOptions {
            coverage: Some(true),
            ..Default::default()
        };
        let vars = generate(&config("Debug", raw));

        assert_eq!(vars.get("CODE_COVERAGE"), Some("ON"));
        assert_eq!(vars.get("MEMORY_SANITIZER_ON"), Some("OFF"));
    }

    #[test]
    fn test_release_gates_instrumentation_off() {
        for raw in [
            RawOptions {
                sanitize: Some(true),
                ..Default::default()
            },
            RawOptions {
                coverage: Some(true),
                ..Default::default()
            },
        ] {
            let vars = generate(&config("Release", raw));
            assert_eq!(vars.get("MEMORY_SANITIZER_ON"), Some("OFF"));
            assert_eq!(vars.get("CODE_COVERAGE"), Some("OFF"));
        }
    }

    #[test]
    fn test_fixed_index_mirrors_option() {
        let raw = RawOptions {
            fixed_index: Some(false),
            ..Default::default()
        };
        assert_eq!(
            generate(&config("Debug", raw)).get("USE_FIXED_INDEX"),
            Some("OFF")
        );
        assert_eq!(
            generate(&config("Debug", RawOptions::default())).get("USE_FIXED_INDEX"),
            Some("ON")
        );
    }

    #[test]
    fn test_preload_script_shape() {
        let vars = generate(&config("Debug", RawOptions::default()));
        let script = vars.to_cmake_preload();

        assert!(script.contains("set(CTEST_OUTPUT_ON_FAILURE \"ON\" CACHE STRING \"\" FORCE)"));
        assert!(script.contains("set(PROJECT_VERSION \"2.1.2\" CACHE STRING \"\" FORCE)"));
    }
}
