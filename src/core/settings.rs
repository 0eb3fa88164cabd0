//! Platform and toolchain settings.
//!
//! Settings are caller-supplied axes (os, arch, compiler, build_type). They
//! are free-form strings and are not validated beyond the C++ standard check
//! performed during configuration validation.

use serde::{Deserialize, Serialize};

/// Caller-supplied platform settings for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Target operating system (e.g. "Linux", "Macos", "Windows")
    pub os: String,

    /// Target architecture (e.g. "x86_64", "armv8")
    pub arch: String,

    /// Compiler identifier (e.g. "gcc", "clang", "msvc")
    pub compiler: String,

    /// Build type passed through to the build tool (e.g. "Debug", "Release")
    pub build_type: String,

    /// Declared C++ standard, if the caller pins one (e.g. 20)
    pub cppstd: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            os: detect_os(),
            arch: std::env::consts::ARCH.to_string(),
            compiler: "gcc".to_string(),
            build_type: "Debug".to_string(),
            cppstd: None,
        }
    }
}

impl Settings {
    /// Set a settings axis by key, as given on the command line (`-s key=value`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), UnknownSettingError> {
        match key {
            "os" => self.os = value.to_string(),
            "arch" => self.arch = value.to_string(),
            "compiler" => self.compiler = value.to_string(),
            "build_type" => self.build_type = value.to_string(),
            "cppstd" => {
                let std = value.parse::<u32>().map_err(|_| UnknownSettingError {
                    key: key.to_string(),
                    value: Some(value.to_string()),
                })?;
                self.cppstd = Some(std);
            }
            _ => {
                return Err(UnknownSettingError {
                    key: key.to_string(),
                    value: None,
                })
            }
        }
        Ok(())
    }

    /// Whether the target operating system is POSIX-like.
    ///
    /// Used by the component exporter when deciding whether to link the
    /// threading system library.
    pub fn is_posix(&self) -> bool {
        matches!(self.os.as_str(), "Linux" | "Macos" | "FreeBSD" | "Android")
    }
}

/// Error for an unrecognized settings key or an unparsable value.
#[derive(Debug, thiserror::Error)]
#[error("unknown or invalid setting `{key}`")]
pub struct UnknownSettingError {
    pub key: String,
    pub value: Option<String>,
}

/// Map the host OS name to the capitalized form used by settings.
fn detect_os() -> String {
    match std::env::consts::OS {
        "linux" => "Linux".to_string(),
        "macos" => "Macos".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "android" => "Android".to_string(),
        other => other.to_string(),
    }
}
