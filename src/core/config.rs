//! Validated build configuration.
//!
//! A `Configuration` is the immutable merge of Settings and Options for one
//! build invocation. It is produced once by `Configuration::validate`, fed to
//! every resolver, and never mutated afterwards. All validation happens here,
//! before any filesystem side effect.

use miette::Diagnostic as MietteDiagnostic;
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::options::{defaults, RawOptions};
use crate::core::settings::Settings;
use crate::recipe;
use crate::util::diagnostic::Diagnostic;

/// Error during configuration validation.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ConfigError {
    /// An option value outside its domain.
    #[error("option `{option}` has invalid value `{value}`")]
    #[diagnostic(code(homepack::config::invalid_value))]
    InvalidValue { option: String, value: String },

    /// An option name outside the declared option set.
    #[error("unknown option `{option}`")]
    #[diagnostic(code(homepack::config::unknown_option))]
    UnknownOption { option: String },

    /// Mutually exclusive options both set.
    #[error("sanitizer does not work with code coverage")]
    #[diagnostic(
        code(homepack::config::conflict),
        help("enable either `coverage` or `sanitize`, not both")
    )]
    Conflict,

    /// Declared C++ standard below the minimum supported.
    #[error("C++ standard {requested} is below the minimum supported ({minimum})")]
    #[diagnostic(code(homepack::config::unsupported_standard))]
    UnsupportedStandard { requested: u32, minimum: u32 },
}

impl ConfigError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ConfigError::InvalidValue { option, value } => {
                Diagnostic::error(format!("option `{}` has invalid value `{}`", option, value))
                    .with_suggestion("Option values must be `True` or `False`".to_string())
            }
            ConfigError::UnknownOption { option } => {
                Diagnostic::error(format!("unknown option `{}`", option)).with_context(
                    "declared options: shared, fPIC, coverage, sanitize, fixed_index".to_string(),
                )
            }
            ConfigError::Conflict => {
                Diagnostic::error("sanitizer does not work with code coverage")
                    .with_suggestion("Drop `-o coverage=True` to build sanitized".to_string())
                    .with_suggestion("Drop `-o sanitize=True` to build with coverage".to_string())
            }
            ConfigError::UnsupportedStandard { requested, minimum } => Diagnostic::error(format!(
                "C++ standard {} is below the minimum supported ({})",
                requested, minimum
            ))
            .with_suggestion(format!("Set `-s cppstd={}` or higher", minimum)),
        }
    }
}

/// The validated, immutable configuration for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    settings: Settings,
    shared: bool,
    /// Absent (not false) when `shared` is set: a shared build drops the
    /// fPIC axis entirely rather than carrying an ignored value.
    fpic: Option<bool>,
    coverage: bool,
    sanitize: bool,
    fixed_index: bool,
}

impl Configuration {
    /// Validate raw settings and options into a configuration.
    ///
    /// Rules:
    /// - `shared=True` silently drops any explicit `fPIC` value (shared wins).
    /// - `coverage` and `sanitize` may never both be set.
    /// - A declared C++ standard below the recipe minimum is rejected.
    pub fn validate(settings: Settings, raw: RawOptions) -> Result<Configuration, ConfigError> {
        let shared = raw.shared.unwrap_or(defaults::SHARED);
        let coverage = raw.coverage.unwrap_or(defaults::COVERAGE);
        let sanitize = raw.sanitize.unwrap_or(defaults::SANITIZE);
        let fixed_index = raw.fixed_index.unwrap_or(defaults::FIXED_INDEX);

        if coverage && sanitize {
            return Err(ConfigError::Conflict);
        }

        if let Some(requested) = settings.cppstd {
            if requested < recipe::MIN_CPP_STANDARD {
                return Err(ConfigError::UnsupportedStandard {
                    requested,
                    minimum: recipe::MIN_CPP_STANDARD,
                });
            }
        }

        let fpic = if shared {
            if raw.fpic.is_some() {
                tracing::debug!("dropping explicit fPIC value: shared build takes precedence");
            }
            None
        } else {
            Some(raw.fpic.unwrap_or(defaults::FPIC))
        };

        Ok(Configuration {
            settings,
            shared,
            fpic,
            coverage,
            sanitize,
            fixed_index,
        })
    }

    /// Get the platform settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether this is a shared library build.
    pub fn shared(&self) -> bool {
        self.shared
    }

    /// The fPIC option; `None` for shared builds.
    pub fn fpic(&self) -> Option<bool> {
        self.fpic
    }

    /// Whether coverage instrumentation is enabled.
    pub fn coverage(&self) -> bool {
        self.coverage
    }

    /// Whether sanitizer instrumentation is enabled.
    pub fn sanitize(&self) -> bool {
        self.sanitize
    }

    /// Whether the fixed index format is enabled.
    pub fn fixed_index(&self) -> bool {
        self.fixed_index
    }

    /// Whether this is a Debug build.
    pub fn is_debug(&self) -> bool {
        self.settings.build_type == "Debug"
    }

    /// Stable hex digest of this configuration.
    ///
    /// Written next to the generated files so a stale generators directory
    /// can be detected on the next invocation.
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::to_string(self).unwrap_or_default();
        let digest = Sha256::digest(canonical.as_bytes());
        hex::encode(digest)
    }
}
