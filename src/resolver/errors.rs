//! Resolution error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Error while building the requirement set.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ResolveError {
    /// Two explicit override pins disagree for the same package.
    #[error("version conflict for `{package}`")]
    #[diagnostic(
        code(homepack::resolve::version_conflict),
        help("Align both overrides on a single pin for `{package}`")
    )]
    VersionConflict {
        package: String,
        pinned: String,
        requested: String,
    },
}

impl ResolveError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::VersionConflict {
                package,
                pinned,
                requested,
            } => Diagnostic::error(format!("version conflict for `{}`", package))
                .with_context(format!("already pinned to {} by an override", pinned))
                .with_context(format!("a second override requests {}", requested))
                .with_suggestion(format!(
                    "Align both overrides of `{}` on a single pin",
                    package
                )),
        }
    }
}
