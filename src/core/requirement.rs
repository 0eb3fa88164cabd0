//! Upstream requirement specification.
//!
//! A Requirement describes what the packaged library needs from an upstream
//! package: a version range or pin, a channel qualifier, and propagation
//! flags.

use semver::{Version, VersionReq};
use serde::Serialize;

/// A declared upstream requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Requirement {
    /// Upstream package name
    name: String,

    /// Version range or pin
    version_req: VersionReq,

    /// Channel qualifier (e.g. "oss/master"), carried opaquely
    channel: Option<String>,

    /// Whether this package's headers are re-exposed to our consumers
    transitive_headers: bool,

    /// Whether this version pin overrides any other requested version for
    /// the same package anywhere in the transitive graph
    is_override: bool,
}

impl Requirement {
    /// Create a new requirement with a version range.
    pub fn new(name: impl Into<String>, version_req: VersionReq) -> Self {
        Requirement {
            name: name.into(),
            version_req,
            channel: None,
            transitive_headers: false,
            is_override: false,
        }
    }

    /// Set the channel qualifier.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Mark this requirement's headers as transitively exposed.
    pub fn transitive_headers(mut self, enabled: bool) -> Self {
        self.transitive_headers = enabled;
        self
    }

    /// Mark this requirement as a graph-wide version override.
    pub fn as_override(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the version requirement.
    pub fn version_req(&self) -> &VersionReq {
        &self.version_req
    }

    /// Get the channel qualifier.
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// Whether headers propagate to consumers.
    pub fn has_transitive_headers(&self) -> bool {
        self.transitive_headers
    }

    /// Whether this requirement overrides other requested versions.
    pub fn is_override(&self) -> bool {
        self.is_override
    }

    /// Check whether a concrete version satisfies this requirement.
    pub fn matches_version(&self, version: &Version) -> bool {
        self.version_req.matches(version)
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.version_req)?;
        if let Some(ref channel) = self.channel {
            write!(f, "@{}", channel)?;
        }
        if self.is_override {
            write!(f, " (override)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_builder() {
        let req = Requirement::new("homestore", "~6.18".parse().unwrap())
            .with_channel("oss/master")
            .transitive_headers(true);

        assert_eq!(req.name(), "homestore");
        assert_eq!(req.channel(), Some("oss/master"));
        assert!(req.has_transitive_headers());
        assert!(!req.is_override());
    }

    #[test]
    fn test_override_pin_matches_exact_version() {
        let req = Requirement::new("lz4", "=1.9.4".parse().unwrap()).as_override();

        assert!(req.is_override());
        assert!(req.matches_version(&"1.9.4".parse().unwrap()));
        assert!(!req.matches_version(&"1.9.3".parse().unwrap()));
    }

    #[test]
    fn test_display_includes_channel_and_override() {
        let req = Requirement::new("lz4", "=1.9.4".parse().unwrap()).as_override();
        assert_eq!(req.to_string(), "lz4/=1.9.4 (override)");

        let req = Requirement::new("iomgr", "^11.3".parse().unwrap()).with_channel("oss/master");
        assert_eq!(req.to_string(), "iomgr/^11.3@oss/master");
    }
}
