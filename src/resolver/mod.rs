//! Upstream requirement resolution.
//!
//! This module builds the ordered, deduplicated requirement set handed to
//! the upstream package resolver. The set is pure data: all override and
//! deduplication semantics are applied here, while the actual
//! dependency-solving and fetching is the upstream resolver's business.

pub mod errors;

use std::collections::HashMap;

pub use errors::ResolveError;

use crate::core::requirement::Requirement;

/// An ordered, deduplicated set of requirements, keyed by package name.
///
/// Insertion order is preserved. Exactly one entry exists per package name:
/// an override pin beats any plain range requested for the same name, plain
/// duplicates keep the first entry, and two overrides that disagree on the
/// pin are a hard error.
#[derive(Debug, Clone, Default)]
pub struct RequirementSet {
    entries: Vec<Requirement>,
    by_name: HashMap<String, usize>,
}

impl RequirementSet {
    /// Create an empty requirement set.
    pub fn new() -> Self {
        RequirementSet::default()
    }

    /// Build a set from an iterator of requirements.
    pub fn from_requirements(
        reqs: impl IntoIterator<Item = Requirement>,
    ) -> Result<Self, ResolveError> {
        let mut set = RequirementSet::new();
        for req in reqs {
            set.insert(req)?;
        }
        Ok(set)
    }

    /// Insert a requirement, applying override and deduplication semantics.
    pub fn insert(&mut self, req: Requirement) -> Result<(), ResolveError> {
        let existing_idx = self.by_name.get(req.name()).copied();
        let Some(idx) = existing_idx else {
            self.by_name.insert(req.name().to_string(), self.entries.len());
            self.entries.push(req);
            return Ok(());
        };

        let existing = &self.entries[idx];
        match (existing.is_override(), req.is_override()) {
            (true, true) => {
                if existing.version_req() != req.version_req() {
                    return Err(ResolveError::VersionConflict {
                        package: req.name().to_string(),
                        pinned: existing.version_req().to_string(),
                        requested: req.version_req().to_string(),
                    });
                }
                // Same pin declared twice is harmless
                Ok(())
            }
            (true, false) => {
                tracing::debug!(
                    "requirement `{}` superseded by override `{}`",
                    req,
                    existing
                );
                Ok(())
            }
            (false, true) => {
                tracing::debug!(
                    "override `{}` replaces previously requested `{}`",
                    req,
                    existing
                );
                self.entries[idx] = req;
                Ok(())
            }
            (false, false) => {
                tracing::debug!(
                    "duplicate requirement for `{}`: keeping `{}`",
                    req.name(),
                    existing
                );
                Ok(())
            }
        }
    }

    /// Look up a requirement by package name.
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Iterate requirements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.entries.iter()
    }

    /// Number of distinct packages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a Requirement;
    type IntoIter = std::slice::Iter<'a, Requirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
