//! Packaging rule engine.
//!
//! Applies an ordered set of copy rules mapping build-output files into the
//! normalized package tree. Patterns never overlap, so rule order does not
//! change the result, and a rule matching zero files is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::Serialize;
use walkdir::WalkDir;

use crate::util::fs::ensure_dir;

/// Which tree a copy rule reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TreeRoot {
    /// The project source tree
    Source,
    /// The build tree for the active configuration
    Build,
}

/// One packaging copy rule.
#[derive(Debug, Clone, Serialize)]
pub struct CopyRule {
    /// Glob pattern matched against file names
    pattern: String,

    /// Tree the rule reads from
    from: TreeRoot,

    /// Subdirectory inside the tree to scope the walk to
    subdir: Option<PathBuf>,

    /// Destination directory, relative to the package root
    dest: PathBuf,

    /// Preserve the path relative to the rule's base directory; flattened
    /// otherwise
    keep_path: bool,
}

impl CopyRule {
    /// Create a rule copying `pattern` matches from a tree into `dest`.
    pub fn new(pattern: impl Into<String>, from: TreeRoot, dest: impl Into<PathBuf>) -> Self {
        CopyRule {
            pattern: pattern.into(),
            from,
            subdir: None,
            dest: dest.into(),
            keep_path: false,
        }
    }

    /// Scope the rule to a subdirectory of its tree.
    pub fn from_subdir(mut self, subdir: PathBuf) -> Self {
        self.subdir = Some(subdir);
        self
    }

    /// Preserve relative paths instead of flattening.
    pub fn keep_path(mut self, keep: bool) -> Self {
        self.keep_path = keep;
        self
    }

    /// The rule's glob pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The subdirectory scope, if any.
    pub fn subdir(&self) -> Option<&Path> {
        self.subdir.as_deref()
    }

    /// Whether a bare file name matches this rule's pattern.
    pub fn matches_name(&self, name: &str) -> bool {
        Pattern::new(&self.pattern)
            .map(|p| p.matches(name))
            .unwrap_or(false)
    }

    /// Apply the rule, returning how many files were copied.
    fn apply(&self, trees: &PackageTrees) -> Result<usize> {
        let tree = match self.from {
            TreeRoot::Source => &trees.source_dir,
            TreeRoot::Build => &trees.build_dir,
        };
        let base = match &self.subdir {
            Some(sub) => tree.join(sub),
            None => tree.clone(),
        };

        // A missing base directory means zero matches, same as an empty one
        if !base.is_dir() {
            return Ok(0);
        }

        let pattern = Pattern::new(&self.pattern)
            .with_context(|| format!("invalid glob pattern: {}", self.pattern))?;

        let mut copied = 0;
        for entry in WalkDir::new(&base).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !pattern.matches(&name) {
                continue;
            }

            let dst = if self.keep_path {
                let Ok(rel) = entry.path().strip_prefix(&base) else {
                    continue;
                };
                trees.package_dir.join(&self.dest).join(rel)
            } else {
                trees.package_dir.join(&self.dest).join(name.as_ref())
            };

            if let Some(parent) = dst.parent() {
                ensure_dir(parent)?;
            }
            fs::copy(entry.path(), &dst).with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    entry.path().display(),
                    dst.display()
                )
            })?;
            copied += 1;
        }

        Ok(copied)
    }
}

/// The three trees the packaging engine works across.
#[derive(Debug, Clone)]
pub struct PackageTrees {
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub package_dir: PathBuf,
}

/// Outcome of one rule application.
#[derive(Debug, Clone, Serialize)]
pub struct RuleOutcome {
    pub pattern: String,
    pub dest: PathBuf,
    pub copied: usize,
}

/// Report over a full packaging run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PackagingReport {
    pub outcomes: Vec<RuleOutcome>,
}

impl PackagingReport {
    /// Total number of files copied.
    pub fn total(&self) -> usize {
        self.outcomes.iter().map(|o| o.copied).sum()
    }
}

/// Apply every rule against the given trees.
pub fn apply_rules(rules: &[CopyRule], trees: &PackageTrees) -> Result<PackagingReport> {
    let mut report = PackagingReport::default();

    for rule in rules {
        let copied = rule.apply(trees)?;
        tracing::debug!("rule `{}` -> {}: {} file(s)", rule.pattern, rule.dest.display(), copied);
        report.outcomes.push(RuleOutcome {
            pattern: rule.pattern.clone(),
            dest: rule.dest.clone(),
            copied,
        });
    }

    tracing::info!("packaged {} file(s)", report.total());
    Ok(report)
}
