//! The HomeBlocks recipe: declarative metadata and rule tables.
//!
//! Everything package-specific lives here as data - names, version, the
//! upstream requirement table, the packaging copy rules, and the exported
//! component graph. The surrounding modules supply the machinery that
//! evaluates these tables.

use std::path::PathBuf;

use crate::core::component::Component;
use crate::core::requirement::Requirement;
use crate::export::{Condition, Effect, LinkRule};
use crate::packaging::{CopyRule, TreeRoot};
use crate::resolver::{RequirementSet, ResolveError};

/// Package name.
pub const NAME: &str = "homeblocks";

/// Package version, also emitted as PROJECT_VERSION to the build tool.
pub const VERSION: &str = "2.1.2";

/// License identifier; the LICENSE file is packaged under `licenses/`.
pub const LICENSE: &str = "Apache-2.0";

/// Upstream project homepage.
pub const HOMEPAGE: &str = "https://github.com/eBay/HomeBlocks";

/// One-line description.
pub const DESCRIPTION: &str = "Block Store built on HomeStore";

/// Minimum supported C++ standard.
pub const MIN_CPP_STANDARD: u32 = 20;

/// The library artifact exposed by the "homestore" component.
pub const VOLUME_LIB: &str = "homeblocks_volume";

/// The upstream requirement set.
///
/// lz4 is an override: its pin beats any version transitively requested
/// elsewhere in the graph for the same name.
pub fn requirements() -> Result<RequirementSet, ResolveError> {
    RequirementSet::from_requirements([
        Requirement::new("homestore", "~6.18".parse().expect("valid range"))
            .with_channel("oss/master")
            .transitive_headers(true),
        Requirement::new("iomgr", "^11.3".parse().expect("valid range"))
            .with_channel("oss/master")
            .transitive_headers(true),
        Requirement::new("sisl", "^12.2".parse().expect("valid range"))
            .with_channel("oss/master")
            .transitive_headers(true),
        Requirement::new("lz4", "=1.9.4".parse().expect("valid pin")).as_override(),
    ])
}

/// Build/test-only requirements, kept out of the exported graph.
pub fn test_requirements() -> Vec<Requirement> {
    vec![Requirement::new(
        "gtest",
        "=1.14.0".parse().expect("valid pin"),
    )]
}

/// The packaging copy rules.
///
/// Patterns are disjoint, so rule order never changes the result; a rule
/// matching zero files is fine.
pub fn copy_rules() -> Vec<CopyRule> {
    vec![
        CopyRule::new("LICENSE", TreeRoot::Source, "licenses"),
        CopyRule::new("*.lib", TreeRoot::Build, "lib"),
        CopyRule::new("*.a", TreeRoot::Build, "lib"),
        CopyRule::new("*.dylib*", TreeRoot::Build, "lib"),
        CopyRule::new("*.dll*", TreeRoot::Build, "bin"),
        CopyRule::new("*.so*", TreeRoot::Build, "lib"),
        CopyRule::new("*", TreeRoot::Source, "bindings/flip/python")
            .from_subdir(PathBuf::from("src/flip/client/python")),
        CopyRule::new("*.h*", TreeRoot::Source, "include")
            .from_subdir(PathBuf::from("src/include"))
            .keep_path(true),
    ]
}

/// The unconditional component graph.
///
/// "homestore" exposes the volume library and pulls the three upstream
/// components in; "homeblocks" is the umbrella component consumers ask for.
pub fn components() -> Vec<Component> {
    vec![
        Component::new("homestore")
            .with_lib(VOLUME_LIB)
            .with_requires(["homestore::homestore", "iomgr::iomgr", "sisl::sisl"]),
        Component::new("homeblocks").with_requires(["homestore"]),
    ]
}

/// Platform/option-conditioned augmentation rules for the component graph.
pub fn link_rules() -> Vec<LinkRule> {
    vec![
        LinkRule::new("memory", Condition::PosixOs, Effect::SystemLib("pthread")),
        LinkRule::new(
            "memory",
            Condition::SanitizeEnabled,
            Effect::LinkFlag("-fsanitize=address"),
        ),
        LinkRule::new(
            "memory",
            Condition::SanitizeEnabled,
            Effect::LinkFlag("-fsanitize=undefined"),
        ),
    ]
}
