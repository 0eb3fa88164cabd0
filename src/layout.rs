//! Build directory layout resolution.
//!
//! A pure function of the validated configuration: identical configurations
//! always resolve to identical paths. The build subdirectory name encodes
//! the instrumentation mode, so a sanitized tree never collides with a
//! coverage or plain tree.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::config::Configuration;
use crate::recipe;

/// Per-component directory overrides, where a component deviates from the
/// default package layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentLayout {
    /// Include dirs in the source tree
    pub source_include_dirs: Vec<PathBuf>,

    /// Lib dirs in the build tree
    pub build_lib_dirs: Vec<PathBuf>,

    /// Libraries this component contributes to the package
    pub package_libs: Vec<String>,
}

/// Resolved directory layout for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPaths {
    /// Source tree root, relative to the project root
    pub source_dir: PathBuf,

    /// Build tree for this configuration
    pub build_dir: PathBuf,

    /// Where generated files (toolchain script, manifests) land
    pub generators_dir: PathBuf,

    /// Default include dir inside the package tree
    pub package_include_dir: PathBuf,

    /// Default lib dir inside the package tree
    pub package_lib_dir: PathBuf,

    /// Components with directory overrides
    pub components: BTreeMap<String, ComponentLayout>,
}

impl LayoutPaths {
    /// Resolve the layout for a configuration.
    pub fn resolve(config: &Configuration) -> LayoutPaths {
        // First-match precedence: sanitize beats coverage beats build_type
        let build_subdir = if config.sanitize() {
            "Sanitized".to_string()
        } else if config.coverage() {
            "Coverage".to_string()
        } else {
            config.settings().build_type.clone()
        };

        let build_dir = PathBuf::from("build").join(build_subdir);
        let generators_dir = build_dir.join("generators");

        let mut components = BTreeMap::new();
        components.insert(
            "homestore".to_string(),
            ComponentLayout {
                source_include_dirs: vec![PathBuf::from("src/include")],
                build_lib_dirs: vec![PathBuf::from("src/lib/volume")],
                package_libs: vec![recipe::VOLUME_LIB.to_string()],
            },
        );

        LayoutPaths {
            source_dir: PathBuf::from("."),
            build_dir,
            generators_dir,
            package_include_dir: PathBuf::from("include"),
            package_lib_dir: PathBuf::from("lib"),
            components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::RawOptions;
    use crate::core::settings::Settings;

    fn config(build_type: &str, coverage: bool, sanitize: bool) -> Configuration {
        let settings = Settings {
            os: "Linux".to_string(),
            arch: "x86_64".to_string(),
            compiler: "gcc".to_string(),
            build_type: build_type.to_string(),
            cppstd: None,
        };
        let raw = RawOptions {
            coverage: Some(coverage),
            sanitize: Some(sanitize),
            ..Default::default()
        };
        Configuration::validate(settings, raw).unwrap()
    }

    #[test]
    fn test_plain_build_uses_build_type() {
        let layout = LayoutPaths::resolve(&config("RelWithDebInfo", false, false));
        assert_eq!(layout.build_dir, PathBuf::from("build/RelWithDebInfo"));
        assert_eq!(
            layout.generators_dir,
            PathBuf::from("build/RelWithDebInfo/generators")
        );
    }

    #[test]
    fn test_sanitize_wins_over_build_type() {
        let layout = LayoutPaths::resolve(&config("Debug", false, true));
        assert_eq!(layout.build_dir, PathBuf::from("build/Sanitized"));
    }

    #[test]
    fn test_coverage_subdir() {
        let layout = LayoutPaths::resolve(&config("Debug", true, false));
        assert_eq!(layout.build_dir, PathBuf::from("build/Coverage"));
    }

    #[test]
    fn test_homestore_component_overrides() {
        let layout = LayoutPaths::resolve(&config("Debug", false, false));
        let homestore = layout.components.get("homestore").unwrap();

        assert_eq!(
            homestore.source_include_dirs,
            vec![PathBuf::from("src/include")]
        );
        assert_eq!(
            homestore.build_lib_dirs,
            vec![PathBuf::from("src/lib/volume")]
        );
        assert_eq!(homestore.package_libs, vec!["homeblocks_volume"]);

        // Package defaults stay untouched by the override
        assert_eq!(layout.package_include_dir, PathBuf::from("include"));
        assert_eq!(layout.package_lib_dir, PathBuf::from("lib"));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let config = config("Debug", false, true);
        assert_eq!(LayoutPaths::resolve(&config), LayoutPaths::resolve(&config));
    }
}
