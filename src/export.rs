//! Component export.
//!
//! Builds the consumer-facing component manifest: the component graph, the
//! upstream requirements it references, and the platform/option-conditioned
//! link augmentations. The graph is checked for cycles and dangling
//! references before anything is exported.

use miette::Diagnostic as MietteDiagnostic;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use serde::Serialize;
use thiserror::Error;

use crate::core::component::Component;
use crate::core::config::Configuration;
use crate::core::requirement::Requirement;
use crate::recipe;
use crate::resolver::RequirementSet;

/// Error while building the export manifest.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ExportError {
    /// The component graph contains a cycle.
    #[error("component graph contains a cycle through `{component}`")]
    #[diagnostic(code(homepack::export::cycle))]
    Cycle { component: String },

    /// A component requires something that is neither a sibling component
    /// nor an upstream requirement.
    #[error("component `{component}` requires unknown `{requires}`")]
    #[diagnostic(code(homepack::export::unknown_require))]
    UnknownRequire { component: String, requires: String },
}

/// A condition guarding a link rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Target operating system is POSIX-like
    PosixOs,
    /// The sanitize option is enabled
    SanitizeEnabled,
}

impl Condition {
    /// Evaluate the condition against a configuration.
    pub fn holds(&self, config: &Configuration) -> bool {
        match self {
            Condition::PosixOs => config.settings().is_posix(),
            Condition::SanitizeEnabled => config.sanitize(),
        }
    }
}

/// The effect a link rule applies to its component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Append a system library
    SystemLib(&'static str),
    /// Append a flag to both the shared-library and executable link sets
    LinkFlag(&'static str),
}

/// One condition -> effect augmentation of the component graph.
///
/// Rules are plain data so each one is independently testable; they are
/// evaluated exactly once per build invocation.
#[derive(Debug, Clone, Copy)]
pub struct LinkRule {
    component: &'static str,
    condition: Condition,
    effect: Effect,
}

impl LinkRule {
    /// Create a rule targeting `component`.
    pub fn new(component: &'static str, condition: Condition, effect: Effect) -> Self {
        LinkRule {
            component,
            condition,
            effect,
        }
    }

    /// The component this rule augments.
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// Apply the rule to a component set if its condition holds.
    fn apply(&self, config: &Configuration, components: &mut Vec<Component>) {
        if !self.condition.holds(config) {
            return;
        }

        let idx = match components.iter().position(|c| c.name() == self.component) {
            Some(idx) => idx,
            None => {
                components.push(Component::new(self.component));
                components.len() - 1
            }
        };
        let component = &mut components[idx];

        match self.effect {
            Effect::SystemLib(lib) => component.add_system_lib(lib),
            Effect::LinkFlag(flag) => component.add_link_flag(flag),
        }
    }
}

/// The exported component manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentManifest {
    pub name: String,
    pub version: String,
    pub components: Vec<Component>,
    pub requirements: Vec<Requirement>,
}

impl ComponentManifest {
    /// Build a manifest from component and rule tables.
    ///
    /// Fails rather than exporting a cyclic or dangling graph.
    pub fn build(
        config: &Configuration,
        mut components: Vec<Component>,
        link_rules: &[LinkRule],
        requirements: &RequirementSet,
    ) -> Result<ComponentManifest, ExportError> {
        for rule in link_rules {
            rule.apply(config, &mut components);
        }

        check_graph(&components, requirements)?;

        Ok(ComponentManifest {
            name: recipe::NAME.to_string(),
            version: recipe::VERSION.to_string(),
            components,
            requirements: requirements.iter().cloned().collect(),
        })
    }

    /// Look up a component by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }
}

/// Build the HomeBlocks manifest for a configuration.
pub fn manifest(config: &Configuration) -> anyhow::Result<ComponentManifest> {
    let requirements = recipe::requirements()?;
    let manifest = ComponentManifest::build(
        config,
        recipe::components(),
        &recipe::link_rules(),
        &requirements,
    )?;
    Ok(manifest)
}

/// Validate that every `requires` edge resolves and that the graph is a DAG.
fn check_graph(components: &[Component], requirements: &RequirementSet) -> Result<(), ExportError> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for component in components {
        graph.add_node(component.name());
    }

    for component in components {
        for requires in component.requires() {
            // `pkg::component` refers into an upstream requirement; bare
            // names must be sibling components.
            if let Some((package, _)) = requires.split_once("::") {
                if requirements.get(package).is_none() {
                    return Err(ExportError::UnknownRequire {
                        component: component.name().to_string(),
                        requires: requires.clone(),
                    });
                }
                graph.add_edge(component.name(), requires.as_str(), ());
            } else {
                if !components.iter().any(|c| c.name() == requires) {
                    return Err(ExportError::UnknownRequire {
                        component: component.name().to_string(),
                        requires: requires.clone(),
                    });
                }
                graph.add_edge(component.name(), requires.as_str(), ());
            }
        }
    }

    toposort(&graph, None).map_err(|cycle| ExportError::Cycle {
        component: cycle.node_id().to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::RawOptions;
    use crate::core::settings::Settings;

    fn config(os: &str, sanitize: bool) -> Configuration {
        let settings = Settings {
            os: os.to_string(),
            arch: "x86_64".to_string(),
            compiler: "gcc".to_string(),
            build_type: "Debug".to_string(),
            cppstd: None,
        };
        let raw = RawOptions {
            sanitize: Some(sanitize),
            ..Default::default()
        };
        Configuration::validate(settings, raw).unwrap()
    }

    #[test]
    fn test_manifest_graph_shape() {
        let manifest = manifest(&config("Linux", false)).unwrap();

        let homeblocks = manifest.component("homeblocks").unwrap();
        assert_eq!(homeblocks.requires(), ["homestore"]);

        let homestore = manifest.component("homestore").unwrap();
        assert_eq!(homestore.libs(), ["homeblocks_volume"]);
        assert_eq!(
            homestore.requires(),
            ["homestore::homestore", "iomgr::iomgr", "sisl::sisl"]
        );
    }

    #[test]
    fn test_pthread_on_linux_only() {
        let manifest = manifest(&config("Linux", false)).unwrap();
        let memory = manifest.component("memory").unwrap();
        assert_eq!(memory.system_libs(), ["pthread"]);

        let manifest = super::manifest(&config("Windows", false)).unwrap();
        // No rule fired, so the memory component is never created
        assert!(manifest.component("memory").is_none());
    }

    #[test]
    fn test_sanitize_adds_both_flag_sets() {
        let manifest = manifest(&config("Linux", true)).unwrap();
        let memory = manifest.component("memory").unwrap();

        assert_eq!(
            memory.shared_link_flags(),
            ["-fsanitize=address", "-fsanitize=undefined"]
        );
        assert_eq!(
            memory.exe_link_flags(),
            ["-fsanitize=address", "-fsanitize=undefined"]
        );
    }

    #[test]
    fn test_cycle_is_rejected() {
        let components = vec![
            Component::new("a").with_requires(["b"]),
            Component::new("b").with_requires(["a"]),
        ];
        let requirements = RequirementSet::new();

        let err = ComponentManifest::build(&config("Linux", false), components, &[], &requirements)
            .unwrap_err();
        assert!(matches!(err, ExportError::Cycle { .. }));
    }

    #[test]
    fn test_unknown_require_is_rejected() {
        let components = vec![Component::new("a").with_requires(["zstd::zstd"])];
        let requirements = RequirementSet::new();

        let err = ComponentManifest::build(&config("Linux", false), components, &[], &requirements)
            .unwrap_err();
        match err {
            ExportError::UnknownRequire {
                component,
                requires,
            } => {
                assert_eq!(component, "a");
                assert_eq!(requires, "zstd::zstd");
            }
            other => panic!("expected UnknownRequire, got {:?}", other),
        }
    }

    #[test]
    fn test_no_edge_back_to_homeblocks() {
        let manifest = manifest(&config("Linux", true)).unwrap();
        for component in &manifest.components {
            assert!(
                !component.requires().iter().any(|r| r == "homeblocks"),
                "`{}` must not depend back on the umbrella component",
                component.name()
            );
        }
    }
}
