//! Consumer-facing component description.
//!
//! A Component is one unit of the packaged library: the libraries it
//! exposes, the components it requires (local or upstream, the latter
//! written `package::component`), and the system libraries and link flags
//! consumers must carry.

use serde::Serialize;

/// One exported component of the packaged library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Component name
    name: String,

    /// Libraries this component exposes
    libs: Vec<String>,

    /// Required components; `pkg::comp` refers to an upstream requirement
    requires: Vec<String>,

    /// System libraries consumers must link
    system_libs: Vec<String>,

    /// Flags appended when linking a shared library against this component
    shared_link_flags: Vec<String>,

    /// Flags appended when linking an executable against this component
    exe_link_flags: Vec<String>,
}

impl Component {
    /// Create a new, empty component.
    pub fn new(name: impl Into<String>) -> Self {
        Component {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an exposed library.
    pub fn with_lib(mut self, lib: impl Into<String>) -> Self {
        self.libs.push(lib.into());
        self
    }

    /// Add required components.
    pub fn with_requires(mut self, requires: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.requires.extend(requires.into_iter().map(|r| r.into()));
        self
    }

    /// Append a system library.
    pub fn add_system_lib(&mut self, lib: impl Into<String>) {
        self.system_libs.push(lib.into());
    }

    /// Append a flag to both the shared-library and executable link flag sets.
    pub fn add_link_flag(&mut self, flag: impl Into<String>) {
        let flag = flag.into();
        self.shared_link_flags.push(flag.clone());
        self.exe_link_flags.push(flag);
    }

    /// Get the component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the exposed libraries.
    pub fn libs(&self) -> &[String] {
        &self.libs
    }

    /// Get the required component names.
    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    /// Get the system libraries.
    pub fn system_libs(&self) -> &[String] {
        &self.system_libs
    }

    /// Get the shared-library link flags.
    pub fn shared_link_flags(&self) -> &[String] {
        &self.shared_link_flags
    }

    /// Get the executable link flags.
    pub fn exe_link_flags(&self) -> &[String] {
        &self.exe_link_flags
    }
}
