//! Module-set data model
//!
//! This module defines the read surfaces through which the grouping engine
//! sees the outside world: the committed module registry, an optional
//! uncommitted editing overlay, and the snapshot that resolves precedence
//! between the two. The registry and overlay are owned elsewhere; everything
//! here is read-only.
//!
//! Lookup identity is the committed registry name: overlays key their rename
//! and group-path overrides by `Module::name`, so a pending rename never
//! changes the key it is stored under.

use crate::core::error::{GrouperError, Result};
use crate::core::flags::FeatureFlags;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Ordered display-grouping labels; empty means root level
pub type GroupPath = Vec<String>;

/// A named project build unit owned by an external registry.
///
/// A module pending rename keeps its committed name here; the new name lives
/// in the overlay until it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    /// Committed (registry) name
    pub name: String,
}

impl Module {
    /// Create a module handle with the given committed name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Read surface of the committed module registry
///
/// This trait allows for mocking in tests and alternative backends
/// (e.g., a project model service, a workspace file).
#[cfg_attr(test, automock)]
pub trait ModuleRegistry: Send + Sync {
    /// Modules in registry listing order
    fn modules(&self) -> Vec<Module>;

    /// Persisted explicit group-path assignment for a module, if any
    fn group_path(&self, module: &Module) -> Option<GroupPath>;

    /// Whether at least one module currently has a non-empty explicit group path
    fn has_module_groups(&self) -> bool;
}

/// Read surface of an uncommitted editing overlay
///
/// An overlay carries the pending state of a module set before it is saved:
/// its own module listing, name overrides, and group-path overrides. When an
/// overlay is supplied, it supersedes the registry for every lookup.
#[cfg_attr(test, automock)]
pub trait ModuleOverlay: Send + Sync {
    /// Modules in the overlay's listing order
    fn modules(&self) -> Vec<Module>;

    /// Pending new name for a module, if a rename is in flight
    fn new_name(&self, module: &Module) -> Option<String>;

    /// The overlay's group-path assignment for a module, if any
    fn group_path(&self, module: &Module) -> Option<GroupPath>;

    /// Whether at least one module has a non-empty group path in the overlay
    fn has_module_groups(&self) -> bool;
}

/// One consistent view of a module set for the duration of a query session.
///
/// Either the committed registry state alone, or the registry with an
/// editing overlay on top. The overlay, when present, wins every lookup.
/// Callers must not swap the overlay mid-session.
#[derive(Clone, Copy)]
pub struct ModuleSetSnapshot<'a> {
    registry: &'a dyn ModuleRegistry,
    overlay: Option<&'a dyn ModuleOverlay>,
}

impl<'a> ModuleSetSnapshot<'a> {
    /// Snapshot over registry state with an optional overlay
    pub fn new(registry: &'a dyn ModuleRegistry, overlay: Option<&'a dyn ModuleOverlay>) -> Self {
        Self { registry, overlay }
    }

    /// Snapshot of the committed registry state only
    pub fn committed(registry: &'a dyn ModuleRegistry) -> Self {
        Self {
            registry,
            overlay: None,
        }
    }

    /// Snapshot of an editing session: overlay lookups win
    pub fn editing(registry: &'a dyn ModuleRegistry, overlay: &'a dyn ModuleOverlay) -> Self {
        Self {
            registry,
            overlay: Some(overlay),
        }
    }

    /// Module listing of the active side, order untouched
    pub fn modules(&self) -> Vec<Module> {
        match self.overlay {
            Some(overlay) => overlay.modules(),
            None => self.registry.modules(),
        }
    }

    /// The module's effective name: overlay rename if present, else the
    /// committed name
    pub fn effective_name(&self, module: &Module) -> String {
        self.overlay
            .and_then(|overlay| overlay.new_name(module))
            .unwrap_or_else(|| module.name.clone())
    }

    /// The module's explicit group path; empty when no assignment exists
    pub fn explicit_group_path(&self, module: &Module) -> GroupPath {
        let path = match self.overlay {
            Some(overlay) => overlay.group_path(module),
            None => self.registry.group_path(module),
        };
        path.unwrap_or_default()
    }

    /// Whether the active side reports any non-empty explicit group path
    pub fn has_module_groups(&self) -> bool {
        match self.overlay {
            Some(overlay) => overlay.has_module_groups(),
            None => self.registry.has_module_groups(),
        }
    }
}

/// In-memory [ModuleRegistry] for embedders without their own backend,
/// for the CLI snapshot file, and for tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryRegistry {
    /// Modules in listing order
    #[serde(default)]
    modules: Vec<Module>,

    /// Explicit group-path assignments keyed by module name
    #[serde(default)]
    group_paths: HashMap<String, GroupPath>,
}

impl InMemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module to the listing
    pub fn add_module(&mut self, name: impl Into<String>) {
        self.modules.push(Module::new(name));
    }

    /// Persist an explicit group-path assignment for a module name
    pub fn assign_group_path(&mut self, name: impl Into<String>, path: GroupPath) {
        self.group_paths.insert(name.into(), path);
    }

    fn unknown_keys(&self) -> Vec<String> {
        self.group_paths
            .keys()
            .filter(|key| !self.modules.iter().any(|m| &m.name == *key))
            .cloned()
            .collect()
    }
}

impl ModuleRegistry for InMemoryRegistry {
    fn modules(&self) -> Vec<Module> {
        self.modules.clone()
    }

    fn group_path(&self, module: &Module) -> Option<GroupPath> {
        self.group_paths.get(&module.name).cloned()
    }

    fn has_module_groups(&self) -> bool {
        self.group_paths.values().any(|path| !path.is_empty())
    }
}

/// In-memory [ModuleOverlay]: the uncommitted state of an editing session.
///
/// Start from [EditingOverlay::from_registry] to capture the committed state,
/// then apply renames and group-path edits on the copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditingOverlay {
    /// Modules in the overlay's listing order
    #[serde(default)]
    modules: Vec<Module>,

    /// Pending renames keyed by committed module name
    #[serde(default)]
    renames: HashMap<String, String>,

    /// Group-path assignments keyed by committed module name
    #[serde(default)]
    group_paths: HashMap<String, GroupPath>,
}

impl EditingOverlay {
    /// Create an empty overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the committed state of a registry as the overlay's baseline
    pub fn from_registry(registry: &dyn ModuleRegistry) -> Self {
        let modules = registry.modules();
        let group_paths = modules
            .iter()
            .filter_map(|m| registry.group_path(m).map(|path| (m.name.clone(), path)))
            .collect();
        Self {
            modules,
            renames: HashMap::new(),
            group_paths,
        }
    }

    /// Append a module to the overlay's listing
    pub fn add_module(&mut self, name: impl Into<String>) {
        self.modules.push(Module::new(name));
    }

    /// Record a pending rename for a committed module name
    pub fn rename(&mut self, name: impl Into<String>, new_name: impl Into<String>) {
        self.renames.insert(name.into(), new_name.into());
    }

    /// Set the overlay's group-path assignment for a committed module name
    pub fn set_group_path(&mut self, name: impl Into<String>, path: GroupPath) {
        self.group_paths.insert(name.into(), path);
    }

    /// Drop the overlay's group-path assignment for a committed module name
    pub fn clear_group_path(&mut self, name: &str) {
        self.group_paths.remove(name);
    }

    fn unknown_keys(&self) -> Vec<String> {
        self.renames
            .keys()
            .chain(self.group_paths.keys())
            .filter(|key| !self.modules.iter().any(|m| &m.name == *key))
            .cloned()
            .collect()
    }
}

impl ModuleOverlay for EditingOverlay {
    fn modules(&self) -> Vec<Module> {
        self.modules.clone()
    }

    fn new_name(&self, module: &Module) -> Option<String> {
        self.renames.get(&module.name).cloned()
    }

    fn group_path(&self, module: &Module) -> Option<GroupPath> {
        self.group_paths.get(&module.name).cloned()
    }

    fn has_module_groups(&self) -> bool {
        self.group_paths.values().any(|path| !path.is_empty())
    }
}

/// On-disk description of a module-set snapshot, consumed by the CLI.
///
/// ```json
/// {
///   "registry": {
///     "modules": [{"name": "com.foo.Bar"}],
///     "group_paths": {"com.foo.Bar": ["legacy", "foo"]}
///   },
///   "overlay": { "modules": [...], "renames": {...}, "group_paths": {...} },
///   "flags": { "qualified_module_names": true }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Committed registry state
    pub registry: InMemoryRegistry,

    /// Optional uncommitted editing overlay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<EditingOverlay>,

    /// Feature flags; process defaults apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<FeatureFlags>,
}

impl SnapshotFile {
    /// Load and validate a snapshot description from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GrouperError::SnapshotNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let file: SnapshotFile = serde_json::from_str(&content)?;
        file.validate()?;
        Ok(file)
    }

    /// Check that every rename and group-path key names a listed module
    pub fn validate(&self) -> Result<()> {
        let mut unknown = self.registry.unknown_keys();
        if let Some(overlay) = &self.overlay {
            unknown.extend(overlay.unknown_keys());
        }
        if unknown.is_empty() {
            Ok(())
        } else {
            unknown.sort();
            unknown.dedup();
            Err(GrouperError::invalid_snapshot(format!(
                "assignments reference unknown modules: {}",
                unknown.join(", ")
            )))
        }
    }

    /// Snapshot view over this file's registry and overlay
    pub fn snapshot(&self) -> ModuleSetSnapshot<'_> {
        ModuleSetSnapshot::new(
            &self.registry,
            self.overlay.as_ref().map(|o| o as &dyn ModuleOverlay),
        )
    }
}
