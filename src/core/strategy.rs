//! Grouping strategies
//!
//! Two interchangeable ways of placing a module under a path of group names:
//! qualified-name grouping derives the path from the module's dotted name,
//! explicit grouping reads a stored assignment. [`crate::core::selector`]
//! picks one variant per query session; all subsequent path and name queries
//! for that session flow through it.

use crate::core::model::{GroupPath, Module, ModuleSetSnapshot};
use crate::core::name::{name_segments, short_name, split_qualified_name};
use serde::Serialize;

/// Identifies which strategy variant is serving a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Group paths derived from dotted qualified names
    QualifiedNames,
    /// Group paths read from explicit assignments
    ExplicitPaths,
}

impl StrategyKind {
    /// Stable label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::QualifiedNames => "qualified-names",
            StrategyKind::ExplicitPaths => "explicit-paths",
        }
    }
}

/// Capability surface exposed to the navigation UI.
///
/// One instance serves one query session against one snapshot. Instances are
/// cheap and stateless beyond the snapshot they close over; construct a fresh
/// one whenever the snapshot or the flags may have changed, and never share
/// an instance across sessions observing different snapshots.
pub trait ModuleGrouper {
    /// Which variant this is
    fn kind(&self) -> StrategyKind;

    /// Group labels under which the module's node is shown; empty = root level
    fn group_path(&self, module: &Module) -> GroupPath;

    /// Short label for the module's own tree node
    fn presentable_name(&self, module: &Module) -> String;

    /// Modules of the active snapshot, membership and order untouched
    fn all_modules(&self) -> Vec<Module>;

    /// Group path an arbitrary full module name would be placed under
    fn group_path_for_name(&self, name: &str) -> GroupPath;

    /// Full path at which the module's own node can act as a group for other
    /// modules, when the strategy supports nesting modules under modules
    fn module_as_group_path(&self, module: &Module) -> Option<GroupPath>;
}

/// Derives grouping purely from dotted qualified names.
///
/// `com.foo.Bar` is shown as node `Bar` under the path `com/foo`. Renames
/// pending in the overlay are honored before splitting.
pub struct QualifiedNameGrouper<'a> {
    snapshot: ModuleSetSnapshot<'a>,
}

impl<'a> QualifiedNameGrouper<'a> {
    /// Create a grouper for one session over the given snapshot
    pub fn new(snapshot: ModuleSetSnapshot<'a>) -> Self {
        Self { snapshot }
    }
}

impl ModuleGrouper for QualifiedNameGrouper<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::QualifiedNames
    }

    fn group_path(&self, module: &Module) -> GroupPath {
        split_qualified_name(&self.snapshot.effective_name(module)).0
    }

    fn presentable_name(&self, module: &Module) -> String {
        short_name(&self.snapshot.effective_name(module)).to_string()
    }

    fn all_modules(&self) -> Vec<Module> {
        self.snapshot.modules()
    }

    fn group_path_for_name(&self, name: &str) -> GroupPath {
        split_qualified_name(name).0
    }

    fn module_as_group_path(&self, module: &Module) -> Option<GroupPath> {
        Some(name_segments(&self.snapshot.effective_name(module)))
    }
}

/// Reads grouping from explicit group-path assignments.
///
/// The presentable name is the effective full name, unsplit; a module with no
/// assignment sits at root level. Modules cannot act as groups here, since
/// assignments are independent of module names.
pub struct ExplicitGrouper<'a> {
    snapshot: ModuleSetSnapshot<'a>,
}

impl<'a> ExplicitGrouper<'a> {
    /// Create a grouper for one session over the given snapshot
    pub fn new(snapshot: ModuleSetSnapshot<'a>) -> Self {
        Self { snapshot }
    }
}

impl ModuleGrouper for ExplicitGrouper<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExplicitPaths
    }

    fn group_path(&self, module: &Module) -> GroupPath {
        self.snapshot.explicit_group_path(module)
    }

    fn presentable_name(&self, module: &Module) -> String {
        self.snapshot.effective_name(module)
    }

    fn all_modules(&self) -> Vec<Module> {
        self.snapshot.modules()
    }

    fn group_path_for_name(&self, _name: &str) -> GroupPath {
        GroupPath::new()
    }

    fn module_as_group_path(&self, _module: &Module) -> Option<GroupPath> {
        None
    }
}
