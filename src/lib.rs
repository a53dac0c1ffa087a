//! modgroup - hierarchical display grouping for project modules
//!
//! This library computes, for a set of named build/project modules, the
//! grouping used by a project-navigation tree: each module is placed under a
//! path of group names and given a short presentable label. It is designed to
//! be consumed by:
//! - Navigation UI layers that own the actual tree rendering
//! - The CLI binary (src/bin/modgroup.rs) for inspecting derived groupings
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file) and **core/**: Pure logic, no CLI concerns
//! - **bin/modgroup.rs**: Thin wrapper that calls the library
//!
//! The module registry, persistence of explicit group assignments, and the
//! UI itself are external collaborators reached through the narrow read
//! traits in [`crate::core::model`]. This crate never mutates them.

pub mod core;

// Re-export the capability surface consumed by navigation UIs
pub use crate::core::error::{GrouperError, Result};
pub use crate::core::flags::{global_flags, set_global_flags, FeatureFlags};
pub use crate::core::model::{
    EditingOverlay, GroupPath, InMemoryRegistry, Module, ModuleOverlay, ModuleRegistry,
    ModuleSetSnapshot, SnapshotFile,
};
pub use crate::core::name::{short_name, split_qualified_name, NAME_SEPARATOR};
pub use crate::core::report::{GroupingReport, GroupingRow};
pub use crate::core::selector::{select_grouper, select_grouper_global};
pub use crate::core::strategy::{ExplicitGrouper, ModuleGrouper, QualifiedNameGrouper, StrategyKind};

/// Library version, sourced from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
