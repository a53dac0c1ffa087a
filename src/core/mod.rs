//! Core module for the modgroup grouping engine
//!
//! This module provides the foundational types and traits for deriving a
//! navigation-tree grouping from a module set. It follows a modular
//! architecture for testability and extensibility.
//!
//! # Architecture
//!
//! - `model`: Core data structures (Module, GroupPath, snapshot and registry traits)
//! - `error`: Error types using thiserror
//! - `name`: Qualified-name splitting (group path + short name)
//! - `strategy`: ModuleGrouper trait + the two grouping strategies
//! - `selector`: Per-session strategy selection
//! - `flags`: Feature flags, explicit and process-wide
//! - `report`: Grouping reports for the CLI and embedders

pub mod error;
pub mod flags;
pub mod model;
pub mod name;
pub mod report;
pub mod selector;
pub mod strategy;

// Re-export commonly used types
pub use error::{GrouperError, Result};
pub use flags::{global_flags, set_global_flags, FeatureFlags};
pub use model::{
    EditingOverlay, GroupPath, InMemoryRegistry, Module, ModuleOverlay, ModuleRegistry,
    ModuleSetSnapshot, SnapshotFile,
};
pub use name::{name_segments, short_name, split_qualified_name, NAME_SEPARATOR};
pub use report::{GroupingReport, GroupingRow};
pub use selector::{select_grouper, select_grouper_global};
pub use strategy::{ExplicitGrouper, ModuleGrouper, QualifiedNameGrouper, StrategyKind};
