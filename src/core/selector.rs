//! Strategy selection
//!
//! Explicit assignments take precedence over name-derived grouping even when
//! the feature flag favors qualified names, so user-assigned structure is
//! never silently discarded. Selection is re-evaluated fresh on every call:
//! the overlay or the flags may change between sessions, and strategy
//! instances are too cheap to be worth caching.

use crate::core::flags::{global_flags, FeatureFlags};
use crate::core::model::ModuleSetSnapshot;
use crate::core::strategy::{ExplicitGrouper, ModuleGrouper, QualifiedNameGrouper};

/// Choose the grouping strategy for one query session.
///
/// Explicit grouping is used when the qualified-names flag is off or when the
/// active snapshot already carries a non-empty explicit group path; otherwise
/// grouping is derived from qualified names. An empty module set reports no
/// explicit groups, leaving the flag alone to decide.
pub fn select_grouper<'a>(
    snapshot: ModuleSetSnapshot<'a>,
    flags: &FeatureFlags,
) -> Box<dyn ModuleGrouper + 'a> {
    if !flags.qualified_module_names || snapshot.has_module_groups() {
        Box::new(ExplicitGrouper::new(snapshot))
    } else {
        Box::new(QualifiedNameGrouper::new(snapshot))
    }
}

/// [select_grouper] against the process-wide flag store
pub fn select_grouper_global(snapshot: ModuleSetSnapshot<'_>) -> Box<dyn ModuleGrouper + '_> {
    select_grouper(snapshot, &global_flags())
}
