//! Grouping Strategy Integration Tests
//!
//! End-to-end tests for strategy selection and query precedence:
//! - Flag and explicit-group driven selection
//! - Overlay precedence for names and group paths
//! - Listing order and membership pass-through

use modgroup::{
    select_grouper, EditingOverlay, FeatureFlags, InMemoryRegistry, Module, ModuleSetSnapshot,
    StrategyKind,
};

fn flags(qualified: bool) -> FeatureFlags {
    FeatureFlags {
        qualified_module_names: qualified,
    }
}

// =============================================================================
// Strategy selection
// =============================================================================

#[test]
fn test_flag_enabled_no_groups_uses_qualified_names() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("com.foo.Bar");

    let snapshot = ModuleSetSnapshot::committed(&registry);
    let grouper = select_grouper(snapshot, &flags(true));

    assert_eq!(grouper.kind(), StrategyKind::QualifiedNames);
    let module = Module::new("com.foo.Bar");
    assert_eq!(grouper.group_path(&module), vec!["com", "foo"]);
    assert_eq!(grouper.presentable_name(&module), "Bar");
}

#[test]
fn test_explicit_groups_win_over_enabled_flag() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("com.foo.Bar");
    registry.add_module("plain");
    registry.assign_group_path("plain", vec!["manual".to_string()]);

    let grouper = select_grouper(ModuleSetSnapshot::committed(&registry), &flags(true));

    assert_eq!(grouper.kind(), StrategyKind::ExplicitPaths);
    // Qualified names are not split under explicit grouping
    assert_eq!(grouper.presentable_name(&Module::new("com.foo.Bar")), "com.foo.Bar");
    assert!(grouper.group_path(&Module::new("com.foo.Bar")).is_empty());
    assert_eq!(grouper.group_path(&Module::new("plain")), vec!["manual"]);
}

#[test]
fn test_flag_disabled_uses_explicit_regardless_of_groups() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("com.foo.Bar");

    let grouper = select_grouper(ModuleSetSnapshot::committed(&registry), &flags(false));
    assert_eq!(grouper.kind(), StrategyKind::ExplicitPaths);
    drop(grouper);

    registry.assign_group_path("com.foo.Bar", vec!["g".to_string()]);
    let grouper = select_grouper(ModuleSetSnapshot::committed(&registry), &flags(false));
    assert_eq!(grouper.kind(), StrategyKind::ExplicitPaths);
}

#[test]
fn test_selection_is_reevaluated_per_session() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("com.foo.Bar");

    let grouper = select_grouper(ModuleSetSnapshot::committed(&registry), &flags(true));
    assert_eq!(grouper.kind(), StrategyKind::QualifiedNames);
    drop(grouper);

    // A group assigned between sessions flips the next selection
    registry.assign_group_path("com.foo.Bar", vec!["manual".to_string()]);
    let grouper = select_grouper(ModuleSetSnapshot::committed(&registry), &flags(true));
    assert_eq!(grouper.kind(), StrategyKind::ExplicitPaths);
}

// =============================================================================
// Overlay precedence
// =============================================================================

#[test]
fn test_overlay_rename_drives_qualified_grouping() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("flat");

    let mut overlay = EditingOverlay::from_registry(&registry);
    overlay.rename("flat", "deep.nested.Name");

    let snapshot = ModuleSetSnapshot::editing(&registry, &overlay);
    let grouper = select_grouper(snapshot, &flags(true));

    let module = Module::new("flat");
    assert_eq!(grouper.group_path(&module), vec!["deep", "nested"]);
    assert_eq!(grouper.presentable_name(&module), "Name");
}

#[test]
fn test_overlay_group_assignment_forces_explicit_strategy() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("com.foo.Bar");

    // Registry has no groups, but the uncommitted overlay assigns one
    let mut overlay = EditingOverlay::from_registry(&registry);
    overlay.set_group_path("com.foo.Bar", vec!["pending".to_string()]);

    let snapshot = ModuleSetSnapshot::editing(&registry, &overlay);
    let grouper = select_grouper(snapshot, &flags(true));

    assert_eq!(grouper.kind(), StrategyKind::ExplicitPaths);
    assert_eq!(grouper.group_path(&Module::new("com.foo.Bar")), vec!["pending"]);
}

#[test]
fn test_overlay_rename_affects_explicit_presentable_name() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("old.Name");
    registry.assign_group_path("old.Name", vec!["g".to_string()]);

    let mut overlay = EditingOverlay::from_registry(&registry);
    overlay.rename("old.Name", "new.Name");

    let snapshot = ModuleSetSnapshot::editing(&registry, &overlay);
    let grouper = select_grouper(snapshot, &flags(true));

    assert_eq!(grouper.kind(), StrategyKind::ExplicitPaths);
    // Effective (renamed) full name, unsplit
    assert_eq!(grouper.presentable_name(&Module::new("old.Name")), "new.Name");
}

#[test]
fn test_committed_snapshot_ignores_overlay_state() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("com.foo.Bar");

    let mut overlay = EditingOverlay::from_registry(&registry);
    overlay.set_group_path("com.foo.Bar", vec!["pending".to_string()]);

    // Committed view built from the registry alone
    let grouper = select_grouper(ModuleSetSnapshot::committed(&registry), &flags(true));
    assert_eq!(grouper.kind(), StrategyKind::QualifiedNames);
    assert_eq!(grouper.group_path(&Module::new("com.foo.Bar")), vec!["com", "foo"]);
}

// =============================================================================
// Listing pass-through
// =============================================================================

#[test]
fn test_all_modules_keeps_registry_order_and_membership() {
    let mut registry = InMemoryRegistry::new();
    for name in ["c.third", "a.first", "b.second"] {
        registry.add_module(name);
    }

    let grouper = select_grouper(ModuleSetSnapshot::committed(&registry), &flags(true));
    let names: Vec<_> = grouper.all_modules().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["c.third", "a.first", "b.second"]);
}

#[test]
fn test_all_modules_uses_overlay_listing_when_present() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("committed.only");

    let mut overlay = EditingOverlay::from_registry(&registry);
    overlay.add_module("added.in.overlay");

    let snapshot = ModuleSetSnapshot::editing(&registry, &overlay);
    let grouper = select_grouper(snapshot, &flags(true));

    let names: Vec<_> = grouper.all_modules().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["committed.only", "added.in.overlay"]);
}

// =============================================================================
// Edge-case names
// =============================================================================

#[test]
fn test_consecutive_separators_preserved_in_derived_path() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("a..b");

    let grouper = select_grouper(ModuleSetSnapshot::committed(&registry), &flags(true));
    let module = Module::new("a..b");
    assert_eq!(grouper.group_path(&module), vec!["a", ""]);
    assert_eq!(grouper.presentable_name(&module), "b");
}

#[test]
fn test_trailing_separator_yields_empty_presentable_name() {
    let mut registry = InMemoryRegistry::new();
    registry.add_module("group.");

    let grouper = select_grouper(ModuleSetSnapshot::committed(&registry), &flags(true));
    let module = Module::new("group.");
    assert_eq!(grouper.group_path(&module), vec!["group"]);
    assert_eq!(grouper.presentable_name(&module), "");
}
