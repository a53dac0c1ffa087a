//! Grouping reports
//!
//! Flattened view of a grouping session: one row per module with its derived
//! group path and presentable name. The CLI prints these; embedders can also
//! serialize them for diffing grouping behavior across flag settings.

use crate::core::model::GroupPath;
use crate::core::strategy::{ModuleGrouper, StrategyKind};
use serde::Serialize;

/// One module's derived placement
#[derive(Debug, Clone, Serialize)]
pub struct GroupingRow {
    /// Committed module name
    pub module: String,
    /// Derived group path; empty = root level
    pub group_path: GroupPath,
    /// Short label shown for the module's node
    pub presentable_name: String,
}

/// Derived grouping for every module of one session
#[derive(Debug, Clone, Serialize)]
pub struct GroupingReport {
    /// Which strategy produced the rows
    pub strategy: StrategyKind,
    /// One row per module, in snapshot listing order
    pub rows: Vec<GroupingRow>,
}

impl GroupingReport {
    /// Query every module of the grouper's snapshot
    pub fn build(grouper: &dyn ModuleGrouper) -> Self {
        let rows = grouper
            .all_modules()
            .into_iter()
            .map(|module| GroupingRow {
                group_path: grouper.group_path(&module),
                presentable_name: grouper.presentable_name(&module),
                module: module.name,
            })
            .collect();
        Self {
            strategy: grouper.kind(),
            rows,
        }
    }

    /// Plain-text rendering, one row per line
    pub fn to_text(&self) -> String {
        let mut out = format!("strategy: {}\n", self.strategy.as_str());
        for row in &self.rows {
            let path = if row.group_path.is_empty() {
                "<root>".to_string()
            } else {
                row.group_path.join("/")
            };
            out.push_str(&format!(
                "{:<24} {:<20} ({})\n",
                path, row.presentable_name, row.module
            ));
        }
        out
    }
}
