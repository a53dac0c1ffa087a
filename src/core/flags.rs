//! Feature flags
//!
//! Strategy selection depends on one boolean: whether qualified-name-derived
//! grouping is enabled. Selection takes an explicit [FeatureFlags] value so
//! it stays deterministic and testable; the process-wide store below exists
//! for embedders that want the traditional global lookup instead of threading
//! flags through every call site.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Process-configuration flags read by the strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Enable grouping derived from dotted qualified module names
    #[serde(default = "default_qualified_module_names")]
    pub qualified_module_names: bool,
}

fn default_qualified_module_names() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            qualified_module_names: true,
        }
    }
}

lazy_static! {
    static ref GLOBAL_FLAGS: RwLock<FeatureFlags> = RwLock::new(FeatureFlags::default());
}

/// Current value of the process-wide flags
pub fn global_flags() -> FeatureFlags {
    *GLOBAL_FLAGS.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Replace the process-wide flags
pub fn set_global_flags(flags: FeatureFlags) {
    *GLOBAL_FLAGS.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = flags;
}
