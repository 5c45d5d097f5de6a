//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Compute order cost of goods from installed plugins
    #[serde(default = "default_true")]
    pub enable_cost_of_goods: bool,

    /// Include localization plugin availability in integration reports
    #[serde(default = "default_true")]
    pub enable_localization_report: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_cost_of_goods: true,
            enable_localization_report: true,
        }
    }
}
