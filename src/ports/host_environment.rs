//! Host Environment Port - The host commerce platform as seen by integrations.
//!
//! Availability checks for cost providers and localization plugins only ever
//! talk to the host through this port. Implementations must answer from
//! in-process state: no method here may block on I/O or mutate the host.
//!
//! # Capability surface
//!
//! Instead of probing host classes for individual methods, the host declares a
//! [`HostCapabilities`] value: the platform version plus the set of
//! [`HostFeature`]s its product API implements. Adapters check the features
//! they need once, at availability time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A host API surface an integration may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostFeature {
    /// Products expose a total cost value (covers simple and variable products).
    ProductCogsTotalValue,
}

/// Versioned description of what the host platform implements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCapabilities {
    /// Platform version string, if known.
    #[serde(default)]
    pub version: Option<String>,
    /// Features implemented by this host version.
    #[serde(default)]
    pub features: BTreeSet<HostFeature>,
}

impl HostCapabilities {
    /// Adds a supported feature.
    pub fn with_feature(mut self, feature: HostFeature) -> Self {
        self.features.insert(feature);
        self
    }

    /// Checks whether the host implements a feature.
    pub fn supports(&self, feature: HostFeature) -> bool {
        self.features.contains(&feature)
    }
}

/// Installation state of a third-party plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginStatus {
    /// Plugin files are present.
    #[serde(default)]
    pub installed: bool,
    /// Plugin is activated.
    #[serde(default)]
    pub active: bool,
    /// Plugin version header, when installed.
    #[serde(default)]
    pub version: Option<String>,
}

impl PluginStatus {
    /// Status of a plugin that is not installed.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Status of an installed and active plugin.
    pub fn active(version: impl Into<String>) -> Self {
        Self {
            installed: true,
            active: true,
            version: Some(version.into()),
        }
    }

    /// Status of an installed but deactivated plugin.
    pub fn inactive(version: impl Into<String>) -> Self {
        Self {
            installed: true,
            active: false,
            version: Some(version.into()),
        }
    }
}

/// Port for host platform introspection.
pub trait HostEnvironment: Send + Sync {
    /// Whether the commerce platform itself is installed, active and integrated.
    fn is_commerce_active(&self) -> bool;

    /// The host's declared capability surface.
    fn capabilities(&self) -> HostCapabilities;

    /// Reads a stored site option.
    fn option(&self, name: &str) -> Option<String>;

    /// Installation state of a plugin, identified by its main file
    /// (e.g. `polylang/polylang.php`).
    fn plugin_status(&self, plugin_file: &str) -> PluginStatus;

    /// Convenience check that a feature is supported.
    fn supports(&self, feature: HostFeature) -> bool {
        self.capabilities().supports(feature)
    }

    /// Convenience check that a plugin is installed and active.
    fn is_plugin_active(&self, plugin_file: &str) -> bool {
        let status = self.plugin_status(plugin_file);
        status.installed && status.active
    }
}
