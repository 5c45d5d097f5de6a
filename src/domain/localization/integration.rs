//! Localization integration contract.
//!
//! A localization integration adapts one multilingual plugin. Adapters are
//! made known to the process through an [`IntegrationCatalog`] of
//! [`IntegrationClass`] entries; a class is accepted by the registry only if it
//! was built against the current [`LOCALIZATION_CONTRACT`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::ports::HostEnvironment;

/// Version of the [`LocalizationIntegration`] contract.
pub type ContractVersion = u16;

/// Contract version the registry accepts.
pub const LOCALIZATION_CONTRACT: ContractVersion = 2;

/// Snapshot of whether and how a localization plugin is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityData {
    pub plugin_name: String,
    /// Main file of the detected plugin edition, or the primary file if none is installed.
    pub plugin_file: String,
    pub is_installed: bool,
    pub is_active: bool,
    pub version: Option<String>,
    /// Installed and active.
    pub is_available: bool,
}

/// Capability contract every localization adapter implements.
pub trait LocalizationIntegration: Send + Sync {
    /// Display name of the plugin.
    fn plugin_name(&self) -> &'static str;

    /// Main plugin files, most preferred edition first.
    fn plugin_files(&self) -> &'static [&'static str];

    /// Host the adapter inspects.
    fn host(&self) -> &dyn HostEnvironment;

    /// Describes the plugin's presence on the host.
    ///
    /// The first installed edition wins; an active edition is preferred over
    /// an inactive one.
    fn availability_data(&self) -> AvailabilityData {
        let files = self.plugin_files();
        let statuses: Vec<_> = files
            .iter()
            .map(|file| (*file, self.host().plugin_status(file)))
            .collect();

        let detected = statuses
            .iter()
            .find(|(_, status)| status.installed && status.active)
            .or_else(|| statuses.iter().find(|(_, status)| status.installed));

        match detected {
            Some((file, status)) => AvailabilityData {
                plugin_name: self.plugin_name().to_string(),
                plugin_file: (*file).to_string(),
                is_installed: true,
                is_active: status.active,
                version: status.version.clone(),
                is_available: status.active,
            },
            None => AvailabilityData {
                plugin_name: self.plugin_name().to_string(),
                plugin_file: files.first().copied().unwrap_or_default().to_string(),
                is_installed: false,
                is_active: false,
                version: None,
                is_available: false,
            },
        }
    }

    /// Shortcut for `availability_data().is_available`.
    fn is_available(&self) -> bool {
        self.availability_data().is_available
    }
}

/// Constructor signature of a localization adapter.
pub type IntegrationConstructor = fn(Arc<dyn HostEnvironment>) -> Arc<dyn LocalizationIntegration>;

/// An adapter type made known to the process.
#[derive(Clone, Copy)]
pub struct IntegrationClass {
    /// Name the registry refers to this class by (e.g. `Polylang`).
    pub identifier: &'static str,
    /// Contract version the adapter implements.
    pub contract: ContractVersion,
    pub construct: IntegrationConstructor,
}

impl IntegrationClass {
    /// Declares a class implementing the current contract.
    pub fn new(identifier: &'static str, construct: IntegrationConstructor) -> Self {
        Self {
            identifier,
            contract: LOCALIZATION_CONTRACT,
            construct,
        }
    }

    /// Overrides the declared contract version.
    pub fn with_contract(mut self, contract: ContractVersion) -> Self {
        self.contract = contract;
        self
    }

    /// Whether the registry may instantiate this class.
    pub fn conforms(&self) -> bool {
        self.contract == LOCALIZATION_CONTRACT
    }
}

impl fmt::Debug for IntegrationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationClass")
            .field("identifier", &self.identifier)
            .field("contract", &self.contract)
            .finish()
    }
}

/// Every adapter class known to the process, by identifier.
#[derive(Debug, Clone, Default)]
pub struct IntegrationCatalog {
    classes: IndexMap<&'static str, IntegrationClass>,
}

impl IntegrationCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a class.
    pub fn with_class(mut self, class: IntegrationClass) -> Self {
        self.classes.insert(class.identifier, class);
        self
    }

    /// Looks up a class by identifier.
    pub fn find(&self, identifier: &str) -> Option<&IntegrationClass> {
        self.classes.get(identifier)
    }

    /// All known identifiers, in insertion order.
    pub fn identifiers(&self) -> Vec<&'static str> {
        self.classes.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{HostCapabilities, PluginStatus};
    use std::collections::HashMap;

    struct PluginsHost(HashMap<&'static str, PluginStatus>);

    impl HostEnvironment for PluginsHost {
        fn is_commerce_active(&self) -> bool {
            true
        }
        fn capabilities(&self) -> HostCapabilities {
            HostCapabilities::default()
        }
        fn option(&self, _name: &str) -> Option<String> {
            None
        }
        fn plugin_status(&self, plugin_file: &str) -> PluginStatus {
            self.0.get(plugin_file).cloned().unwrap_or_default()
        }
    }

    struct TwoEditions(Arc<dyn HostEnvironment>);

    impl LocalizationIntegration for TwoEditions {
        fn plugin_name(&self) -> &'static str {
            "Two Editions"
        }
        fn plugin_files(&self) -> &'static [&'static str] {
            &["two-pro/two.php", "two/two.php"]
        }
        fn host(&self) -> &dyn HostEnvironment {
            self.0.as_ref()
        }
    }

    fn integration(statuses: &[(&'static str, PluginStatus)]) -> TwoEditions {
        TwoEditions(Arc::new(PluginsHost(statuses.iter().cloned().collect())))
    }

    #[test]
    fn missing_plugin_reports_primary_file() {
        let data = integration(&[]).availability_data();

        assert_eq!(data.plugin_file, "two-pro/two.php");
        assert!(!data.is_installed);
        assert!(!data.is_available);
        assert_eq!(data.version, None);
    }

    #[test]
    fn active_edition_is_preferred() {
        let data = integration(&[
            ("two-pro/two.php", PluginStatus::inactive("3.0")),
            ("two/two.php", PluginStatus::active("2.4")),
        ])
        .availability_data();

        assert_eq!(data.plugin_file, "two/two.php");
        assert!(data.is_available);
        assert_eq!(data.version.as_deref(), Some("2.4"));
    }

    #[test]
    fn installed_but_inactive_is_not_available() {
        let integration = integration(&[("two/two.php", PluginStatus::inactive("2.4"))]);
        let data = integration.availability_data();

        assert!(data.is_installed);
        assert!(!data.is_active);
        assert!(!integration.is_available());
    }

    #[test]
    fn class_conformance_follows_contract_version() {
        let construct: IntegrationConstructor = |host| Arc::new(TwoEditions(host));
        let current = IntegrationClass::new("Two", construct);
        let stale = current.with_contract(LOCALIZATION_CONTRACT - 1);

        assert!(current.conforms());
        assert!(!stale.conforms());
    }

    #[test]
    fn catalog_finds_by_identifier() {
        let construct: IntegrationConstructor = |host| Arc::new(TwoEditions(host));
        let catalog = IntegrationCatalog::new()
            .with_class(IntegrationClass::new("Two", construct))
            .with_class(IntegrationClass::new("Three", construct));

        assert!(catalog.find("Two").is_some());
        assert!(catalog.find("Missing").is_none());
        assert_eq!(catalog.identifiers(), vec!["Two", "Three"]);
    }
}
