//! Integration Registry - Keyed lookup of localization plugin adapters.
//!
//! The registry maps integration keys (e.g. `polylang`) to the identifier of
//! an [`IntegrationClass`] in its catalog. Instances are built lazily on first
//! lookup, cached one per key, evicted when the key is re-registered, and
//! dropped wholesale by [`IntegrationRegistry::clear_cache`].
//!
//! Registry misses (unknown key, unknown class, class built against another
//! contract version) are ordinary outcomes and are reported as `None`/`false`.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use super::integration::{AvailabilityData, IntegrationCatalog, LocalizationIntegration};
use crate::domain::foundation::{IntegrationKey, Invalidate, KeyedCache};
use crate::ports::HostEnvironment;

/// One row of the key → class table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationDescriptor {
    pub key: IntegrationKey,
    pub class_identifier: String,
}

impl IntegrationDescriptor {
    pub fn new(key: IntegrationKey, class_identifier: impl Into<String>) -> Self {
        Self {
            key,
            class_identifier: class_identifier.into(),
        }
    }
}

/// Resolved integrations keyed by registry key, in registration order.
pub type IntegrationMap = IndexMap<IntegrationKey, Arc<dyn LocalizationIntegration>>;

/// Registry of localization integrations.
pub struct IntegrationRegistry {
    host: Arc<dyn HostEnvironment>,
    catalog: IntegrationCatalog,
    descriptors: RwLock<IndexMap<IntegrationKey, String>>,
    instances: KeyedCache<IntegrationKey, Arc<dyn LocalizationIntegration>>,
}

impl IntegrationRegistry {
    /// Creates a registry seeded with `descriptors`.
    ///
    /// Seed entries are trusted; only [`Self::register_integration`] validates.
    pub fn new(
        host: Arc<dyn HostEnvironment>,
        catalog: IntegrationCatalog,
        descriptors: impl IntoIterator<Item = IntegrationDescriptor>,
    ) -> Self {
        let descriptors = descriptors
            .into_iter()
            .map(|d| (d.key, d.class_identifier))
            .collect();
        Self {
            host,
            catalog,
            descriptors: RwLock::new(descriptors),
            instances: KeyedCache::new(),
        }
    }

    /// All registered keys, in registration order.
    pub fn list_integration_keys(&self) -> Vec<IntegrationKey> {
        self.read_descriptors().keys().cloned().collect()
    }

    /// Current key → class table.
    pub fn descriptors(&self) -> Vec<IntegrationDescriptor> {
        self.read_descriptors()
            .iter()
            .map(|(key, class)| IntegrationDescriptor::new(key.clone(), class.clone()))
            .collect()
    }

    /// The integration registered under `key`, built on first access.
    pub fn get_integration(&self, key: &str) -> Option<Arc<dyn LocalizationIntegration>> {
        let key = IntegrationKey::new(key).ok()?;
        // Held while constructing so a concurrent re-registration cannot
        // slip between reading the class and caching its instance.
        let descriptors = self.read_descriptors();
        let class_identifier = descriptors.get(&key)?;

        self.instances.get_or_try_insert_with(key.clone(), || {
            let class = self.catalog.find(class_identifier).filter(|c| c.conforms());
            match class {
                Some(class) => {
                    debug!("Instantiating localization integration '{}' ({})", key, class.identifier);
                    Some((class.construct)(Arc::clone(&self.host)))
                }
                None => {
                    debug!(
                        "Integration '{}' maps to unusable class '{}'",
                        key, class_identifier
                    );
                    None
                }
            }
        })
    }

    /// Every integration that resolves, keyed by registry key.
    pub fn get_all_integrations(&self) -> IntegrationMap {
        self.list_integration_keys()
            .into_iter()
            .filter_map(|key| {
                let integration = self.get_integration(key.as_str())?;
                Some((key, integration))
            })
            .collect()
    }

    /// Availability data of every resolvable integration.
    pub fn get_all_availability_data(&self) -> IndexMap<IntegrationKey, AvailabilityData> {
        self.get_all_integrations()
            .into_iter()
            .map(|(key, integration)| (key, integration.availability_data()))
            .collect()
    }

    /// Adds or replaces the class registered under `key`.
    ///
    /// Returns `false` and changes nothing if the key is malformed or the
    /// class is unknown or built against another contract version. On
    /// success any cached instance for `key` is evicted.
    ///
    /// Keys are case-insensitive: `key` is trimmed and lower-cased first, so
    /// registering `"Polylang"` replaces the existing `polylang` entry.
    pub fn register_integration(&self, key: &str, class_identifier: &str) -> bool {
        let Ok(key) = IntegrationKey::new(key) else {
            warn!("Rejected localization integration with malformed key '{}'", key);
            return false;
        };
        match self.catalog.find(class_identifier) {
            Some(class) if class.conforms() => {}
            Some(class) => {
                warn!(
                    "Rejected localization integration '{}': class '{}' implements contract v{}",
                    key, class_identifier, class.contract
                );
                return false;
            }
            None => {
                warn!(
                    "Rejected localization integration '{}': unknown class '{}'",
                    key, class_identifier
                );
                return false;
            }
        }

        let mut descriptors = self.write_descriptors();
        descriptors.insert(key.clone(), class_identifier.to_string());
        self.instances.evict(&key);
        debug!("Registered localization integration '{}' -> {}", key, class_identifier);
        true
    }

    /// Drops every cached instance. The key → class table is left as is.
    pub fn clear_cache(&self) {
        self.instances.invalidate();
    }

    /// Number of live cached instances.
    pub fn cached_count(&self) -> usize {
        self.instances.len()
    }

    fn read_descriptors(&self) -> RwLockReadGuard<'_, IndexMap<IntegrationKey, String>> {
        self.descriptors.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_descriptors(&self) -> RwLockWriteGuard<'_, IndexMap<IntegrationKey, String>> {
        self.descriptors.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::localization::{IntegrationClass, LOCALIZATION_CONTRACT};
    use crate::ports::{HostCapabilities, PluginStatus};

    struct EmptyHost;

    impl HostEnvironment for EmptyHost {
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
            if plugin_file == "alpha/alpha.php" {
                PluginStatus::active("1.2.0")
            } else {
                PluginStatus::missing()
            }
        }
    }

    struct Alpha(Arc<dyn HostEnvironment>);
    struct Beta(Arc<dyn HostEnvironment>);

    impl LocalizationIntegration for Alpha {
        fn plugin_name(&self) -> &'static str {
            "Alpha"
        }
        fn plugin_files(&self) -> &'static [&'static str] {
            &["alpha/alpha.php"]
        }
        fn host(&self) -> &dyn HostEnvironment {
            self.0.as_ref()
        }
    }

    impl LocalizationIntegration for Beta {
        fn plugin_name(&self) -> &'static str {
            "Beta"
        }
        fn plugin_files(&self) -> &'static [&'static str] {
            &["beta/beta.php"]
        }
        fn host(&self) -> &dyn HostEnvironment {
            self.0.as_ref()
        }
    }

    fn catalog() -> IntegrationCatalog {
        IntegrationCatalog::new()
            .with_class(IntegrationClass::new("Alpha", |host| Arc::new(Alpha(host))))
            .with_class(IntegrationClass::new("Beta", |host| Arc::new(Beta(host))))
            .with_class(
                IntegrationClass::new("Legacy", |host| Arc::new(Beta(host)))
                    .with_contract(LOCALIZATION_CONTRACT - 1),
            )
    }

    fn descriptor(key: &str, class: &str) -> IntegrationDescriptor {
        IntegrationDescriptor::new(IntegrationKey::new(key).unwrap(), class)
    }

    fn registry() -> IntegrationRegistry {
        IntegrationRegistry::new(
            Arc::new(EmptyHost),
            catalog(),
            vec![descriptor("alpha", "Alpha"), descriptor("beta", "Beta")],
        )
    }

    #[test]
    fn keys_are_listed_in_registration_order() {
        let registry = registry();
        registry.register_integration("gamma", "Beta");

        let keys: Vec<String> = registry
            .list_integration_keys()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(keys, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn unknown_key_resolves_to_none() {
        assert!(registry().get_integration("missing").is_none());
        assert!(registry().get_integration("  ").is_none());
    }

    #[test]
    fn instances_are_cached_per_key() {
        let registry = registry();
        let first = registry.get_integration("alpha").unwrap();
        let second = registry.get_integration("ALPHA").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.cached_count(), 1);
    }

    #[test]
    fn descriptor_pointing_at_unusable_class_resolves_to_none() {
        let registry = IntegrationRegistry::new(
            Arc::new(EmptyHost),
            catalog(),
            vec![descriptor("legacy", "Legacy"), descriptor("ghost", "Ghost")],
        );

        assert!(registry.get_integration("legacy").is_none());
        assert!(registry.get_integration("ghost").is_none());
        assert!(registry.get_all_integrations().is_empty());
        assert_eq!(registry.cached_count(), 0);
    }

    #[test]
    fn re_registration_replaces_class_and_evicts_instance() {
        let registry = registry();
        let before = registry.get_integration("alpha").unwrap();
        assert_eq!(before.plugin_name(), "Alpha");

        assert!(registry.register_integration("alpha", "Beta"));

        let after = registry.get_integration("alpha").unwrap();
        assert_eq!(after.plugin_name(), "Beta");
        assert!(!Arc::ptr_eq(&before, &after));

        // Position of an overwritten key is preserved.
        assert_eq!(registry.list_integration_keys()[0].as_str(), "alpha");
    }

    #[test]
    fn registration_keys_are_case_insensitive() {
        let registry = registry();

        assert!(registry.register_integration("Alpha", "Beta"));

        assert_eq!(registry.list_integration_keys().len(), 2);
        assert_eq!(registry.get_integration("alpha").unwrap().plugin_name(), "Beta");
    }

    #[test]
    fn rejected_registration_leaves_state_untouched() {
        let registry = registry();
        let cached = registry.get_integration("alpha").unwrap();
        let table_before = registry.descriptors();

        assert!(!registry.register_integration("alpha", "Ghost"));
        assert!(!registry.register_integration("alpha", "Legacy"));
        assert!(!registry.register_integration("bad key", "Beta"));

        assert_eq!(registry.descriptors(), table_before);
        let still_cached = registry.get_integration("alpha").unwrap();
        assert!(Arc::ptr_eq(&cached, &still_cached));
    }

    #[test]
    fn clear_cache_forces_reinstantiation() {
        let registry = registry();
        let before = registry.get_integration("beta").unwrap();

        registry.clear_cache();
        assert_eq!(registry.cached_count(), 0);
        assert_eq!(registry.list_integration_keys().len(), 2);

        let after = registry.get_integration("beta").unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn availability_data_for_all_integrations() {
        let data = registry().get_all_availability_data();

        assert_eq!(data.len(), 2);
        let alpha = &data[&IntegrationKey::new("alpha").unwrap()];
        assert!(alpha.is_available);
        assert_eq!(alpha.version.as_deref(), Some("1.2.0"));
        let beta = &data[&IntegrationKey::new("beta").unwrap()];
        assert!(!beta.is_installed);
    }
}
