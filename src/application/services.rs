//! Composition of the registries and handlers for one host.

use std::sync::Arc;

use tracing::info;

use super::handlers::{CalculateOrderCogsHandler, ReportIntegrationsHandler};
use crate::adapters::cost_of_goods::enabled_providers;
use crate::adapters::localization::{builtin_catalog, default_descriptors};
use crate::config::{AppConfig, FeatureFlags};
use crate::domain::cost_of_goods::{CogsProviderRegistry, CostOfGoods};
use crate::domain::localization::IntegrationRegistry;
use crate::ports::{HostEnvironment, ProductSource};

/// Long-lived registries shared by every handler built for a host.
///
/// Discovery results and adapter instances are cached inside the registries,
/// so handlers created from the same `IntegrationServices` share them.
pub struct IntegrationServices {
    pub cost_registry: Arc<CogsProviderRegistry>,
    pub cost_of_goods: Arc<CostOfGoods>,
    pub localization: Arc<IntegrationRegistry>,
    pub features: FeatureFlags,
}

impl IntegrationServices {
    /// Builds the registries for `host` using the compiled-in adapters,
    /// minus any provider the configuration disables.
    pub fn build(config: &AppConfig, host: Arc<dyn HostEnvironment>) -> Self {
        let providers = enabled_providers(&config.cost_of_goods);
        info!(
            providers = providers.len(),
            "Building integration registries"
        );

        let cost_registry = Arc::new(CogsProviderRegistry::new(host.clone(), providers));
        let localization = Arc::new(IntegrationRegistry::new(
            host,
            builtin_catalog(),
            default_descriptors(),
        ));

        Self {
            cost_of_goods: Arc::new(CostOfGoods::new(cost_registry.clone())),
            cost_registry,
            localization,
            features: config.features.clone(),
        }
    }

    pub fn order_cogs_handler(&self, products: Arc<dyn ProductSource>) -> CalculateOrderCogsHandler {
        CalculateOrderCogsHandler::new(self.cost_of_goods.clone(), products)
            .with_enabled(self.features.enable_cost_of_goods)
    }

    pub fn report_handler(&self) -> ReportIntegrationsHandler {
        ReportIntegrationsHandler::new(
            self.cost_registry.clone(),
            self.localization.clone(),
            self.features.clone(),
        )
    }

    /// Drops every cached discovery result and adapter instance.
    pub fn clear_caches(&self) {
        self.cost_registry.clear_cache();
        self.localization.clear_cache();
    }
}
