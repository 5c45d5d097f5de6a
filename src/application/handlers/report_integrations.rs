//! ReportIntegrationsHandler - Availability report for every known integration.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

use tracing::debug;

use crate::config::FeatureFlags;
use crate::domain::cost_of_goods::CogsProviderRegistry;
use crate::domain::foundation::{IntegrationKey, Timestamp};
use crate::domain::localization::{AvailabilityData, IntegrationRegistry};

/// Availability of one supported cost-of-goods provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderStatus {
    pub key: &'static str,
    pub integration_name: &'static str,
    pub implementation: &'static str,
    pub available: bool,
}

/// Point-in-time view of the integrations a host offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrationReport {
    pub generated_at: Timestamp,
    /// Supported providers in priority order. Empty when cost of goods is disabled.
    pub cost_of_goods_providers: Vec<ProviderStatus>,
    /// Empty when the localization report is disabled.
    pub localization: IndexMap<IntegrationKey, AvailabilityData>,
}

/// Handler assembling an [`IntegrationReport`].
pub struct ReportIntegrationsHandler {
    cost_registry: Arc<CogsProviderRegistry>,
    localization: Arc<IntegrationRegistry>,
    features: FeatureFlags,
}

impl ReportIntegrationsHandler {
    pub fn new(
        cost_registry: Arc<CogsProviderRegistry>,
        localization: Arc<IntegrationRegistry>,
        features: FeatureFlags,
    ) -> Self {
        Self {
            cost_registry,
            localization,
            features,
        }
    }

    pub fn handle(&self) -> IntegrationReport {
        let cost_of_goods_providers = if self.features.enable_cost_of_goods {
            self.provider_statuses()
        } else {
            debug!("Cost of goods disabled, omitting providers from report");
            Vec::new()
        };

        let localization = if self.features.enable_localization_report {
            self.localization.get_all_availability_data()
        } else {
            debug!("Localization report disabled");
            IndexMap::new()
        };

        IntegrationReport {
            generated_at: Timestamp::now(),
            cost_of_goods_providers,
            localization,
        }
    }

    // Availability comes from the memoized discovery, so reporting never
    // re-runs host checks.
    fn provider_statuses(&self) -> Vec<ProviderStatus> {
        let available = self.cost_registry.get_available_providers();
        self.cost_registry
            .list_supported_providers()
            .iter()
            .map(|descriptor| ProviderStatus {
                key: descriptor.key(),
                integration_name: descriptor.kind.integration_name(),
                implementation: descriptor.implementation,
                available: available.iter().any(|p| p.kind() == descriptor.kind),
            })
            .collect()
    }
}
