//! Cost of goods built into the commerce platform itself.

use std::sync::Arc;

use crate::domain::cost_of_goods::{CogsProvider, CogsProviderKind, ProviderDescriptor};
use crate::domain::foundation::{HostError, IntegrationError};
use crate::ports::{CatalogProduct, HostEnvironment, HostFeature};

/// Site option toggling the platform's cost-of-goods feature.
pub const COGS_FEATURE_OPTION: &str = "woocommerce_feature_cost_of_goods_sold_enabled";

/// Reads the platform-native cost total of each product.
#[derive(Debug)]
pub struct WooCommerceCogsProvider {
    _available: (),
}

impl WooCommerceCogsProvider {
    pub const KIND: CogsProviderKind = CogsProviderKind::WooCommerce;

    /// Builds the provider, failing if the feature is not usable on `host`.
    pub fn try_new(host: &dyn HostEnvironment) -> Result<Self, IntegrationError> {
        if !Self::is_available(host) {
            return Err(IntegrationError::unavailable(Self::KIND.integration_name()));
        }
        Ok(Self { _available: () })
    }

    /// The platform is active, its products expose a cost total, and the
    /// feature is switched on.
    pub fn is_available(host: &dyn HostEnvironment) -> bool {
        host.is_commerce_active()
            && host.supports(HostFeature::ProductCogsTotalValue)
            && host.option(COGS_FEATURE_OPTION).as_deref() == Some("yes")
    }

    pub fn descriptor() -> ProviderDescriptor {
        ProviderDescriptor {
            kind: Self::KIND,
            implementation: "WooCommerceCogsProvider",
            is_available: Self::is_available,
            create: |host| Ok(Arc::new(Self::try_new(host.as_ref())?)),
        }
    }
}

impl CogsProvider for WooCommerceCogsProvider {
    fn kind(&self) -> CogsProviderKind {
        Self::KIND
    }

    // The total covers simple and variable products alike.
    fn cogs_value(&self, product: &dyn CatalogProduct) -> Result<Option<f64>, HostError> {
        product.cogs_total_value()
    }
}
