//! Plugins that keep their cost as product meta.

use std::sync::Arc;

use crate::domain::cost_of_goods::{CogsProvider, CogsProviderKind, ProviderDescriptor};
use crate::domain::foundation::{HostError, IntegrationError};
use crate::ports::{CatalogProduct, HostEnvironment};

/// Parses a stored meta value. Blank or non-numeric values carry no data.
///
/// Only plain numeric strings count: thousands separators and decimal commas
/// are ambiguous (`"1,234"`) and are treated as non-numeric.
pub(crate) fn parse_meta_cost(raw: Option<String>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok()
}

fn any_active(host: &dyn HostEnvironment, plugin_files: &[&str]) -> bool {
    host.is_commerce_active() && plugin_files.iter().any(|file| host.is_plugin_active(file))
}

/// "Cost of Goods for WooCommerce" by WPFactory (free and pro editions).
#[derive(Debug)]
pub struct WpFactoryCogsProvider {
    _available: (),
}

impl WpFactoryCogsProvider {
    pub const KIND: CogsProviderKind = CogsProviderKind::WpFactory;

    pub const PLUGIN_FILES: [&'static str; 2] = [
        "cost-of-goods-for-woocommerce/cost-of-goods-for-woocommerce.php",
        "cost-of-goods-for-woocommerce-pro/cost-of-goods-for-woocommerce-pro.php",
    ];

    pub const COST_META_KEY: &'static str = "_alg_wc_cog_cost";

    pub fn try_new(host: &dyn HostEnvironment) -> Result<Self, IntegrationError> {
        if !Self::is_available(host) {
            return Err(IntegrationError::unavailable(Self::KIND.integration_name()));
        }
        Ok(Self { _available: () })
    }

    pub fn is_available(host: &dyn HostEnvironment) -> bool {
        any_active(host, &Self::PLUGIN_FILES)
    }

    pub fn descriptor() -> ProviderDescriptor {
        ProviderDescriptor {
            kind: Self::KIND,
            implementation: "WpFactoryCogsProvider",
            is_available: Self::is_available,
            create: |host| Ok(Arc::new(Self::try_new(host.as_ref())?)),
        }
    }
}

impl CogsProvider for WpFactoryCogsProvider {
    fn kind(&self) -> CogsProviderKind {
        Self::KIND
    }

    fn cogs_value(&self, product: &dyn CatalogProduct) -> Result<Option<f64>, HostError> {
        Ok(parse_meta_cost(product.meta(Self::COST_META_KEY)?))
    }
}

/// "WooCommerce Cost of Goods" by SkyVerge.
#[derive(Debug)]
pub struct SkyVergeCogsProvider {
    _available: (),
}

impl SkyVergeCogsProvider {
    pub const KIND: CogsProviderKind = CogsProviderKind::SkyVerge;

    pub const PLUGIN_FILES: [&'static str; 1] =
        ["woocommerce-cost-of-goods/woocommerce-cost-of-goods.php"];

    pub const COST_META_KEY: &'static str = "_wc_cog_cost";

    pub fn try_new(host: &dyn HostEnvironment) -> Result<Self, IntegrationError> {
        if !Self::is_available(host) {
            return Err(IntegrationError::unavailable(Self::KIND.integration_name()));
        }
        Ok(Self { _available: () })
    }

    pub fn is_available(host: &dyn HostEnvironment) -> bool {
        any_active(host, &Self::PLUGIN_FILES)
    }

    pub fn descriptor() -> ProviderDescriptor {
        ProviderDescriptor {
            kind: Self::KIND,
            implementation: "SkyVergeCogsProvider",
            is_available: Self::is_available,
            create: |host| Ok(Arc::new(Self::try_new(host.as_ref())?)),
        }
    }
}

impl CogsProvider for SkyVergeCogsProvider {
    fn kind(&self) -> CogsProviderKind {
        Self::KIND
    }

    fn cogs_value(&self, product: &dyn CatalogProduct) -> Result<Option<f64>, HostError> {
        Ok(parse_meta_cost(product.meta(Self::COST_META_KEY)?))
    }
}
