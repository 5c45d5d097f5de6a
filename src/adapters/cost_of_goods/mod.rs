//! Cost-of-goods provider adapters and the compiled-in priority table.

mod meta;
mod woocommerce;

pub use meta::{SkyVergeCogsProvider, WpFactoryCogsProvider};
pub use woocommerce::{WooCommerceCogsProvider, COGS_FEATURE_OPTION};

use tracing::debug;

use crate::config::CostOfGoodsConfig;
use crate::domain::cost_of_goods::ProviderDescriptor;

/// Every supported provider, highest priority first.
///
/// The platform's own data wins over plugin data when both are present.
pub fn supported_providers() -> Vec<ProviderDescriptor> {
    vec![
        WooCommerceCogsProvider::descriptor(),
        WpFactoryCogsProvider::descriptor(),
        SkyVergeCogsProvider::descriptor(),
    ]
}

/// Supported providers minus those disabled in configuration, order preserved.
pub fn enabled_providers(config: &CostOfGoodsConfig) -> Vec<ProviderDescriptor> {
    supported_providers()
        .into_iter()
        .filter(|descriptor| {
            let enabled = config.is_enabled(descriptor.kind);
            if !enabled {
                debug!("Cost-of-goods provider {} disabled by configuration", descriptor.key());
            }
            enabled
        })
        .collect()
}
