//! Cost-of-goods provider configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::cost_of_goods::CogsProviderKind;

/// Cost-of-goods configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostOfGoodsConfig {
    /// Provider keys (e.g. `WPFactory`) never consulted even when installed
    #[serde(default)]
    pub disabled_providers: Vec<String>,
}

impl CostOfGoodsConfig {
    /// Whether a provider may be used
    pub fn is_enabled(&self, kind: CogsProviderKind) -> bool {
        !self
            .disabled_providers
            .iter()
            .any(|key| key.trim().eq_ignore_ascii_case(kind.key()))
    }

    /// Validate that every disabled key names a known provider
    pub fn validate(&self) -> Result<(), ValidationError> {
        for key in &self.disabled_providers {
            key.parse::<CogsProviderKind>()
                .map_err(|_| ValidationError::UnknownCostProvider(key.clone()))?;
        }
        Ok(())
    }
}
