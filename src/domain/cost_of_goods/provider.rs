//! Cost provider contract and the typed descriptor table entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::foundation::{HostError, IntegrationError, ValidationError};
use crate::ports::{CatalogProduct, HostEnvironment};

/// The closed set of cost-of-goods plugins this crate knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CogsProviderKind {
    /// Cost of goods built into the commerce platform.
    #[serde(rename = "WooC")]
    WooCommerce,
    /// "Cost of Goods for WooCommerce" by WPFactory.
    #[serde(rename = "WPFactory")]
    WpFactory,
    /// "WooCommerce Cost of Goods" by SkyVerge.
    #[serde(rename = "SkyVerge")]
    SkyVerge,
}

impl CogsProviderKind {
    /// Every kind, in no particular priority.
    pub const ALL: [CogsProviderKind; 3] = [
        CogsProviderKind::WooCommerce,
        CogsProviderKind::WpFactory,
        CogsProviderKind::SkyVerge,
    ];

    /// Stable registry key.
    pub fn key(&self) -> &'static str {
        match self {
            CogsProviderKind::WooCommerce => "WooC",
            CogsProviderKind::WpFactory => "WPFactory",
            CogsProviderKind::SkyVerge => "SkyVerge",
        }
    }

    /// Human-readable plugin name, used in unavailable-integration errors.
    pub fn integration_name(&self) -> &'static str {
        match self {
            CogsProviderKind::WooCommerce => "WooCommerce Cost of Goods",
            CogsProviderKind::WpFactory => "Cost of Goods for WooCommerce by WPFactory",
            CogsProviderKind::SkyVerge => "WooCommerce Cost of Goods by SkyVerge",
        }
    }
}

impl fmt::Display for CogsProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CogsProviderKind {
    type Err = ValidationError;

    /// Parses a registry key, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ValidationError::invalid_format("cogs_provider", format!("unknown provider key '{}'", s))
            })
    }
}

/// Port-side contract every cost-of-goods adapter implements.
///
/// A value of a type implementing this trait only exists if the plugin was
/// available when it was built (see [`ProviderDescriptor::create`]).
pub trait CogsProvider: Send + Sync {
    /// Which plugin this adapter reads.
    fn kind(&self) -> CogsProviderKind;

    /// The plugin's stored cost for `product`.
    ///
    /// Returns `Ok(None)` when the plugin has nothing for this product. Values
    /// are passed through raw; the registry decides which ones are usable.
    fn cogs_value(&self, product: &dyn CatalogProduct) -> Result<Option<f64>, HostError>;
}

/// Availability check signature: pure host introspection, never fails.
pub type AvailabilityCheck = fn(&dyn HostEnvironment) -> bool;

/// Fallible factory signature.
pub type ProviderFactory =
    fn(Arc<dyn HostEnvironment>) -> Result<Arc<dyn CogsProvider>, IntegrationError>;

/// One entry of the compiled-in provider table.
#[derive(Clone, Copy)]
pub struct ProviderDescriptor {
    pub kind: CogsProviderKind,
    /// Name of the adapter type, for diagnostics.
    pub implementation: &'static str,
    pub is_available: AvailabilityCheck,
    pub create: ProviderFactory,
}

impl ProviderDescriptor {
    /// Registry key of the described provider.
    pub fn key(&self) -> &'static str {
        self.kind.key()
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("key", &self.kind.key())
            .field("implementation", &self.implementation)
            .finish()
    }
}
