//! Cost Provider Registry - Discovers usable cost-of-goods plugins and asks
//! them for per-product costs.
//!
//! The registry owns an ordered table of [`ProviderDescriptor`]s. On first use
//! it runs each descriptor's availability check against the host, builds the
//! providers that pass, and memoizes the resulting list. Later lookups never
//! re-run availability checks until [`CogsProviderRegistry::clear_cache`] is
//! called.
//!
//! # Selection policy
//!
//! First valid wins: providers are consulted in table order and the first one
//! returning a finite value strictly greater than zero answers for the
//! product. Zero, negative, non-finite and missing values all mean "this
//! provider has no data" and the next provider is asked.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use super::provider::{CogsProvider, CogsProviderKind, ProviderDescriptor};
use crate::domain::foundation::{Cost, HostError, Invalidate, Memoized};
use crate::ports::{CatalogProduct, HostEnvironment};

/// Ordered list of resolved providers, shared between callers.
pub type AvailableProviders = Arc<[Arc<dyn CogsProvider>]>;

/// A per-product cost together with the provider that supplied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCost {
    pub provider: CogsProviderKind,
    pub cost: Cost,
}

/// Registry of cost-of-goods providers with memoized discovery.
pub struct CogsProviderRegistry {
    host: Arc<dyn HostEnvironment>,
    supported: Vec<ProviderDescriptor>,
    available: Memoized<AvailableProviders>,
}

impl CogsProviderRegistry {
    /// Creates a registry over `supported`, tried in the given order.
    pub fn new(host: Arc<dyn HostEnvironment>, supported: Vec<ProviderDescriptor>) -> Self {
        Self {
            host,
            supported,
            available: Memoized::new(),
        }
    }

    /// The compiled-in priority table. Earlier entries win.
    pub fn list_supported_providers(&self) -> &[ProviderDescriptor] {
        &self.supported
    }

    /// Providers usable in the current host, in priority order.
    ///
    /// Resolved on first call and memoized afterwards.
    pub fn get_available_providers(&self) -> AvailableProviders {
        self.available.get_or_resolve(|| self.resolve())
    }

    /// True iff at least one provider is usable.
    pub fn has_available_provider(&self) -> bool {
        !self.get_available_providers().is_empty()
    }

    /// Best available cost for `product`, or `None` if no provider has a usable value.
    pub fn get_cost_for_product(
        &self,
        product: &dyn CatalogProduct,
    ) -> Result<Option<Cost>, HostError> {
        Ok(self.resolve_cost_for_product(product)?.map(|resolved| resolved.cost))
    }

    /// Like [`Self::get_cost_for_product`], also naming the provider that answered.
    pub fn resolve_cost_for_product(
        &self,
        product: &dyn CatalogProduct,
    ) -> Result<Option<ResolvedCost>, HostError> {
        for provider in self.get_available_providers().iter() {
            let raw = provider.cogs_value(product)?;
            match usable_cost(raw) {
                Some(cost) => {
                    return Ok(Some(ResolvedCost {
                        provider: provider.kind(),
                        cost,
                    }))
                }
                None => trace!(
                    provider = provider.kind().key(),
                    product_id = %product.id(),
                    value = ?raw,
                    "provider has no usable cost, trying next"
                ),
            }
        }
        Ok(None)
    }

    /// Forgets the resolved provider list. The next lookup re-runs availability checks.
    pub fn clear_cache(&self) {
        self.available.invalidate();
    }

    /// Whether provider discovery has already run.
    pub fn is_resolved(&self) -> bool {
        self.available.is_resolved()
    }

    fn resolve(&self) -> AvailableProviders {
        let mut providers: Vec<Arc<dyn CogsProvider>> = Vec::new();

        for descriptor in &self.supported {
            if !(descriptor.is_available)(self.host.as_ref()) {
                continue;
            }
            match (descriptor.create)(Arc::clone(&self.host)) {
                Ok(provider) => providers.push(provider),
                Err(e) => warn!(
                    provider = descriptor.key(),
                    implementation = descriptor.implementation,
                    "availability check passed but construction failed: {}",
                    e
                ),
            }
        }

        debug!(
            "Resolved {} of {} cost-of-goods providers: [{}]",
            providers.len(),
            self.supported.len(),
            providers
                .iter()
                .map(|p| p.kind().key())
                .collect::<Vec<_>>()
                .join(", ")
        );

        providers.into()
    }
}

/// Accepts only finite values strictly greater than zero.
fn usable_cost(raw: Option<f64>) -> Option<Cost> {
    raw.and_then(|value| Cost::try_new(value).ok())
        .filter(Cost::is_positive)
}
