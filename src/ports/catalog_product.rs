//! Catalog Product Port - Read access to a host product.
//!
//! Cost providers read product data through this port only. Every accessor
//! distinguishes "nothing stored" (`Ok(None)`) from a genuine host failure
//! (`Err`), which propagates to the caller of the aggregation untouched.

use crate::domain::foundation::{HostError, ProductId};

/// Port for product lookups performed by cost providers.
pub trait CatalogProduct: Send + Sync {
    /// Identifier of this product in the host catalog.
    fn id(&self) -> &ProductId;

    /// Host-native total cost value, if the host tracks one for this product.
    fn cogs_total_value(&self) -> Result<Option<f64>, HostError>;

    /// Raw product meta value stored under `key`.
    fn meta(&self, key: &str) -> Result<Option<String>, HostError>;
}

/// Port for resolving products by identifier.
pub trait ProductSource: Send + Sync {
    /// Looks up a product. `None` when the catalog has no such product.
    fn product(&self, id: &ProductId) -> Option<&dyn CatalogProduct>;
}
