//! Localization plugin adapters and the built-in class catalog.

mod polylang;
mod wpml;

pub use polylang::Polylang;
pub use wpml::Wpml;

use once_cell::sync::Lazy;

use crate::domain::foundation::IntegrationKey;
use crate::domain::localization::{IntegrationCatalog, IntegrationDescriptor};

static BUILTIN_CATALOG: Lazy<IntegrationCatalog> = Lazy::new(|| {
    IntegrationCatalog::new()
        .with_class(Polylang::class())
        .with_class(Wpml::class())
});

/// Every localization adapter class shipped with this crate.
pub fn builtin_catalog() -> IntegrationCatalog {
    BUILTIN_CATALOG.clone()
}

/// Default key -> class table.
pub fn default_descriptors() -> Vec<IntegrationDescriptor> {
    [("polylang", Polylang::IDENTIFIER), ("wpml", Wpml::IDENTIFIER)]
        .into_iter()
        .filter_map(|(key, class)| {
            let key = IntegrationKey::new(key).ok()?;
            Some(IntegrationDescriptor::new(key, class))
        })
        .collect()
}
