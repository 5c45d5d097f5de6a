//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the host platform. Adapters implement these ports.
//!
//! - `HostEnvironment` - Host platform introspection (options, plugins, capabilities)
//! - `CatalogProduct` - Read access to a single host product
//! - `ProductSource` - Product lookup by identifier

mod catalog_product;
mod host_environment;

pub use catalog_product::{CatalogProduct, ProductSource};
pub use host_environment::{HostCapabilities, HostEnvironment, HostFeature, PluginStatus};
