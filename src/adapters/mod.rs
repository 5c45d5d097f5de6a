//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the host platform:
//! - `cost_of_goods` - Cost-of-goods providers and their priority table
//! - `host` - File-backed host snapshot (environment and catalog)
//! - `localization` - Localization plugin adapters and the class catalog

pub mod cost_of_goods;
pub mod host;
pub mod localization;

pub use cost_of_goods::{enabled_providers, supported_providers};
pub use host::{HostSnapshot, SnapshotError, SnapshotProduct};
pub use localization::{builtin_catalog, default_descriptors};
