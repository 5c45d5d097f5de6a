//! Cost of goods sold (COGS) for order line items.
//!
//! Several third-party plugins can store per-product costs; at most a few are
//! installed on any given site. This module picks the usable ones, asks them in
//! priority order, and folds per-product answers into an order total.
//!
//! ```text
//! CostOfGoods::calculate_total(products)
//!     └─ CogsProviderRegistry::get_available_providers()   [memoized]
//!     └─ CogsProviderRegistry::get_cost_for_product(p)     [first valid wins]
//! ```

mod calculator;
mod provider;
mod registry;

pub use calculator::{CostOfGoods, LineCost, OrderCogs};
pub use provider::{
    AvailabilityCheck, CogsProvider, CogsProviderKind, ProviderDescriptor, ProviderFactory,
};
pub use registry::{AvailableProviders, CogsProviderRegistry, ResolvedCost};
