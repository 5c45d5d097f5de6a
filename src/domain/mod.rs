//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (value objects, IDs, caches, errors)
//! - `cost_of_goods` - Cost provider discovery and order-level aggregation
//! - `localization` - Registry of multilingual plugin integrations

pub mod cost_of_goods;
pub mod foundation;
pub mod localization;
