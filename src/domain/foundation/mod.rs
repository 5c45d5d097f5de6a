//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, caches and error types
//! that form the vocabulary of the integrations domain.

mod cost;
mod errors;
mod ids;
mod memo;
mod timestamp;

pub use cost::Cost;
pub use errors::{HostError, IntegrationError, ValidationError};
pub use ids::{IntegrationKey, ProductId};
pub use memo::{Invalidate, KeyedCache, Memoized};
pub use timestamp::Timestamp;
