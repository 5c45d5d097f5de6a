//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every use case here is a read: handlers compute views from the host state
//! and never mutate it.

pub mod handlers;
mod services;

pub use handlers::{
    // Cost of goods
    CalculateOrderCogsHandler, CalculateOrderCogsQuery, OrderCogsError, OrderCogsView,
    // Reporting
    IntegrationReport, ProviderStatus, ReportIntegrationsHandler,
};
pub use services::IntegrationServices;
