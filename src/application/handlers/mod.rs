//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

mod calculate_order_cogs;
mod report_integrations;

pub use calculate_order_cogs::{
    CalculateOrderCogsHandler, CalculateOrderCogsQuery, OrderCogsError, OrderCogsView,
};
pub use report_integrations::{IntegrationReport, ProviderStatus, ReportIntegrationsHandler};
