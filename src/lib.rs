//! Commerce Integrations - Third-party plugin integrations for a storefront.
//!
//! This crate discovers which cost-of-goods data sources a store has, resolves
//! per-product costs from the highest-priority source that holds a usable
//! value, and aggregates them into all-or-nothing order totals. It also keeps
//! a registry of localization plugin adapters and reports their availability.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
