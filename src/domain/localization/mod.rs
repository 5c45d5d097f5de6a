//! Localization (multilingual plugin) integrations.

mod integration;
mod registry;

pub use integration::{
    AvailabilityData, ContractVersion, IntegrationCatalog, IntegrationClass,
    IntegrationConstructor, LocalizationIntegration, LOCALIZATION_CONTRACT,
};
pub use registry::{IntegrationDescriptor, IntegrationMap, IntegrationRegistry};
