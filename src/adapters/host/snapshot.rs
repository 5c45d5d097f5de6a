//! Snapshot Host Adapter
//!
//! An in-memory host environment captured as plain data: commerce flag,
//! capability surface, site options, plugin states and products. Snapshots
//! are loaded from JSON or YAML files (by extension) and back the CLI and the
//! test suites.
//!
//! # Example
//!
//! ```yaml
//! commerce_active: true
//! capabilities:
//!   version: "9.5.0"
//!   features: [product_cogs_total_value]
//! options:
//!   woocommerce_feature_cost_of_goods_sold_enabled: "yes"
//! plugins:
//!   polylang/polylang.php: { installed: true, active: true, version: "3.6.4" }
//! products:
//!   - id: "101"
//!     cogs_total_value: 12.5
//!     meta:
//!       _alg_wc_cog_cost: 11
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::domain::foundation::{HostError, ProductId};
use crate::ports::{
    CatalogProduct, HostCapabilities, HostEnvironment, HostFeature, PluginStatus, ProductSource,
};

/// Errors that can occur while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported snapshot format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// A stored meta value. Plugins write numbers and strings interchangeably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Number(n) => write!(f, "{}", n),
            MetaValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Number(value)
    }
}

/// A product captured in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotProduct {
    pub id: ProductId,
    #[serde(default)]
    pub cogs_total_value: Option<f64>,
    #[serde(default)]
    pub meta: HashMap<String, MetaValue>,
    /// Simulates a product the host fails to load.
    #[serde(default)]
    pub unreadable: bool,
}

impl SnapshotProduct {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            cogs_total_value: None,
            meta: HashMap::new(),
            unreadable: false,
        }
    }

    pub fn with_cogs_total_value(mut self, value: f64) -> Self {
        self.cogs_total_value = Some(value);
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }

    fn ensure_readable(&self) -> Result<(), HostError> {
        if self.unreadable {
            return Err(HostError::product_unreadable(
                self.id.as_str(),
                "product could not be loaded from the host",
            ));
        }
        Ok(())
    }
}

impl CatalogProduct for SnapshotProduct {
    fn id(&self) -> &ProductId {
        &self.id
    }

    fn cogs_total_value(&self) -> Result<Option<f64>, HostError> {
        self.ensure_readable()?;
        Ok(self.cogs_total_value)
    }

    fn meta(&self, key: &str) -> Result<Option<String>, HostError> {
        self.ensure_readable()?;
        Ok(self.meta.get(key).map(ToString::to_string))
    }
}

/// In-memory host environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostSnapshot {
    #[serde(default)]
    pub commerce_active: bool,
    #[serde(default)]
    pub capabilities: HostCapabilities,
    #[serde(default)]
    pub options: HashMap<String, String>,
    #[serde(default)]
    pub plugins: HashMap<String, PluginStatus>,
    #[serde(default)]
    pub products: Vec<SnapshotProduct>,
}

impl HostSnapshot {
    /// Creates an empty snapshot (commerce inactive, nothing installed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a snapshot, choosing the parser from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let contents = fs::read_to_string(path)?;

        match extension.as_str() {
            "json" => Self::from_json_str(&contents),
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            other => Err(SnapshotError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, SnapshotError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Marks the commerce platform as active.
    pub fn with_commerce_active(mut self) -> Self {
        self.commerce_active = true;
        self
    }

    pub fn with_feature(mut self, feature: HostFeature) -> Self {
        self.capabilities = std::mem::take(&mut self.capabilities).with_feature(feature);
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn with_plugin(mut self, plugin_file: impl Into<String>, status: PluginStatus) -> Self {
        self.plugins.insert(plugin_file.into(), status);
        self
    }

    pub fn with_product(mut self, product: SnapshotProduct) -> Self {
        self.products.push(product);
        self
    }
}

impl HostEnvironment for HostSnapshot {
    fn is_commerce_active(&self) -> bool {
        self.commerce_active
    }

    fn capabilities(&self) -> HostCapabilities {
        self.capabilities.clone()
    }

    fn option(&self, name: &str) -> Option<String> {
        self.options.get(name).cloned()
    }

    fn plugin_status(&self, plugin_file: &str) -> PluginStatus {
        self.plugins.get(plugin_file).cloned().unwrap_or_default()
    }

    fn supports(&self, feature: HostFeature) -> bool {
        self.capabilities.supports(feature)
    }
}

impl ProductSource for HostSnapshot {
    fn product(&self, id: &ProductId) -> Option<&dyn CatalogProduct> {
        self.products
            .iter()
            .find(|product| &product.id == id)
            .map(|product| product as &dyn CatalogProduct)
    }
}
