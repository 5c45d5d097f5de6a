//! CalculateOrderCogsHandler - Query handler for an order's cost of goods.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use tracing::{info, warn};

use crate::domain::cost_of_goods::{CostOfGoods, LineCost};
use crate::domain::foundation::{Cost, HostError, ProductId};
use crate::ports::{CatalogProduct, ProductSource};

/// Query for the cost of goods of a set of order lines.
#[derive(Debug, Clone)]
pub struct CalculateOrderCogsQuery {
    pub product_ids: Vec<ProductId>,
}

/// Result of an order cost query.
///
/// `total` is `None` whenever any line is unpriced or unknown; `lines` is
/// populated only when `total` is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCogsView {
    pub total: Option<Cost>,
    pub lines: Vec<LineCost>,
    /// Keys of the providers available on this host, in priority order.
    pub provider_keys: Vec<&'static str>,
    /// Requested ids the product source does not know.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_products: Vec<ProductId>,
}

#[derive(Debug, Error)]
pub enum OrderCogsError {
    #[error("Cost of goods calculation is disabled")]
    Disabled,

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Handler resolving product ids and aggregating their costs.
pub struct CalculateOrderCogsHandler {
    calculator: Arc<CostOfGoods>,
    products: Arc<dyn ProductSource>,
    enabled: bool,
}

impl CalculateOrderCogsHandler {
    pub fn new(calculator: Arc<CostOfGoods>, products: Arc<dyn ProductSource>) -> Self {
        Self {
            calculator,
            products,
            enabled: true,
        }
    }

    /// Makes every query fail with [`OrderCogsError::Disabled`] when `enabled` is false.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn handle(&self, query: CalculateOrderCogsQuery) -> Result<OrderCogsView, OrderCogsError> {
        if !self.enabled {
            return Err(OrderCogsError::Disabled);
        }

        let provider_keys = self
            .calculator
            .registry()
            .get_available_providers()
            .iter()
            .map(|provider| provider.kind().key())
            .collect();

        let mut products: Vec<&dyn CatalogProduct> = Vec::with_capacity(query.product_ids.len());
        let mut unknown_products = Vec::new();
        for id in &query.product_ids {
            match self.products.product(id) {
                Some(product) => products.push(product),
                None => unknown_products.push(id.clone()),
            }
        }

        if !unknown_products.is_empty() {
            warn!(
                unknown = unknown_products.len(),
                "Order references unknown products, total unavailable"
            );
            return Ok(OrderCogsView {
                total: None,
                lines: Vec::new(),
                provider_keys,
                unknown_products,
            });
        }

        let (total, lines) = match self.calculator.calculate_breakdown(&products)? {
            Some(order) => (Some(order.total), order.lines),
            None => (None, Vec::new()),
        };

        info!(
            products = products.len(),
            resolved = total.is_some(),
            "Calculated order cost of goods"
        );

        Ok(OrderCogsView {
            total,
            lines,
            provider_keys,
            unknown_products,
        })
    }
}
