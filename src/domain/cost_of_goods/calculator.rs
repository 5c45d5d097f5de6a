//! Order-level cost of goods aggregation.

use serde::Serialize;
use std::sync::Arc;

use tracing::{debug, warn};

use super::provider::CogsProviderKind;
use super::registry::CogsProviderRegistry;
use crate::domain::foundation::{Cost, HostError, ProductId};
use crate::ports::CatalogProduct;

/// Cost of one order line and where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineCost {
    pub product_id: ProductId,
    pub provider: CogsProviderKind,
    pub cost: Cost,
}

/// A fully-valid order cost: every line resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCogs {
    pub total: Cost,
    pub lines: Vec<LineCost>,
}

/// Sums per-product costs into an order total.
///
/// The total is all-or-nothing: if any product lacks a usable cost the whole
/// order is reported as unavailable, never as a partial sum.
pub struct CostOfGoods {
    registry: Arc<CogsProviderRegistry>,
}

impl CostOfGoods {
    pub fn new(registry: Arc<CogsProviderRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this calculator queries.
    pub fn registry(&self) -> &CogsProviderRegistry {
        &self.registry
    }

    /// Total cost of goods for `products`, or `None` when it cannot be determined.
    pub fn calculate_total(
        &self,
        products: &[&dyn CatalogProduct],
    ) -> Result<Option<Cost>, HostError> {
        Ok(self.calculate_breakdown(products)?.map(|order| order.total))
    }

    /// Per-line breakdown plus total, under the same validity rules as
    /// [`Self::calculate_total`].
    pub fn calculate_breakdown(
        &self,
        products: &[&dyn CatalogProduct],
    ) -> Result<Option<OrderCogs>, HostError> {
        if !self.registry.has_available_provider() {
            debug!("No cost-of-goods provider available, skipping {} products", products.len());
            return Ok(None);
        }

        let mut total = Cost::ZERO;
        let mut lines = Vec::with_capacity(products.len());

        for product in products {
            // `Cost` cannot hold a negative value, so a missing cost is the only rejection left.
            let Some(resolved) = self.registry.resolve_cost_for_product(*product)? else {
                debug!("No usable cost for product {}, order total unavailable", product.id());
                return Ok(None);
            };
            let Some(next) = total.checked_add(resolved.cost) else {
                warn!("Order cost of goods overflows at product {}, total unavailable", product.id());
                return Ok(None);
            };
            total = next;
            lines.push(LineCost {
                product_id: product.id().clone(),
                provider: resolved.provider,
                cost: resolved.cost,
            });
        }

        Ok(Some(OrderCogs { total, lines }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cost_of_goods::registry::test_support::*;
    use proptest::prelude::*;

    use CogsProviderKind::{WooCommerce, WpFactory};

    fn calculator(active: &[&'static str]) -> CostOfGoods {
        CostOfGoods::new(Arc::new(CogsProviderRegistry::new(
            StubHost::with(active),
            all_descriptors(),
        )))
    }

    fn priced(id: &str, value: &str) -> StubProduct {
        StubProduct::new(id).with_value(WooCommerce, value)
    }

    fn total_of(calc: &CostOfGoods, products: &[StubProduct]) -> Option<f64> {
        let refs: Vec<&dyn CatalogProduct> =
            products.iter().map(|p| p as &dyn CatalogProduct).collect();
        calc.calculate_total(&refs).unwrap().map(|c| c.value())
    }

    #[test]
    fn no_provider_means_no_total() {
        let calc = calculator(&[]);
        let products = [priced("1", "10")];

        assert_eq!(total_of(&calc, &products), None);
    }

    #[test]
    fn sums_valid_costs() {
        let calc = calculator(&["WooC"]);
        let products = [priced("1", "10"), priced("2", "20"), priced("3", "5")];

        assert_eq!(total_of(&calc, &products), Some(35.0));
    }

    #[test]
    fn negative_line_invalidates_order() {
        let calc = calculator(&["WooC"]);
        let products = [priced("1", "10"), priced("2", "-1"), priced("3", "5")];

        assert_eq!(total_of(&calc, &products), None);
    }

    #[test]
    fn zero_line_invalidates_order() {
        let calc = calculator(&["WooC"]);
        let products = [priced("1", "10"), priced("2", "0"), priced("3", "5")];

        assert_eq!(total_of(&calc, &products), None);
    }

    #[test]
    fn lines_may_come_from_different_providers() {
        let calc = calculator(&["WooC", "WPFactory"]);
        let products = [
            priced("1", "10"),
            StubProduct::new("2")
                .with_value(WooCommerce, "0")
                .with_value(WpFactory, "15"),
        ];
        let refs: Vec<&dyn CatalogProduct> =
            products.iter().map(|p| p as &dyn CatalogProduct).collect();

        let order = calc.calculate_breakdown(&refs).unwrap().unwrap();
        assert_eq!(order.total.value(), 25.0);
        assert_eq!(order.lines[0].provider, WooCommerce);
        assert_eq!(order.lines[1].provider, WpFactory);
        assert_eq!(order.lines[1].product_id.as_str(), "2");
    }

    #[test]
    fn empty_order_with_provider_is_zero() {
        let calc = calculator(&["WooC"]);
        assert_eq!(total_of(&calc, &[]), Some(0.0));
    }

    #[test]
    fn overflowing_total_is_unavailable() {
        let calc = calculator(&["WooC"]);
        let products = [priced("1", "1e308"), priced("2", "1e308")];

        assert_eq!(total_of(&calc, &products), None);
    }

    #[test]
    fn large_finite_total_is_kept() {
        let calc = calculator(&["WooC"]);
        let products = [priced("1", "1e307"), priced("2", "1e307")];

        let total = total_of(&calc, &products).unwrap();
        assert!(total.is_finite());
        assert_eq!(total, 2e307);
    }

    #[test]
    fn host_failure_propagates_to_caller() {
        let calc = calculator(&["WooC"]);
        let products = [priced("1", "10"), StubProduct::new("2").broken()];
        let refs: Vec<&dyn CatalogProduct> =
            products.iter().map(|p| p as &dyn CatalogProduct).collect();

        assert!(calc.calculate_total(&refs).is_err());
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let calc = calculator(&["WooC"]);
        let products = [priced("1", "4.5"), priced("2", "5.5")];

        let first = total_of(&calc, &products);
        let second = total_of(&calc, &products);
        assert_eq!(first, Some(10.0));
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn total_equals_sum_of_positive_costs(cents in prop::collection::vec(1u32..1_000_000, 0..20)) {
            let calc = calculator(&["WooC"]);
            let products: Vec<StubProduct> = cents
                .iter()
                .enumerate()
                .map(|(i, c)| priced(&format!("p{}", i), &c.to_string()))
                .collect();

            let expected: f64 = cents.iter().map(|c| f64::from(*c)).sum();
            prop_assert_eq!(total_of(&calc, &products), Some(expected));
        }

        #[test]
        fn any_unusable_line_voids_the_total(
            cents in prop::collection::vec(1u32..1_000, 1..10),
            bad_index in any::<prop::sample::Index>(),
            bad_value in prop::sample::select(vec!["0", "-3", "abc", ""]),
        ) {
            let calc = calculator(&["WooC"]);
            let bad = bad_index.index(cents.len());
            let products: Vec<StubProduct> = cents
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let value = if i == bad { bad_value.to_string() } else { c.to_string() };
                    priced(&format!("p{}", i), &value)
                })
                .collect();

            prop_assert_eq!(total_of(&calc, &products), None);
        }
    }
}
