//! Cost value object (non-negative monetary amount in store currency).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite, non-negative cost in the store's base currency.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Cost(f64);

impl Cost {
    /// Zero cost.
    pub const ZERO: Self = Self(0.0);

    /// Creates a Cost, returning error if negative or not a finite number.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "cost",
                format!("expected a finite number, got {}", value),
            ));
        }
        if value < 0.0 {
            return Err(ValidationError::negative("cost", value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// True when the cost is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Sum of two costs, or `None` if it no longer fits in a finite `f64`.
    pub fn checked_add(self, rhs: Cost) -> Option<Cost> {
        Cost::try_new(self.0 + rhs.0).ok()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Cost {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_try_new_accepts_non_negative_values() {
        assert_eq!(Cost::try_new(0.0).unwrap(), Cost::ZERO);
        assert_eq!(Cost::try_new(12.5).unwrap().value(), 12.5);
    }

    #[test]
    fn cost_try_new_rejects_negative() {
        match Cost::try_new(-1.0) {
            Err(ValidationError::Negative { field, actual }) => {
                assert_eq!(field, "cost");
                assert_eq!(actual, -1.0);
            }
            other => panic!("Expected Negative error, got {:?}", other),
        }
    }

    #[test]
    fn cost_try_new_rejects_non_finite() {
        assert!(Cost::try_new(f64::NAN).is_err());
        assert!(Cost::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_is_not_positive() {
        assert!(!Cost::ZERO.is_positive());
        assert!(Cost::try_new(0.01).unwrap().is_positive());
    }

    #[test]
    fn checked_add_sums_costs() {
        let total = [10.0, 20.0, 5.0]
            .into_iter()
            .map(|v| Cost::try_new(v).unwrap())
            .try_fold(Cost::ZERO, Cost::checked_add);
        assert_eq!(total.map(|c| c.value()), Some(35.0));
    }

    #[test]
    fn checked_add_refuses_overflow_to_infinity() {
        let huge = Cost::try_new(f64::MAX).unwrap();
        assert_eq!(huge.checked_add(huge), None);
        assert_eq!(huge.checked_add(Cost::ZERO), Some(huge));
    }

    #[test]
    fn cost_displays_two_decimals() {
        assert_eq!(Cost::try_new(3.5).unwrap().to_string(), "3.50");
    }

    #[test]
    fn cost_serde_rejects_negative() {
        let cost: Cost = serde_json::from_str("4.25").unwrap();
        assert_eq!(cost.value(), 4.25);
        assert!(serde_json::from_str::<Cost>("-3").is_err());
    }
}
