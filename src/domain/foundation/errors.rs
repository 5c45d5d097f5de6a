//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must not be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a negative value validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Exceptional failures raised by the host platform while answering a query.
///
/// "No data" is never a `HostError`; adapters signal it with `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Product '{product_id}' could not be read: {reason}")]
    ProductUnreadable { product_id: String, reason: String },
}

impl HostError {
    /// Creates a product read failure.
    pub fn product_unreadable(product_id: impl Into<String>, reason: impl Into<String>) -> Self {
        HostError::ProductUnreadable {
            product_id: product_id.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised when building an adapter over a third-party plugin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrationError {
    /// The adapter was requested while its plugin is missing or inactive.
    #[error("Integration '{integration_name}' is not available. Make sure the 3P plugin is installed and active")]
    Unavailable { integration_name: String },
}

impl IntegrationError {
    /// Creates an unavailable integration error.
    pub fn unavailable(integration_name: impl Into<String>) -> Self {
        IntegrationError::Unavailable {
            integration_name: integration_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_error_names_the_integration() {
        let err = IntegrationError::unavailable("WooCommerce Cost of Goods");
        assert_eq!(
            err.to_string(),
            "Integration 'WooCommerce Cost of Goods' is not available. Make sure the 3P plugin is installed and active"
        );
    }

    #[test]
    fn validation_error_messages() {
        assert_eq!(
            ValidationError::empty_field("product_id").to_string(),
            "Field 'product_id' cannot be empty"
        );
        assert_eq!(
            ValidationError::negative("cost", -1.5).to_string(),
            "Field 'cost' must not be negative, got -1.5"
        );
    }

    #[test]
    fn host_error_messages() {
        let err = HostError::product_unreadable("42", "post deleted");
        assert_eq!(err.to_string(), "Product '42' could not be read: post deleted");
    }
}
