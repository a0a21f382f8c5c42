//! Domain validation errors for orders and products.
//!
//! Errors in this module are produced at the boundary, when client-supplied
//! data is turned into domain records or when an order is asked to move to a
//! new status.
//!
//! # Examples
//!
//! ```
//! use pharmacy_ledger::domain::error::DomainError;
//! use pharmacy_ledger::domain::NewOrder;
//!
//! let result = NewOrder::default().validate();
//! assert!(matches!(result, Err(DomainError::Validation(ref fields)) if fields.len() == 4));
//! ```

use std::fmt;

use thiserror::Error;

use super::order::OrderStatus;

/// A single field-level validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field, as it appears on the wire.
    pub field: String,
    /// Human readable message.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation.
    #[error("validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// The order cannot move from its current status to the requested one.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
    },
}

impl DomainError {
    /// Single-field validation failure.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }

    /// Field-level messages, empty for non-validation errors.
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        match self {
            Self::Validation(fields) => fields,
            Self::InvalidTransition { .. } => &[],
        }
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turn an accumulated list of field errors into a result.
pub(crate) fn collect(errors: Vec<FieldError>) -> Result<(), DomainError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_field() {
        let err = DomainError::Validation(vec![
            FieldError::new("name", "Product name is required"),
            FieldError::new("price", "Product price must be greater than 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: name: Product name is required; price: Product price must be greater than 0"
        );
        assert_eq!(err.fields().len(), 2);
    }

    #[test]
    fn transition_error_has_no_fields() {
        let err = DomainError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Pending,
        };
        assert!(err.fields().is_empty());
        assert_eq!(
            err.to_string(),
            "invalid status transition from delivered to pending"
        );
    }

    #[test]
    fn collect_is_ok_without_errors() {
        assert!(collect(vec![]).is_ok());
        assert!(collect(vec![FieldError::new("phone", "required")]).is_err());
    }
}
