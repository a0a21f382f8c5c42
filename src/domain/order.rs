//! Customer orders and their status lifecycle.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{collect, DomainError, FieldError};
use super::ids::{OrderId, ProductId};
use super::money::Money;

/// Status of an order.
///
/// ```text
/// pending ──► confirmed ──► shipped ──► delivered
///    │            │            │
///    └────────────┴────────────┴──► cancelled
/// ```
///
/// `confirmed` may also go straight to `delivered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }

    /// Returns true for states with no outgoing transition.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Delivered)
    }

    /// Whether an order in this status may move to `next`.
    ///
    /// Re-applying the current status is always allowed.
    #[must_use]
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::Shipped | Self::Delivered | Self::Cancelled)
                | (Self::Shipped, Self::Delivered | Self::Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::field("status", format!("Invalid status '{s}'")))
    }
}

/// A line item of an order, priced as it was in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Money>,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            old_price: None,
            quantity,
        }
    }

    /// `price * quantity`, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    /// `price * quantity`, or `None` when it does not fit a decimal.
    #[must_use]
    pub fn checked_line_total(&self) -> Option<Money> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Sum of all line totals, saturating at [`Decimal::MAX`].
#[must_use]
pub fn order_total(items: &[OrderItem]) -> Money {
    items
        .iter()
        .map(OrderItem::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sum of all line totals, or `None` on overflow.
#[must_use]
pub fn checked_order_total(items: &[OrderItem]) -> Option<Money> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.checked_line_total()?))
}

/// Checkout payload submitted by a customer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Total claimed by the client. Never trusted; the total is recomputed
    /// from the items.
    #[serde(default, rename = "totalAmount")]
    pub client_total: Option<Money>,
}

impl NewOrder {
    /// Check required fields and item sanity.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();

        if self.customer_name.trim().is_empty() {
            errors.push(FieldError::new("customerName", "Customer name is required"));
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "Phone number is required"));
        }
        if self.address.trim().is_empty() {
            errors.push(FieldError::new("address", "Address is required"));
        }
        if self.items.is_empty() {
            errors.push(FieldError::new("items", "Order must have at least one item"));
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                errors.push(FieldError::new(
                    format!("items[{index}].quantity"),
                    "Quantity must be at least 1",
                ));
            }
            if item.price.is_sign_negative() {
                errors.push(FieldError::new(
                    format!("items[{index}].price"),
                    "Price cannot be negative",
                ));
            } else if item.checked_line_total().is_none() {
                errors.push(FieldError::new(
                    format!("items[{index}].price"),
                    "Price times quantity is too large",
                ));
            }
        }
        if errors.is_empty() && checked_order_total(&self.items).is_none() {
            errors.push(FieldError::new("items", "Order total is too large"));
        }

        collect(errors)
    }
}

/// An order in the live collection or in a monthly archive file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub details: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Validate a checkout payload and turn it into a pending order.
    ///
    /// The total is always computed from the items.
    pub fn place(new: NewOrder, id: OrderId, now: DateTime<Utc>) -> Result<Self, DomainError> {
        new.validate()?;

        let total_amount = order_total(&new.items);
        Ok(Self {
            id,
            customer_name: new.customer_name.trim().to_string(),
            phone: new.phone.trim().to_string(),
            address: new.address.trim().to_string(),
            details: new.details,
            items: new.items,
            total_amount,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: None,
        })
    }

    /// Calendar day (UTC) the order was placed on.
    #[must_use]
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Number of units across all items.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Move to `next`, stamping `updated_at`. Returns the previous status.
    pub fn transition(
        &mut self,
        next: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<OrderStatus, DomainError> {
        let previous = self.status;
        if !previous.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: previous,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = Some(now);
        Ok(previous)
    }
}
