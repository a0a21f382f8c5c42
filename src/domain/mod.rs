//! Storefront domain types: orders, products, counters and archive records.

pub mod archive;
pub mod error;
mod ids;
mod money;
pub mod order;
pub mod product;
pub mod stats;

pub use archive::{push_capped, DailyArchiveRecord, MonthKey, MonthlyArchiveRecord};
pub use error::{DomainError, FieldError};
pub use ids::{OrderId, ProductId};
pub use money::{saturating_sub, Money};
pub use order::{checked_order_total, order_total, NewOrder, Order, OrderItem, OrderStatus};
pub use product::{NewProduct, Product, ProductPatch};
pub use stats::StatsSnapshot;
