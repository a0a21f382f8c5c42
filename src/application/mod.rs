//! Application services (use cases).
//!
//! These services orchestrate domain logic over the record store. The
//! [`Storefront`] facade wires them together and publishes events.

pub mod catalog;
pub mod orders;
pub mod records;
pub mod rollover;
pub mod stats;
mod storefront;

pub use catalog::Catalog;
pub use orders::{OrderBook, PlacedOrder, StatusChange};
pub use records::{Collection, RecordStore};
pub use rollover::{ManualReset, RolloverReport};
pub use stats::StatsCounter;
pub use storefront::{Storefront, StorefrontBuilder};
