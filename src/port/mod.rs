//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │       Application       │
//!                    │  RecordStore, rollover, │
//!                    │  orders, catalog        │
//!                    └─────────────────────────┘
//!                       │         │         │
//!                       ▼         ▼         ▼
//!                 ┌─────────┐ ┌───────┐ ┌──────────┐
//!                 │Document │ │ Clock │ │ Notifier │
//!                 │  Store  │ │       │ │          │
//!                 └─────────┘ └───────┘ └──────────┘
//! ```
//!
//! - [`DocumentStore`] - Named JSON documents (files on disk, or memory in tests)
//! - [`Clock`] - Source of "now" and "today"
//! - [`Notifier`] - Order and archive events

mod clock;
mod notifier;
mod store;

pub use clock::{Clock, SystemClock};
pub use notifier::{
    DailyArchivedEvent, Event, LogNotifier, MonthlyArchivedEvent, Notifier, NotifierRegistry,
    NullNotifier, OrderCreatedEvent,
};
pub use store::DocumentStore;
