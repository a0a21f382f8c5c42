//! Pharmacy storefront back-office on a directory of JSON files.
//!
//! The heart of the crate is the lazy stats rollover: running daily and
//! monthly sales counters that, on first access after a day or month has
//! ended, archive the finished period, rotate the live orders of a finished
//! month into their own file, and reset. Nothing is scheduled.
//!
//! # Modules
//!
//! - [`domain`] - Orders, products, counters and archive records
//! - [`port`] - Document store, clock and notifier traits
//! - [`adapter`] - File and in-memory document stores
//! - [`application`] - Record store, rollover, order book, catalog and the
//!   [`Storefront`](application::Storefront) facade
//! - [`config`] - TOML configuration and logging setup
//! - [`cli`] - The `pharmacy-ledger` command line
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use pharmacy_ledger::application::Storefront;
//! use pharmacy_ledger::config::Config;
//!
//! let config = Config::load_or_default("pharmacy-ledger.toml")?;
//! let shop = Storefront::from_config(&config)?;
//! let stats = shop.stats()?;
//! println!("today: {} over {} orders", stats.daily_sales, stats.daily_orders);
//! # Ok::<(), pharmacy_ledger::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
