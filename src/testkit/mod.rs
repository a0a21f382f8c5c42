//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`clock`] - [`FixedClock`](clock::FixedClock), a settable clock.
//! - [`domain`] - Builders for checkout payloads, items and products.
//! - [`config`] - Canonical archive configurations.
//! - [`storefront`] - In-memory and temp-dir storefronts on a fixed clock.

pub mod clock;
pub mod config;
pub mod domain;
pub mod storefront;
