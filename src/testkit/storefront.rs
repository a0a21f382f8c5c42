//! Storefronts wired to a [`FixedClock`] for tests.

use std::path::Path;
use std::sync::Arc;

use super::clock::FixedClock;
use crate::adapter::store::MemoryStore;
use crate::application::Storefront;
use crate::config::ArchiveConfig;
use crate::error::Result;
use crate::port::Notifier;

/// A storefront together with the handles tests poke at.
pub struct TestStorefront {
    pub shop: Storefront,
    pub clock: Arc<FixedClock>,
    pub store: Arc<MemoryStore>,
}

/// In-memory storefront starting at `clock`'s time.
pub fn in_memory(clock: FixedClock, archive: ArchiveConfig) -> Result<TestStorefront> {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(clock);
    let shop = Storefront::builder()
        .store(store.clone())
        .clock(clock.clone())
        .archive(archive)
        .build()?;
    Ok(TestStorefront { shop, clock, store })
}

/// In-memory storefront publishing to `notifier`.
pub fn with_notifier(
    clock: FixedClock,
    notifier: impl Notifier + 'static,
) -> Result<TestStorefront> {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(clock);
    let shop = Storefront::builder()
        .store(store.clone())
        .clock(clock.clone())
        .notifier(notifier)
        .build()?;
    Ok(TestStorefront { shop, clock, store })
}

/// File-backed storefront in `dir`.
pub fn on_disk(dir: &Path, clock: Arc<FixedClock>, archive: ArchiveConfig) -> Result<Storefront> {
    Storefront::builder()
        .data_dir(dir)
        .clock(clock)
        .archive(archive)
        .build()
}
