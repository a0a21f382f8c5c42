//! Document store backends.
//!
//! - [`FileStore`] - one `<name>.json` file per document in a data directory
//! - [`MemoryStore`] - in-process map, with write fault injection for tests

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
