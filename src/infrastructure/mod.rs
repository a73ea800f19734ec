//! Card store implementations of the `CardFinder` port.

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;

pub const CARD_NOT_FOUND: &str = "card not found";
