mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Durable string key-value storage
///
/// `set` replaces the whole value stored under `key` in a single step, so a
/// reader never observes a partially written value.
pub trait KeyValueStorage: Send + Sync {
    /// Get the storage backend name (e.g., "memory", "file")
    fn storage_name(&self) -> &str;

    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}
