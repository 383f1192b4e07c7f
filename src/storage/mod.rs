pub mod memory;
pub mod trait_def;

pub use memory::{MemoryStorage, MAX_CREATE_ATTEMPTS};
pub use trait_def::{Storage, StorageError, StorageResult};
