//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod kv;
pub mod repository;
pub mod store;

pub use config::{Config, Language};
pub use kv::{FileBackend, KeyValueBackend, MemoryBackend};
pub use repository::{FileSystemRepository, TrackerRepository};
pub use store::{EntryStore, StoreDocument, DEFAULT_STORAGE_KEY, STORE_VERSION};
