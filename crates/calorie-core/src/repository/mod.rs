//! Repository Layer
//!
//! In-memory item storage plus a mirror of the list in a durable
//! key-value store.

mod traits;
mod item_storage;
mod persistence;
mod memory;


pub use traits::KeyValueStore;
pub use item_storage::{ItemStorage, TrackerData};
pub use persistence::{PersistenceMirror, StoredItem};
pub use memory::MemoryStore;
