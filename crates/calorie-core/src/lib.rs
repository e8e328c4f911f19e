//! Calorie Tracker Core
//!
//! Layered architecture:
//! - domain: Item entity, calorie parsing and errors
//! - repository: in-memory item storage and the durable persistence mirror
//! - view: rendering capability driven by the tracker
//! - tracker: orchestrates page load and add-item workflows

pub mod config;
pub mod domain;
pub mod repository;
pub mod tracker;
pub mod view;

pub use config::{IdPolicy, TrackerConfig};
pub use domain::{Calories, Entity, Field, Item, ItemInput, TrackerError, TrackerResult};
pub use repository::{ItemStorage, KeyValueStore, MemoryStore, PersistenceMirror, StoredItem, TrackerData};
pub use tracker::Tracker;
pub use view::{MemoryView, Selectors, View};
