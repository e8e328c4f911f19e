//! Domain Layer
//!
//! Contains the Item entity and core abstractions.
//! This layer has no platform dependencies (only serde and thiserror).

mod entity;
mod item;

pub use entity::{Entity, Field, TrackerError, TrackerResult};
pub use item::{parse_calories, Calories, Item, ItemInput};
