//! Domain Layer - Core Entity Trait
//!
//! Defines the contract for stored entities and the error type shared by
//! every layer of the tracker.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Ord + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Form field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Calories,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::Calories => f.write_str("calories"),
        }
    }
}

/// Tracker-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// A required form field was left empty
    #[error("Empty field: {0}")]
    EmptyField(Field),
    /// Calorie text has no leading integer
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    /// The stored item list could not be deserialized
    #[error("Corrupt storage: {0}")]
    CorruptStorage(String),
    /// The durable store rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::CorruptStorage(err.to_string())
    }
}
