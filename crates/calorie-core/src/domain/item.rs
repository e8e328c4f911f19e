//! Item Entity
//!
//! Represents one logged food entry.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, TrackerError, TrackerResult};

/// Calorie amount of an item or a total
pub type Calories = i64;

/// A logged food entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within the in-memory list
    pub id: u32,
    /// Food label
    pub name: String,
    /// Calorie count
    pub calories: Calories,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, calories: Calories) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
        }
    }

    /// DOM id of the rendered list entry
    pub fn element_id(&self) -> String {
        format!("item-{}", self.id)
    }
}

impl Entity for Item {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Raw form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub calories: String,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
        }
    }
}

/// Parse calorie text with leading-integer semantics.
///
/// Skips leading whitespace, accepts one optional sign and takes the longest
/// run of ASCII digits; anything after the digits is ignored.
pub fn parse_calories(text: &str) -> TrackerResult<Calories> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return Err(TrackerError::InvalidNumber(text.to_string()));
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{}", digits).parse::<Calories>()
    } else {
        digits.parse::<Calories>()
    };
    parsed.map_err(|_| TrackerError::InvalidNumber(text.to_string()))
}
