//! Item Storage
//!
//! Canonical in-memory item list for the page lifetime.

use crate::domain::{parse_calories, Calories, Entity, Item, TrackerError, TrackerResult};

/// Internal data structure, exposed for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerData {
    pub items: Vec<Item>,
    /// Last computed total, refreshed by `ItemStorage::total_calories`
    pub total: Calories,
}

#[derive(Debug, Default)]
pub struct ItemStorage {
    data: TrackerData,
}

impl ItemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.data.items
    }

    /// Parse `calories_text`, assign the next id and append a new item
    pub fn add_item(&mut self, name: &str, calories_text: &str) -> TrackerResult<Item> {
        let calories = parse_calories(calories_text)?;
        let item = Item::new(self.next_id()?, name, calories);
        log::debug!("added item {} ({}: {})", item.id, item.name, item.calories);
        self.data.items.push(item.clone());
        Ok(item)
    }

    /// Append stored items as they are, ids included
    pub fn restore(&mut self, items: impl IntoIterator<Item = Item>) {
        self.data.items.extend(items);
    }

    /// Recompute the sum of all calories and cache it
    pub fn total_calories(&mut self) -> Calories {
        self.data.total = self
            .data
            .items
            .iter()
            .fold(0, |total: Calories, item| total.saturating_add(item.calories));
        self.data.total
    }

    pub fn data(&self) -> &TrackerData {
        &self.data
    }

    fn next_id(&self) -> TrackerResult<u32> {
        match self.data.items.iter().map(|item| item.id()).max() {
            None => Ok(0),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| TrackerError::Storage("id space exhausted".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let mut storage = ItemStorage::new();
        let ids: Vec<u32> = ["a", "b", "c", "d"]
            .iter()
            .map(|name| storage.add_item(name, "10").unwrap().id)
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_next_id_follows_max_restored_id() {
        let mut storage = ItemStorage::new();
        storage.restore(vec![Item::new(7, "Pie", 500), Item::new(2, "Tea", 5)]);
        let item = storage.add_item("Cake", "350").unwrap();
        assert_eq!(item.id, 8);
    }

    #[test]
    fn test_max_restored_id_exhausts_id_space() {
        let mut storage = ItemStorage::new();
        storage.restore(vec![Item::new(u32::MAX, "Pie", 500)]);
        let err = storage.add_item("Tea", "5").unwrap_err();
        assert_eq!(err, TrackerError::Storage("id space exhausted".to_string()));
        assert_eq!(storage.items().len(), 1);
    }

    #[test]
    fn test_total_of_empty_is_zero() {
        let mut storage = ItemStorage::new();
        assert_eq!(storage.total_calories(), 0);
    }

    #[test]
    fn test_total_is_sum_and_cached() {
        let mut storage = ItemStorage::new();
        storage.add_item("Eggs", "300").unwrap();
        storage.add_item("Toast", "150").unwrap();
        storage.add_item("Run", "-200").unwrap();
        assert_eq!(storage.total_calories(), 250);
        assert_eq!(storage.data().total, 250);
    }

    #[test]
    fn test_total_saturates() {
        let mut storage = ItemStorage::new();
        storage.restore(vec![Item::new(0, "a", Calories::MAX), Item::new(1, "b", 1)]);
        assert_eq!(storage.total_calories(), Calories::MAX);
    }

    #[test]
    fn test_invalid_number_adds_nothing() {
        let mut storage = ItemStorage::new();
        let err = storage.add_item("Water", "lots").unwrap_err();
        assert_eq!(err, TrackerError::InvalidNumber("lots".to_string()));
        assert!(storage.items().is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut storage = ItemStorage::new();
        storage.add_item("Eggs", "300").unwrap();
        storage.add_item("Toast", "150").unwrap();
        let names: Vec<&str> = storage.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Toast"]);
    }
}
