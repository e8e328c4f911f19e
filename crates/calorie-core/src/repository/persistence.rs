//! Persistence Mirror
//!
//! Keeps a JSON copy of the item list under a single key of a durable
//! key-value store. Every write is a full read-modify-write of that key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::traits::KeyValueStore;
use crate::domain::{Calories, Item, TrackerError, TrackerResult};

/// One stored entry, as found under the key.
///
/// The id is kept as raw JSON so entries edited outside the tracker still
/// load when their id is not needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    #[serde(default)]
    pub id: Value,
    pub name: String,
    pub calories: Calories,
}

impl From<&Item> for StoredItem {
    fn from(item: &Item) -> Self {
        Self {
            id: Value::from(item.id),
            name: item.name.clone(),
            calories: item.calories,
        }
    }
}

impl TryFrom<StoredItem> for Item {
    type Error = TrackerError;

    fn try_from(stored: StoredItem) -> TrackerResult<Self> {
        let id = stored
            .id
            .as_u64()
            .and_then(|id| u32::try_from(id).ok())
            .ok_or_else(|| {
                TrackerError::CorruptStorage(format!("invalid id {} for {:?}", stored.id, stored.name))
            })?;
        Ok(Item::new(id, stored.name, stored.calories))
    }
}

pub struct PersistenceMirror<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceMirror<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append one item to the stored list; existing entries are written back untouched
    pub fn store_item(&mut self, item: &Item) -> TrackerResult<()> {
        let mut rows = self.stored_rows()?;
        rows.push(StoredItem::from(item));
        let json = serde_json::to_string(&rows)?;
        self.store.set(&self.key, &json)?;
        log::debug!("persisted {} items under {:?}", rows.len(), self.key);
        Ok(())
    }

    /// Read the stored entries without interpreting their ids;
    /// empty when the key is absent or holds `null`
    pub fn stored_rows(&self) -> TrackerResult<Vec<StoredItem>> {
        match self.store.get(&self.key)? {
            Some(json) => {
                let rows: Option<Vec<StoredItem>> = serde_json::from_str(&json)?;
                Ok(rows.unwrap_or_default())
            }
            None => Ok(Vec::new()),
        }
    }

    /// Read the stored list as items; any id that is not a `u32` fails the read
    pub fn items_from_storage(&self) -> TrackerResult<Vec<Item>> {
        self.stored_rows()?.into_iter().map(Item::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    #[test]
    fn test_absent_key_reads_empty() {
        let mirror = PersistenceMirror::new(MemoryStore::new(), "items");
        assert!(mirror.items_from_storage().unwrap().is_empty());
    }

    #[test]
    fn test_null_reads_empty() {
        let mirror = PersistenceMirror::new(MemoryStore::with_entry("items", "null"), "items");
        assert!(mirror.items_from_storage().unwrap().is_empty());
    }

    #[test]
    fn test_store_appends_in_order() {
        let mut mirror = PersistenceMirror::new(MemoryStore::new(), "items");
        mirror.store_item(&Item::new(0, "Eggs", 300)).unwrap();
        mirror.store_item(&Item::new(1, "Toast", 150)).unwrap();

        assert_eq!(
            mirror.store().raw("items"),
            Some(r#"[{"id":0,"name":"Eggs","calories":300},{"id":1,"name":"Toast","calories":150}]"#)
        );
        assert_eq!(mirror.store().writes(), 2);
    }

    #[test]
    fn test_round_trip_keeps_values() {
        let mut mirror = PersistenceMirror::new(MemoryStore::new(), "meals");
        let stored = vec![Item::new(4, "Soup", 120), Item::new(9, "Bread", 80)];
        for item in &stored {
            mirror.store_item(item).unwrap();
        }
        assert_eq!(mirror.items_from_storage().unwrap(), stored);
    }

    #[test]
    fn test_rows_keep_unusual_ids() {
        let mirror = PersistenceMirror::new(
            MemoryStore::with_entry("items", r#"[{"id":-1,"name":"Pie","calories":500},{"name":"Tea","calories":5}]"#),
            "items",
        );
        let rows = mirror.stored_rows().unwrap();
        assert_eq!(rows[0].id, Value::from(-1));
        assert_eq!(rows[1].id, Value::Null);
        assert!(matches!(mirror.items_from_storage(), Err(TrackerError::CorruptStorage(_))));
    }

    #[test]
    fn test_store_preserves_existing_rows() {
        let mut mirror = PersistenceMirror::new(
            MemoryStore::with_entry("items", r#"[{"id":-1,"name":"Pie","calories":500}]"#),
            "items",
        );
        mirror.store_item(&Item::new(0, "Tea", 5)).unwrap();
        assert_eq!(
            mirror.store().raw("items"),
            Some(r#"[{"id":-1,"name":"Pie","calories":500},{"id":0,"name":"Tea","calories":5}]"#)
        );
    }

    #[test]
    fn test_malformed_data_fails_read() {
        let mirror = PersistenceMirror::new(MemoryStore::with_entry("items", "[{\"id\":"), "items");
        assert!(matches!(mirror.items_from_storage(), Err(TrackerError::CorruptStorage(_))));
    }

    #[test]
    fn test_malformed_data_blocks_store() {
        let mut mirror = PersistenceMirror::new(MemoryStore::with_entry("items", "{}"), "items");
        let result = mirror.store_item(&Item::new(0, "Eggs", 300));
        assert!(matches!(result, Err(TrackerError::CorruptStorage(_))));
        assert_eq!(mirror.store().raw("items"), Some("{}"));
    }
}
