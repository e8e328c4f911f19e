//! Tracker
//!
//! Orchestrates the two page workflows: loading stored items and adding a
//! new item from the form.

use crate::config::{IdPolicy, TrackerConfig};
use crate::domain::{Calories, Field, Item, TrackerError, TrackerResult};
use crate::repository::{ItemStorage, KeyValueStore, PersistenceMirror, TrackerData};
use crate::view::{Selectors, View};

pub struct Tracker<S, V> {
    items: ItemStorage,
    mirror: PersistenceMirror<S>,
    view: V,
    id_policy: IdPolicy,
}

impl<S: KeyValueStore, V: View> Tracker<S, V> {
    pub fn new(config: &TrackerConfig, store: S, view: V) -> Self {
        Self {
            items: ItemStorage::new(),
            mirror: PersistenceMirror::new(store, config.storage_key.clone()),
            view,
            id_policy: config.id_policy,
        }
    }

    /// Render the current (normally empty) list
    pub fn init(&mut self) {
        log::info!("Initializing calorie tracker (storage key {:?})", self.mirror.key());
        self.view.populate_item_list(self.items.items());
    }

    /// Rehydrate from durable storage and render list and total
    pub fn on_page_load(&mut self) -> TrackerResult<()> {
        let count = match self.id_policy {
            IdPolicy::Restore => {
                let stored = self.mirror.items_from_storage()?;
                let count = stored.len();
                self.items.restore(stored);
                count
            }
            IdPolicy::Reassign => {
                // Stored ids are ignored, only name and calories are replayed
                let rows = self.mirror.stored_rows()?;
                for row in &rows {
                    self.items.add_item(&row.name, &row.calories.to_string())?;
                }
                rows.len()
            }
        };

        let total = self.items.total_calories();
        self.view.show_total_calories(total);
        self.view.populate_item_list(self.items.items());
        log::info!("Loaded {} items, total {} calories", count, total);
        Ok(())
    }

    /// Create an item from the form, render it, persist it and clear the form
    pub fn on_add_submit(&mut self) -> TrackerResult<Item> {
        let input = self.view.item_input();
        if input.name.is_empty() {
            return Err(TrackerError::EmptyField(Field::Name));
        }
        if input.calories.is_empty() {
            return Err(TrackerError::EmptyField(Field::Calories));
        }

        let item = self.items.add_item(&input.name, &input.calories).map_err(|err| {
            log::warn!("rejected input {:?}: {}", input, err);
            err
        })?;
        self.view.add_list_item(&item);

        let total = self.items.total_calories();
        self.view.show_total_calories(total);

        self.mirror.store_item(&item)?;
        self.view.clear_input();
        Ok(item)
    }

    pub fn items(&self) -> &[Item] {
        self.items.items()
    }

    pub fn total_calories(&mut self) -> Calories {
        self.items.total_calories()
    }

    pub fn data(&self) -> &TrackerData {
        self.items.data()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// DOM lookup keys of the page this tracker drives
    pub fn selectors(&self) -> Selectors {
        self.view.selectors()
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        self.mirror.store()
    }
}
