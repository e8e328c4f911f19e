//! Leptos View
//!
//! `View` implementation that writes into the reactive store; the
//! components re-render from it.

use calorie_core::{Calories, Item, ItemInput, View};

use crate::store::*;

#[derive(Clone, Copy)]
pub struct LeptosView {
    store: ViewStore,
}

impl LeptosView {
    pub fn new(store: ViewStore) -> Self {
        Self { store }
    }
}

impl View for LeptosView {
    fn populate_item_list(&mut self, items: &[Item]) {
        store_set_items(&self.store, items.to_vec());
    }

    fn item_input(&self) -> ItemInput {
        store_input_untracked(&self.store)
    }

    fn add_list_item(&mut self, item: &Item) {
        store_push_item(&self.store, item.clone());
    }

    fn clear_input(&mut self) {
        store_clear_input(&self.store);
    }

    fn show_total_calories(&mut self, total: Calories) {
        store_set_total(&self.store, total);
    }
}
