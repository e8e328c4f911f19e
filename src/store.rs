//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use calorie_core::{Calories, Item, ItemInput};
use leptos::prelude::*;
use reactive_stores::Store;

/// Everything the page renders, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Items shown in the list, in display order
    pub items: Vec<Item>,
    /// Name input value
    pub name_input: String,
    /// Calories input value
    pub calories_input: String,
    /// Displayed total
    pub total: Calories,
    /// Last error shown under the form
    pub status: Option<String>,
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_items(store: &ViewStore) -> Vec<Item> {
    store.items().get()
}

pub fn store_set_items(store: &ViewStore, items: Vec<Item>) {
    store.items().set(items);
}

/// Append one item to the displayed list
pub fn store_push_item(store: &ViewStore, item: Item) {
    store.items().write().push(item);
}

pub fn store_name_input(store: &ViewStore) -> String {
    store.name_input().get()
}

pub fn store_calories_input(store: &ViewStore) -> String {
    store.calories_input().get()
}

pub fn store_set_name_input(store: &ViewStore, name: String) {
    store.name_input().set(name);
}

pub fn store_set_calories_input(store: &ViewStore, calories: String) {
    store.calories_input().set(calories);
}

/// Current form values without subscribing to them
pub fn store_input_untracked(store: &ViewStore) -> ItemInput {
    ItemInput::new(
        store.name_input().get_untracked(),
        store.calories_input().get_untracked(),
    )
}

pub fn store_clear_input(store: &ViewStore) {
    store.name_input().set(String::new());
    store.calories_input().set(String::new());
}

pub fn store_total(store: &ViewStore) -> Calories {
    store.total().get()
}

pub fn store_set_total(store: &ViewStore, total: Calories) {
    store.total().set(total);
}

pub fn store_status(store: &ViewStore) -> Option<String> {
    store.status().get()
}

pub fn store_set_status(store: &ViewStore, status: Option<String>) {
    store.status().set(status);
}
