//! View Capability
//!
//! Rendering and form-reading contract between the tracker and the page.

use crate::domain::{Calories, Item, ItemInput};

/// DOM lookup keys for the five UI roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selectors {
    pub item_list: &'static str,
    pub item_name_input: &'static str,
    pub item_calories_input: &'static str,
    pub add_btn: &'static str,
    pub total_calories: &'static str,
}

impl Selectors {
    pub const DEFAULT: Selectors = Selectors {
        item_list: "#item-list",
        item_name_input: "#item-name",
        item_calories_input: "#item-calories",
        add_btn: ".add-btn",
        total_calories: ".total-calories",
    };

    /// Selector without its leading `#` or `.`, for use as an id or class
    pub fn bare(selector: &'static str) -> &'static str {
        selector.trim_start_matches(['#', '.'])
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything the tracker needs from the page
pub trait View {
    /// Replace the whole displayed list
    fn populate_item_list(&mut self, items: &[Item]);

    /// Current form values, untrimmed
    fn item_input(&self) -> ItemInput;

    /// Append one entry without re-rendering the others
    fn add_list_item(&mut self, item: &Item);

    fn clear_input(&mut self);

    fn show_total_calories(&mut self, total: Calories);

    fn selectors(&self) -> Selectors {
        Selectors::DEFAULT
    }
}

/// Headless view keeping rendered state in plain fields
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub input: ItemInput,
    pub items: Vec<Item>,
    pub total: Option<Calories>,
    /// Number of full-list renders
    pub full_renders: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate typing into both inputs
    pub fn type_input(&mut self, name: &str, calories: &str) {
        self.input = ItemInput::new(name, calories);
    }
}

impl View for MemoryView {
    fn populate_item_list(&mut self, items: &[Item]) {
        self.items = items.to_vec();
        self.full_renders += 1;
    }

    fn item_input(&self) -> ItemInput {
        self.input.clone()
    }

    fn add_list_item(&mut self, item: &Item) {
        self.items.push(item.clone());
    }

    fn clear_input(&mut self) {
        self.input = ItemInput::default();
    }

    fn show_total_calories(&mut self, total: Calories) {
        self.total = Some(total);
    }
}
