//! UI Components
//!
//! Leptos components for the tracker page.

mod item_form;
mod item_list;
mod total_calories;

pub use item_form::ItemForm;
pub use item_list::{ItemList, ListItem};
pub use total_calories::TotalCalories;
