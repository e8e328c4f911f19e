//! Item List Component
//!
//! Displays logged items in insertion order.

use calorie_core::{Item, Selectors};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_items;

/// The `#item-list` collection
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let list_id = Selectors::bare(ctx.selectors().item_list);

    // Keyed by position too: stored lists may repeat an id
    view! {
        <ul id=list_id class="collection">
            <For
                each=move || store_items(&store).into_iter().enumerate()
                key=|(index, item)| (*index, item.id)
                children=move |(_, item)| view! { <ListItem item=item /> }
            />
        </ul>
    }
}

/// A single logged item
#[component]
pub fn ListItem(item: Item) -> impl IntoView {
    view! {
        <li class="collection-item" id=item.element_id()>
            <strong>{format!("{}: ", item.name)}</strong>
            " "
            <em>{format!("{} Calories", item.calories)}</em>
            // Edit affordance, not wired
            <a href="#" class="secondary-content">
                <i class="edit-item fa fa-pencil"></i>
            </a>
        </li>
    }
}
