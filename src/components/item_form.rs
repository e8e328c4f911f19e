//! Item Form Component
//!
//! Name and calorie inputs with the add button.

use calorie_core::Selectors;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::*;

/// Form for logging a new food item
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let selectors = ctx.selectors();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form id="item-form" class="item-form" on:submit=add_item>
            <div class="input-field">
                <label for=Selectors::bare(selectors.item_name_input)>"Meal"</label>
                <input
                    type="text"
                    id=Selectors::bare(selectors.item_name_input)
                    placeholder="Add Item"
                    prop:value=move || store_name_input(&store)
                    on:input=move |ev| store_set_name_input(&store, event_target_value(&ev))
                />
            </div>
            <div class="input-field">
                <label for=Selectors::bare(selectors.item_calories_input)>"Calories"</label>
                <input
                    type="text"
                    id=Selectors::bare(selectors.item_calories_input)
                    placeholder="Add Calories"
                    prop:value=move || store_calories_input(&store)
                    on:input=move |ev| store_set_calories_input(&store, event_target_value(&ev))
                />
            </div>
            <button type="submit" class=format!("{} btn", Selectors::bare(selectors.add_btn))>
                <i class="fa fa-plus"></i>
                " Add Meal"
            </button>
            {move || store_status(&store).map(|message| view! {
                <p class="item-form-status">{message}</p>
            })}
        </form>
    }
}
