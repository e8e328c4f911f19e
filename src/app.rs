//! Calorie Tracker App
//!
//! Builds the tracker for this page and lays out form, total and list.

use calorie_core::{Tracker, TrackerConfig};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemForm, ItemList, TotalCalories};
use crate::context::AppContext;
use crate::storage::open_storage;
use crate::store::ViewState;
use crate::view::LeptosView;

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    let store = Store::new(ViewState::default());

    let mut tracker = Tracker::new(&config, open_storage(), LeptosView::new(store));
    tracker.init();

    let ctx = AppContext::new(tracker, store);
    provide_context(ctx);

    // Rehydrate once mounted
    Effect::new(move |_| ctx.load());

    view! {
        <nav class="app-bar">
            <span class="brand-logo">"Tracalorie"</span>
        </nav>
        <main class="container">
            <div class="card">
                <div class="card-content">
                    <span class="card-title">"Add Meal / Food Item"</span>
                    <ItemForm />
                </div>
            </div>
            <TotalCalories />
            <ItemList />
        </main>
    }
}
