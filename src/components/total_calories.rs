use calorie_core::Selectors;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::store_total;

#[component]
pub fn TotalCalories() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let total_class = Selectors::bare(ctx.selectors().total_calories);

    view! {
        <h3 class="total-line">
            "Total Calories: "
            <span class=total_class>
                {move || store_total(&store)}
            </span>
        </h3>
    }
}
