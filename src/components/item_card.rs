//! Item Card Components
//!
//! Per-item cards with wear totals, cost and cost per use.

use leptos::prelude::*;
use wrack_core::{format_money, ClothingItem, WrackStateStoreFields};

use crate::context::WrackContext;

/// Grid of cards for every item, shown under both tabs
#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = use_context::<WrackContext>().expect("WrackContext should be provided");
    let store = ctx.store;

    view! {
        <div class="item-grid">
            <For
                each=move || store.clothing_items().get().into_iter().enumerate()
                // Cards are positional; wear count in the key refreshes the numbers
                key=|(index, item)| (*index, item.name.clone(), item.wear_count())
                children=move |(_, item)| view! { <ItemCard item=item /> }
            />
        </div>
    }
}

/// One item card
#[component]
pub fn ItemCard(item: ClothingItem) -> impl IntoView {
    let ctx = use_context::<WrackContext>().expect("WrackContext should be provided");
    let name = item.name.clone();

    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">{item.name.clone()}</h3>
            </div>
            <div class="card-content">
                <p class="card-stat">"Total Wears: " {item.wear_count().to_string()}</p>
                <p class="card-stat">"Cost: " {format_money(item.cost)}</p>
                <p class="card-stat">"Cost per use: " {format_money(item.cost_per_use())}</p>
            </div>
            <div class="card-footer">
                <button class="btn btn-full" on:click=move |_| ctx.handle_add_use(name.clone())>
                    "Add Use"
                </button>
            </div>
        </div>
    }
}
