//! Add Item Form Component
//!
//! Name and cost inputs plus the submit button.

use leptos::prelude::*;
use wrack_core::WrackStateStoreFields;

use crate::context::WrackContext;

/// Form for adding a clothing item
#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_context::<WrackContext>().expect("WrackContext should be provided");
    let store = ctx.store;

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            ctx.handle_add_item();
        }
    };

    view! {
        <form class="add-item-form" on:submit=on_submit>
            <div class="field">
                <label for="item-name">"Name"</label>
                <input
                    id="item-name"
                    type="text"
                    placeholder="Enter item name"
                    prop:value=move || store.new_item_name().get()
                    on:input=move |ev| store.new_item_name().set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label for="item-cost">"Cost"</label>
                <input
                    id="item-cost"
                    type="number"
                    placeholder="Enter item cost"
                    prop:value=move || store.new_item_cost().get()
                    on:input=move |ev| store.new_item_cost().set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label for="item-image">"Image (optional)"</label>
                // Image upload is not implemented
                <div class="field-row">
                    <button id="item-image" type="button" class="btn btn-outline">
                        <span class="btn-icon">"📷"</span>
                        "Upload Image"
                    </button>
                </div>
            </div>
            <button type="submit" class="btn">"Add Item"</button>
        </form>
    }
}
