//! Wrack Frontend App
//!
//! Clothes tracker page: tab bar over the add form / wear chart, with the
//! item cards below.

use std::sync::Arc;

use leptos::prelude::*;
use wrack_core::{Tab, WrackStateStoreFields};

use crate::commands::TauriClient;
use crate::components::{AddItemForm, ItemGrid, TabBar, WearChart};
use crate::context::{SharedClient, WrackContext};
use crate::store::new_wrack_store;

#[component]
pub fn App() -> impl IntoView {
    view! { <Wrack client=Arc::new(TauriClient) /> }
}

/// The clothes tracker page, driven by any bridge client
#[component]
pub fn Wrack(client: SharedClient) -> impl IntoView {
    let store = new_wrack_store();
    let ctx = WrackContext::new(store, client);

    // Provide context to all children
    provide_context(ctx.clone());

    // Load items on mount
    Effect::new({
        let ctx = ctx.clone();
        move |_| ctx.load_clothing_items()
    });

    view! {
        <div class="page">
            <div class="container">
                <h1 class="page-title">"Clothes Tracker"</h1>

                <div class="panel">
                    <TabBar />
                    {move || match store.active_tab().get() {
                        Tab::Add => view! { <AddItemForm /> }.into_any(),
                        Tab::Stats => view! { <WearChart /> }.into_any(),
                    }}
                </div>

                <ItemGrid />
            </div>
        </div>
    }
}
