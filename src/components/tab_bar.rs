//! Tab Bar Component
//!
//! Switches between the add-item form and the wear statistics.

use leptos::prelude::*;
use wrack_core::{Tab, WrackStateStoreFields};

use crate::context::WrackContext;

/// Icon glyph shown before each tab label
fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Add => "+",
        Tab::Stats => "📊",
    }
}

/// Tab bar component
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<WrackContext>().expect("WrackContext should be provided");
    let store = ctx.store;

    view! {
        <div class="tab-bar">
            {[Tab::Add, Tab::Stats].into_iter().map(|tab| {
                let ctx = ctx.clone();
                let tab_class = move || {
                    if store.active_tab().get() == tab { "btn tab-btn" } else { "btn btn-outline tab-btn" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.select_tab(tab)>
                        <span class="btn-icon">{tab_icon(tab)}</span>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
