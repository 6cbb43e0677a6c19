//! Application Context
//!
//! Shared page actions provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wrack_core::{
    fetch_items, record_use, submit_new_item, today, SubmitOutcome, Tab, WardrobeClient,
    WrackStateStoreFields,
};

use crate::store::WrackStore;

/// Bridge client shared by the page
pub type SharedClient = Arc<dyn WardrobeClient + Send + Sync>;

/// Page store plus the client that feeds it
#[derive(Clone)]
pub struct WrackContext {
    pub store: WrackStore,
    client: SharedClient,
}

impl WrackContext {
    pub fn new(store: WrackStore, client: SharedClient) -> Self {
        Self { store, client }
    }

    /// Replace the item list with a fresh snapshot from the host
    pub fn load_clothing_items(&self) {
        let store = self.store;
        let client = self.client.clone();
        spawn_local(async move {
            let result = fetch_items(&*client).await;
            let loaded = store.write().apply_load(result);
            match loaded {
                Ok(count) => {
                    web_sys::console::log_1(&format!("[WRACK] Loaded {} items", count).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[WRACK] Failed to load clothing items: {}", e).into());
                }
            }
        });
    }

    /// Submit the add-item form; clears it and reloads on success
    pub fn handle_add_item(&self) {
        let ctx = self.clone();
        let name = self.store.new_item_name().get_untracked();
        let cost = self.store.new_item_cost().get_untracked();
        spawn_local(async move {
            let outcome = submit_new_item(&*ctx.client, &name, &cost).await;
            if let SubmitOutcome::Failed(e) = &outcome {
                web_sys::console::error_1(&format!("[WRACK] Failed to add clothing item: {}", e).into());
            }
            let reload = ctx.store.write().apply_submit(&outcome);
            if reload {
                ctx.load_clothing_items();
            }
        });
    }

    /// Record a wear of `name` today, then reload
    pub fn handle_add_use(&self, name: String) {
        let ctx = self.clone();
        spawn_local(async move {
            match record_use(&*ctx.client, &name, today()).await {
                Ok(()) => ctx.load_clothing_items(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[WRACK] Failed to add use: {}", e).into());
                }
            }
        });
    }

    pub fn select_tab(&self, tab: Tab) {
        self.store.active_tab().set(tab);
    }
}
