//! Wrack Core
//!
//! Front-end logic that does not depend on the browser:
//! - models: clothing item view model and the add-item form input
//! - client: the host bridge abstraction
//! - actions: load / add item / add use flows over a client
//! - state: page state (tab, item snapshot, form buffers)
//! - chart: bar geometry for the wear statistics view
//! - format: money and date formatting

mod models;
mod client;
mod actions;
mod state;
mod chart;
mod format;

pub use models::{ClothingItem, NewItem, parse_cost};
pub use client::{WardrobeClient, BridgeError, BridgeResult};
pub use actions::{fetch_items, submit_new_item, record_use, today, SubmitOutcome};
pub use state::{Tab, WrackState};
#[cfg(feature = "store")]
pub use state::WrackStateStoreFields;
pub use chart::{WearChart, ChartBar, layout_wear_chart};
pub use format::{format_money, format_date};
