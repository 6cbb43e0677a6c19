//! UI Components
//!
//! Reusable Leptos components for the Wrack page.

mod tab_bar;
mod add_item_form;
mod wear_chart;
mod item_card;

pub use tab_bar::TabBar;
pub use add_item_form::AddItemForm;
pub use wear_chart::WearChart;
pub use item_card::{ItemCard, ItemGrid};
