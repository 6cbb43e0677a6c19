//! Page State
//!
//! Everything the Wrack page owns locally. With the `store` feature this is
//! also a `reactive_stores::Store` so the Leptos view gets per-field signals.

use crate::actions::SubmitOutcome;
use crate::client::BridgeResult;
use crate::models::ClothingItem;

/// The two mutually exclusive views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Add,
    Stats,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Add => "Add Item",
            Tab::Stats => "View Stats",
        }
    }
}

/// Wrack page state
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "store", derive(reactive_stores::Store))]
pub struct WrackState {
    /// Which view is shown above the item grid
    pub active_tab: Tab,
    /// Last snapshot returned by the host
    pub clothing_items: Vec<ClothingItem>,
    /// Add-item form: name buffer
    pub new_item_name: String,
    /// Add-item form: cost buffer
    pub new_item_cost: String,
}

impl WrackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the item list with a fresh host snapshot
    pub fn replace_items(&mut self, items: Vec<ClothingItem>) {
        self.clothing_items = items;
    }

    /// Reset the form after a successful submission
    pub fn clear_buffers(&mut self) {
        self.new_item_name.clear();
        self.new_item_cost.clear();
    }

    /// Take the result of a list fetch. On failure the previous snapshot stays.
    ///
    /// Returns the number of items loaded.
    pub fn apply_load(&mut self, result: BridgeResult<Vec<ClothingItem>>) -> BridgeResult<usize> {
        let items = result?;
        let count = items.len();
        self.replace_items(items);
        Ok(count)
    }

    /// Take an add-item outcome. Returns true when the list should be reloaded.
    pub fn apply_submit(&mut self, outcome: &SubmitOutcome) -> bool {
        match outcome {
            SubmitOutcome::Added => {
                self.clear_buffers();
                true
            }
            SubmitOutcome::Skipped | SubmitOutcome::Failed(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::BridgeError;

    #[test]
    fn test_initial_state() {
        let state = WrackState::new();
        assert_eq!(state.active_tab, Tab::Add);
        assert!(state.clothing_items.is_empty());
        assert!(state.new_item_name.is_empty() && state.new_item_cost.is_empty());
    }

    #[test]
    fn test_switching_tabs_leaves_data_alone() {
        let mut state = WrackState::new();
        state.replace_items(vec![ClothingItem::new("Jacket", 100.0)]);
        state.new_item_name = "Hat".to_string();
        state.new_item_cost = "20".to_string();
        let before = state.clone();

        state.active_tab = Tab::Stats;
        assert_eq!(state.active_tab, Tab::Stats);
        state.active_tab = Tab::Add;

        assert_eq!(state, before);
    }

    #[test]
    fn test_replace_items_overwrites() {
        let mut state = WrackState::new();
        state.replace_items(vec![ClothingItem::new("A", 1.0), ClothingItem::new("B", 2.0)]);
        state.replace_items(vec![ClothingItem::new("C", 3.0)]);
        assert_eq!(state.clothing_items, vec![ClothingItem::new("C", 3.0)]);
    }

    #[test]
    fn test_apply_load_keeps_previous_list_on_error() {
        let mut state = WrackState::new();
        state.replace_items(vec![ClothingItem::new("Jacket", 100.0)]);

        let err = state.apply_load(Err(BridgeError::Host("offline".to_string()))).unwrap_err();

        assert_eq!(err, BridgeError::Host("offline".to_string()));
        assert_eq!(state.clothing_items, vec![ClothingItem::new("Jacket", 100.0)]);
        assert_eq!(state.apply_load(Ok(Vec::new())), Ok(0));
        assert!(state.clothing_items.is_empty());
    }

    #[test]
    fn test_apply_submit_clears_only_when_added() {
        let mut state = WrackState::new();
        state.new_item_name = "Scarf".to_string();
        state.new_item_cost = "12".to_string();

        assert!(!state.apply_submit(&SubmitOutcome::Skipped));
        assert!(!state.apply_submit(&SubmitOutcome::Failed(BridgeError::Host("no".to_string()))));
        assert_eq!((state.new_item_name.as_str(), state.new_item_cost.as_str()), ("Scarf", "12"));

        assert!(state.apply_submit(&SubmitOutcome::Added));
        assert!(state.new_item_name.is_empty() && state.new_item_cost.is_empty());
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Add.label(), "Add Item");
        assert_eq!(Tab::Stats.label(), "View Stats");
    }
}
