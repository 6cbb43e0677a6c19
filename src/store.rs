//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over WrackState.

use reactive_stores::Store;
use wrack_core::WrackState;

/// Type alias for the store
pub type WrackStore = Store<WrackState>;

pub fn new_wrack_store() -> WrackStore {
    Store::new(WrackState::new())
}
