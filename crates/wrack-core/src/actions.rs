//! Page Actions
//!
//! The load / add item / add use flows, returning structured results so the
//! caller decides what to do with failures.

use chrono::{Local, NaiveDate};

use crate::client::{BridgeError, BridgeResult, WardrobeClient};
use crate::format::format_date;
use crate::models::{ClothingItem, NewItem};

/// What happened to an add-item submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A buffer was blank, nothing was sent
    Skipped,
    /// The host accepted the item; clear the form and reload
    Added,
    /// The host call failed; keep the form as is
    Failed(BridgeError),
}

/// Fetch the full item list from the host
pub async fn fetch_items<C: WardrobeClient + ?Sized>(client: &C) -> BridgeResult<Vec<ClothingItem>> {
    client.list_items().await
}

/// Validate the form buffers and send the new item
pub async fn submit_new_item<C: WardrobeClient + ?Sized>(
    client: &C,
    name: &str,
    cost: &str,
) -> SubmitOutcome {
    let Some(item) = NewItem::from_buffers(name, cost) else {
        return SubmitOutcome::Skipped;
    };
    match client.add_item(&item.name, item.cost).await {
        Ok(()) => SubmitOutcome::Added,
        Err(e) => SubmitOutcome::Failed(e),
    }
}

/// Record one wear of `name` on `date`
pub async fn record_use<C: WardrobeClient + ?Sized>(
    client: &C,
    name: &str,
    date: NaiveDate,
) -> BridgeResult<()> {
    client.add_use(name, &format_date(date)).await
}

/// Today's calendar date in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
