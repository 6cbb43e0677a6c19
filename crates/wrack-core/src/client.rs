//! Host Bridge Abstraction
//!
//! The three host operations behind one injectable trait, so the page can be
//! driven by the Tauri bridge in the app and by a fake in tests.

use async_trait::async_trait;
use crate::models::ClothingItem;

/// Result type for bridge calls
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Bridge call failures
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// The host rejected the command (error string from the command)
    Host(String),
    /// Arguments or response could not be converted
    Codec(String),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::Host(msg) => write!(f, "Host error: {}", msg),
            BridgeError::Codec(msg) => write!(f, "Codec error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Client for the wardrobe commands exposed by the host.
///
/// Futures are `?Send`: in the WebView everything runs on one thread.
#[async_trait(?Send)]
pub trait WardrobeClient {
    /// `get_clothing_items`
    async fn list_items(&self) -> BridgeResult<Vec<ClothingItem>>;

    /// `add_clothing_item {name, cost}`
    async fn add_item(&self, name: &str, cost: f64) -> BridgeResult<()>;

    /// `add_use {name, date}`, date formatted `YYYY-MM-DD`
    async fn add_use(&self, name: &str, date: &str) -> BridgeResult<()>;
}
