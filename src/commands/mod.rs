//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod clothing;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wrack_core::{BridgeError, BridgeResult, ClothingItem, WardrobeClient};

#[wasm_bindgen]
extern "C" {
    // `catch` turns a rejected promise (command returned Err) into Err
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use clothing::*;

/// Convert a rejection value from `invoke` into a bridge error
fn host_error(err: JsValue) -> BridgeError {
    BridgeError::Host(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn codec_error(err: serde_wasm_bindgen::Error) -> BridgeError {
    BridgeError::Codec(err.to_string())
}

/// WardrobeClient backed by the Tauri IPC bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriClient;

#[async_trait(?Send)]
impl WardrobeClient for TauriClient {
    async fn list_items(&self) -> BridgeResult<Vec<ClothingItem>> {
        get_clothing_items().await
    }

    async fn add_item(&self, name: &str, cost: f64) -> BridgeResult<()> {
        add_clothing_item(name, cost).await
    }

    async fn add_use(&self, name: &str, date: &str) -> BridgeResult<()> {
        add_use(name, date).await
    }
}
