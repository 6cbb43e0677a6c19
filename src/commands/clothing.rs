//! Clothing Commands
//!
//! Frontend bindings for the wardrobe commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use wrack_core::{BridgeResult, ClothingItem};
use super::{invoke, host_error, codec_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddClothingItemArgs<'a> {
    name: &'a str,
    cost: f64,
}

#[derive(Serialize)]
struct AddUseArgs<'a> {
    name: &'a str,
    date: &'a str,
}

// ========================
// Commands
// ========================

pub async fn get_clothing_items() -> BridgeResult<Vec<ClothingItem>> {
    let result = invoke("get_clothing_items", JsValue::NULL).await.map_err(host_error)?;
    serde_wasm_bindgen::from_value(result).map_err(codec_error)
}

/// Cost is sent as-is, NaN included
pub async fn add_clothing_item(name: &str, cost: f64) -> BridgeResult<()> {
    let js_args = serde_wasm_bindgen::to_value(&AddClothingItemArgs { name, cost }).map_err(codec_error)?;
    invoke("add_clothing_item", js_args).await.map_err(host_error)?;
    Ok(())
}

pub async fn add_use(name: &str, date: &str) -> BridgeResult<()> {
    let js_args = serde_wasm_bindgen::to_value(&AddUseArgs { name, date }).map_err(codec_error)?;
    invoke("add_use", js_args).await.map_err(host_error)?;
    Ok(())
}
