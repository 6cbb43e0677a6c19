//! Tauri Commands for Clothing Items
//!
//! Exposes the wardrobe to the frontend via Tauri IPC:
//! `get_clothing_items`, `add_clothing_item`, `add_use`.

use tauri::State;
use crate::domain::{ClothingItem, parse_use_date};
use crate::repository::{ClothingRepository, Repository};
use crate::AppState;

/// List all clothing items
#[tauri::command]
pub async fn get_clothing_items(state: State<'_, AppState>) -> Result<Vec<ClothingItem>, String> {
    let repo = state.clothing_repo.lock().await;
    list_items(&*repo).await
}

/// Add a new, unworn clothing item
#[tauri::command]
pub async fn add_clothing_item(
    state: State<'_, AppState>,
    name: String,
    cost: f64,
) -> Result<(), String> {
    let mut repo = state.clothing_repo.lock().await;
    create_item(&mut *repo, name, cost).await
}

/// Record a wear of the named item on `date` (`YYYY-MM-DD`)
#[tauri::command]
pub async fn add_use(
    state: State<'_, AppState>,
    name: String,
    date: String,
) -> Result<(), String> {
    let mut repo = state.clothing_repo.lock().await;
    record_use(&mut *repo, &name, &date).await
}

async fn list_items<R: ClothingRepository + ?Sized>(repo: &R) -> Result<Vec<ClothingItem>, String> {
    repo.list().await.map_err(|e| e.to_string())
}

async fn create_item<R: ClothingRepository + ?Sized>(
    repo: &mut R,
    name: String,
    cost: f64,
) -> Result<(), String> {
    let item = ClothingItem::new(name, cost).map_err(|e| e.to_string())?;
    let created = repo.create(item).await.map_err(|e| {
        log::warn!("add_clothing_item failed: {}", e);
        e.to_string()
    })?;
    log::info!("Added clothing item '{}' (cost {})", created.name, created.cost);
    Ok(())
}

async fn record_use<R: ClothingRepository + ?Sized>(
    repo: &mut R,
    name: &str,
    date: &str,
) -> Result<(), String> {
    let date = parse_use_date(date).map_err(|e| e.to_string())?;
    let updated = repo.add_use(name, date).await.map_err(|e| {
        log::warn!("add_use failed: {}", e);
        e.to_string()
    })?;
    log::info!("Recorded use of '{}' on {} ({} total)", updated.name, date, updated.wear_count());
    Ok(())
}
