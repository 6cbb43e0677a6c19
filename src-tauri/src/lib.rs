//! Wrack Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::Manager;
use tokio::sync::Mutex;

mod domain;
mod repository;
mod commands;

use repository::{JsonClothingRepository, DATA_FILE_NAME};

/// Application state shared across commands
pub struct AppState {
    pub clothing_repo: Mutex<JsonClothingRepository>,
}

/// Get store path from app handle
fn get_data_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join(DATA_FILE_NAME))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "Wrack")?;

            let data_path = get_data_path(&app_handle)?;
            log::info!("App setup starting, store at {}", data_path.display());

            // An unreadable store fails startup rather than being overwritten
            let repo = tauri::async_runtime::block_on(JsonClothingRepository::open(data_path))
                .map_err(|e| {
                    log::error!("Failed to load clothing items: {}", e);
                    e
                })?;

            app.manage(AppState {
                clothing_repo: Mutex::new(repo),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_clothing_items,
            commands::add_clothing_item,
            commands::add_use,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
