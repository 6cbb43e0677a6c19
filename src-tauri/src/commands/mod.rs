//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod clothing_cmd;

pub use clothing_cmd::*;
