//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and chrono).

mod entity;
mod clothing_item;

pub use entity::{Entity, DomainError, DomainResult};
pub use clothing_item::{ClothingItem, parse_use_date};
