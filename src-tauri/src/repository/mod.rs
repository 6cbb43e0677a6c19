//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod clothing_repo;

#[cfg(test)]
mod tests;

pub use traits::{Repository, ClothingRepository};
pub use clothing_repo::{JsonClothingRepository, DATA_FILE_NAME};
