//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use a JSON file, in-memory, etc.

use async_trait::async_trait;
use chrono::NaiveDate;
use crate::domain::{ClothingItem, Entity, DomainResult};

/// Core repository trait
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Add a new entity
    async fn create(&mut self, entity: T) -> DomainResult<T>;

    /// Find entity by key
    async fn find(&self, key: &T::Key) -> DomainResult<Option<T>>;

    /// List all entities in storage order
    async fn list(&self) -> DomainResult<Vec<T>>;
}

/// Clothing-specific operations
#[async_trait]
pub trait ClothingRepository: Repository<ClothingItem> {
    /// Append a wear date to the item named `name`
    async fn add_use(&mut self, name: &str, date: NaiveDate) -> DomainResult<ClothingItem>;
}
