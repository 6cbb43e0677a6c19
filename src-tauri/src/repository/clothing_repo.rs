//! Clothing Repository Implementation
//!
//! JSON-file-backed implementation of Repository<ClothingItem>.
//! The whole list is held in memory and written through on every change.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::domain::{ClothingItem, DomainError, DomainResult, Entity};
use super::traits::{ClothingRepository, Repository};

/// File name of the store inside the app data dir
pub const DATA_FILE_NAME: &str = "clothing_items.json";

/// JSON file implementation of the clothing repository
pub struct JsonClothingRepository {
    path: PathBuf,
    items: Vec<ClothingItem>,
}

impl JsonClothingRepository {
    /// Repository with no items that will write to `path`
    pub fn empty(path: PathBuf) -> Self {
        Self { path, items: Vec::new() }
    }

    /// Load the store at `path`.
    ///
    /// A missing file is an empty wardrobe. A file that is not UTF-8 JSON is
    /// moved aside to `<file>.corrupt` and the repository starts empty.
    /// Any other read failure is an error, since writing would clobber the file.
    pub async fn open(path: PathBuf) -> DomainResult<Self> {
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No store at {}, starting empty", path.display());
                return Ok(Self::empty(path));
            }
            Err(e) => {
                return Err(DomainError::Internal(format!("read {}: {}", path.display(), e)));
            }
        };

        let parsed = String::from_utf8(bytes)
            .map_err(|e| e.to_string())
            .and_then(|data| serde_json::from_str::<Vec<ClothingItem>>(&data).map_err(|e| e.to_string()));

        match parsed {
            Ok(items) => {
                log::info!("Loaded {} clothing items from {}", items.len(), path.display());
                Ok(Self { path, items })
            }
            Err(e) => {
                let backup = corrupt_path(&path);
                log::error!("Store {} is corrupt ({}), moving to {}", path.display(), e, backup.display());
                tokio::fs::rename(&path, &backup).await?;
                Ok(Self::empty(path))
            }
        }
    }

    /// Write `items` to disk via a temp file + rename
    async fn persist(&self, items: &[ClothingItem]) -> DomainResult<()> {
        let data = serde_json::to_string_pretty(items)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".corrupt");
    path.with_file_name(name)
}

#[async_trait]
impl Repository<ClothingItem> for JsonClothingRepository {
    async fn create(&mut self, entity: ClothingItem) -> DomainResult<ClothingItem> {
        if self.find(entity.key()).await?.is_some() {
            return Err(DomainError::Conflict(format!("item '{}' already exists", entity.name)));
        }

        let mut next = self.items.clone();
        next.push(entity.clone());
        self.persist(&next).await?;
        self.items = next;
        Ok(entity)
    }

    async fn find(&self, name: &str) -> DomainResult<Option<ClothingItem>> {
        Ok(self.items.iter().find(|i| i.key() == name).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<ClothingItem>> {
        Ok(self.items.clone())
    }
}

#[async_trait]
impl ClothingRepository for JsonClothingRepository {
    async fn add_use(&mut self, name: &str, date: NaiveDate) -> DomainResult<ClothingItem> {
        let mut next = self.items.clone();
        let item = next
            .iter_mut()
            .find(|i| i.key() == name)
            .ok_or_else(|| DomainError::NotFound(format!("item '{}'", name)))?;
        item.record_use(date);
        let updated = item.clone();

        self.persist(&next).await?;
        self.items = next;
        Ok(updated)
    }
}
