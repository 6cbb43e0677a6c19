//! Clothing Item Entity
//!
//! A piece of clothing with its purchase cost and wear history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// Wire and storage format for wear dates
const USE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A tracked clothing item
///
/// `uses` serializes as `YYYY-MM-DD` strings, which is what the UI reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Display label, also the lookup key
    pub name: String,
    /// Purchase cost
    pub cost: f64,
    /// Wear dates in the order they were recorded
    pub uses: Vec<NaiveDate>,
}

impl ClothingItem {
    /// Create an unworn item
    pub fn new(name: String, cost: f64) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("item name is empty".to_string()));
        }
        if !cost.is_finite() {
            return Err(DomainError::InvalidInput(format!("cost {} is not a number", cost)));
        }
        Ok(Self {
            name,
            cost,
            uses: Vec::new(),
        })
    }

    /// Append one wear; dates are not re-sorted
    pub fn record_use(&mut self, date: NaiveDate) {
        self.uses.push(date);
    }

    pub fn wear_count(&self) -> usize {
        self.uses.len()
    }
}

impl Entity for ClothingItem {
    type Key = str;

    fn key(&self) -> &str {
        &self.name
    }
}

/// Parse a `YYYY-MM-DD` wear date
pub fn parse_use_date(date: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(date, USE_DATE_FORMAT)
        .map_err(|e| DomainError::InvalidInput(format!("date '{}': {}", date, e)))
}
