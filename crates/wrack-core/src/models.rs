//! Front-end Models
//!
//! Data structures matching the host's `get_clothing_items` payload.

use serde::{Deserialize, Serialize};

/// A tracked piece of clothing (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub name: String,
    pub cost: f64,
    /// Wear dates as `YYYY-MM-DD`, in the order the host returned them
    pub uses: Vec<String>,
}

impl ClothingItem {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            uses: Vec::new(),
        }
    }

    /// Number of recorded wears
    pub fn wear_count(&self) -> usize {
        self.uses.len()
    }

    /// Cost divided by wears; an unworn item counts as worn once
    pub fn cost_per_use(&self) -> f64 {
        self.cost / self.wear_count().max(1) as f64
    }
}

/// Validated contents of the add-item form, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    /// Name exactly as typed (not trimmed)
    pub name: String,
    pub cost: f64,
}

impl NewItem {
    /// Build from the raw form buffers.
    ///
    /// Returns `None` when either buffer is empty or whitespace-only.
    /// The cost is not validated: unparsable text becomes NaN.
    pub fn from_buffers(name: &str, cost: &str) -> Option<Self> {
        if name.trim().is_empty() || cost.trim().is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            cost: parse_cost(cost),
        })
    }
}

/// Parse a cost buffer, yielding NaN when the text is not a number.
///
/// The whole trimmed buffer must be a Rust float literal: a trailing suffix
/// such as `"12abc"` gives NaN, and `"inf"`/`"nan"` are accepted.
pub fn parse_cost(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
