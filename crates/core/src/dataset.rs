//! Dataset descriptor for the catalog

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// A named dataset wrapping an arbitrary nested JSON payload
///
/// Datasets are immutable once registered: the catalog indexes them at
/// registration time and never re-reads the payload afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Stable identifier used for lookups and comparisons
    pub id: String,
    /// Human-readable display name
    pub name: String,
    /// Owning industry label (e.g. "Shipping & Logistics")
    pub industry: String,
    /// Catalog category label (e.g. "Architecture")
    pub category: String,
    /// Approximate size of the underlying collection
    pub data_count: usize,
    /// One-line description
    pub description: String,
    /// Descriptive tags; ordered for deterministic output
    pub tags: BTreeSet<String>,
    /// The payload itself, any nesting of objects, arrays, and scalars
    pub data: Value,
}

impl Dataset {
    /// Create a dataset with identity and labels; remaining fields default
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        industry: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            industry: industry.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the tag set
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the approximate item count
    pub fn with_data_count(mut self, data_count: usize) -> Self {
        self.data_count = data_count;
        self
    }

    /// Attach the payload
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}
