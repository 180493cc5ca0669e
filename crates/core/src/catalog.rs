//! In-memory dataset catalog
//!
//! Built once at application startup from fixed sources and read-only
//! afterwards. Registration eagerly builds the token index for each
//! dataset, so the index always reflects the data at registration time.

use crate::dataset::Dataset;
use crate::index::TokenIndex;
use ahash::AHashMap;
use tracing::{info, warn};

/// Catalog of registered datasets and their token indexes
///
/// Datasets keep insertion order; lookups go through an id map. Registering
/// an id twice replaces the earlier dataset in place (last write wins) and
/// keeps its catalog position.
#[derive(Debug, Default)]
pub struct DatasetCatalog {
    datasets: Vec<Dataset>,
    indexes: Vec<TokenIndex>,
    slots: AHashMap<String, usize>,
}

impl DatasetCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset, building its token index immediately
    pub fn register(&mut self, dataset: Dataset) {
        let index = TokenIndex::build(&dataset);

        if let Some(&slot) = self.slots.get(&dataset.id) {
            warn!(id = %dataset.id, "duplicate dataset id, replacing earlier registration");
            self.datasets[slot] = dataset;
            self.indexes[slot] = index;
            return;
        }

        info!(id = %dataset.id, tokens = index.len(), "registered dataset");
        self.slots.insert(dataset.id.clone(), self.datasets.len());
        self.datasets.push(dataset);
        self.indexes.push(index);
    }

    /// Exact lookup by id
    pub fn get(&self, id: &str) -> Option<&Dataset> {
        self.slots.get(id).map(|&slot| &self.datasets[slot])
    }

    /// Token index for a dataset, if registered
    pub fn token_index(&self, id: &str) -> Option<&TokenIndex> {
        self.slots.get(id).map(|&slot| &self.indexes[slot])
    }

    /// All datasets in insertion order
    pub fn all(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Datasets whose industry label matches exactly, insertion order
    pub fn by_industry(&self, industry: &str) -> Vec<&Dataset> {
        self.datasets
            .iter()
            .filter(|d| d.industry == industry)
            .collect()
    }

    /// Datasets whose category label matches exactly, insertion order
    pub fn by_category(&self, category: &str) -> Vec<&Dataset> {
        self.datasets
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Number of registered datasets
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// True when nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Iterate datasets together with their token indexes
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&Dataset, &TokenIndex)> {
        self.datasets.iter().zip(self.indexes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(id: &str, industry: &str, category: &str) -> Dataset {
        Dataset::new(id, format!("Dataset {id}"), industry, category)
            .with_data(json!({"items": [id]}))
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = DatasetCatalog::new();
        catalog.register(sample("org", "Shipping & Logistics", "Architecture"));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("org").unwrap().id, "org");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_index_built_at_registration() {
        let mut catalog = DatasetCatalog::new();
        catalog.register(sample("org", "Shipping & Logistics", "Architecture"));

        let index = catalog.token_index("org").unwrap();
        assert!(index.contains("org"));
        assert!(index.contains("items"));
        assert!(catalog.token_index("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_last_write_wins_in_place() {
        let mut catalog = DatasetCatalog::new();
        catalog.register(sample("a", "Energy", "Reference"));
        catalog.register(sample("b", "Energy", "Reference"));
        catalog.register(
            sample("a", "Shipping & Logistics", "Strategy").with_description("replacement"),
        );

        assert_eq!(catalog.len(), 2);
        // Replacement keeps the original position
        assert_eq!(catalog.all()[0].id, "a");
        assert_eq!(catalog.all()[0].description, "replacement");
        assert_eq!(catalog.get("a").unwrap().industry, "Shipping & Logistics");
        // The index was rebuilt for the replacement
        assert!(catalog.token_index("a").unwrap().contains("replacement"));
    }

    #[test]
    fn test_filters_preserve_insertion_order() {
        let mut catalog = DatasetCatalog::new();
        catalog.register(sample("a", "Energy", "Reference"));
        catalog.register(sample("b", "Shipping & Logistics", "Architecture"));
        catalog.register(sample("c", "Energy", "Architecture"));

        let energy: Vec<&str> = catalog
            .by_industry("Energy")
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(energy, ["a", "c"]);

        let architecture: Vec<&str> = catalog
            .by_category("Architecture")
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(architecture, ["b", "c"]);

        assert!(catalog.by_industry("Finance").is_empty());
    }
}
