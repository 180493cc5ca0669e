//! Token index built by bounded recursive descent over dataset payloads
//!
//! Every object key and whole string leaf within the depth bound becomes a
//! lower-cased token, alongside the dataset's own metadata fields. Whole
//! strings are kept intact (not word-split) so substring containment can
//! match multi-word values like "port hedland terminal".

use crate::dataset::Dataset;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

/// Maximum payload nesting depth the indexer descends into
///
/// The bound only guarantees termination on very deep structures; payloads
/// are owned JSON trees and cannot be cyclic. Strings nested deeper than
/// this are silently left out of the index.
pub const MAX_INDEX_DEPTH: usize = 5;

/// Flattened token set for a single dataset
///
/// Backed by an ordered set so iteration (and therefore match generation
/// during search) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    tokens: BTreeSet<String>,
}

impl TokenIndex {
    /// Build the index for a dataset from its metadata and payload
    pub fn build(dataset: &Dataset) -> Self {
        let mut tokens = BTreeSet::new();

        insert_token(&mut tokens, &dataset.name);
        insert_token(&mut tokens, &dataset.industry);
        insert_token(&mut tokens, &dataset.category);
        insert_token(&mut tokens, &dataset.description);
        for tag in &dataset.tags {
            insert_token(&mut tokens, tag);
        }

        collect_tokens(&dataset.data, 0, &mut tokens);

        debug!(
            dataset = %dataset.id,
            tokens = tokens.len(),
            "built token index"
        );

        Self { tokens }
    }

    /// Iterate tokens in lexicographic order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Exact token membership test
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no tokens were collected
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Recursive descent over the payload, stopping silently past the bound
fn collect_tokens(value: &Value, depth: usize, tokens: &mut BTreeSet<String>) {
    if depth > MAX_INDEX_DEPTH {
        return;
    }

    match value {
        Value::String(s) => insert_token(tokens, s),
        Value::Array(items) => {
            for item in items {
                collect_tokens(item, depth + 1, tokens);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                insert_token(tokens, key);
                collect_tokens(child, depth + 1, tokens);
            }
        }
        // Numbers, booleans, and null contribute no tokens
        _ => {}
    }
}

/// Empty strings never make useful tokens
fn insert_token(tokens: &mut BTreeSet<String>, raw: &str) {
    if !raw.is_empty() {
        tokens.insert(raw.to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset_with_data(data: Value) -> Dataset {
        Dataset::new("test", "Test Dataset", "Shipping & Logistics", "Architecture")
            .with_description("A test dataset")
            .with_tags(["alpha", "Beta"])
            .with_data(data)
    }

    #[test]
    fn test_metadata_fields_are_indexed() {
        let index = TokenIndex::build(&dataset_with_data(Value::Null));

        assert!(index.contains("test dataset"));
        assert!(index.contains("shipping & logistics"));
        assert!(index.contains("architecture"));
        assert!(index.contains("a test dataset"));
        assert!(index.contains("alpha"));
        assert!(index.contains("beta"));
    }

    #[test]
    fn test_keys_and_string_leaves_are_indexed() {
        let index = tokens_of(json!({
            "Terminals": ["Port Hedland Terminal", "Rotterdam Gate"],
            "fleet": {"Flagship": "Meridian Star", "count": 48}
        }));

        assert!(index.contains("terminals"));
        assert!(index.contains("port hedland terminal"));
        assert!(index.contains("rotterdam gate"));
        assert!(index.contains("fleet"));
        assert!(index.contains("flagship"));
        assert!(index.contains("meridian star"));
    }

    #[test]
    fn test_non_string_scalars_are_ignored() {
        let index = tokens_of(json!({"count": 48, "active": true, "retired": null}));

        assert!(index.contains("count"));
        assert!(index.contains("active"));
        assert!(index.contains("retired"));
        assert_eq!(
            index.tokens().filter(|t| *t == "48" || *t == "true").count(),
            0
        );
    }

    #[test]
    fn test_depth_bound_cuts_off_deep_strings() {
        // "within" sits at depth 5, "beyond" at depth 6
        let index = tokens_of(json!([[[[["within", ["beyond"]]]]]]));

        assert!(index.contains("within"));
        assert!(!index.contains("beyond"));
    }

    #[test]
    fn test_keys_of_object_at_bound_are_kept_but_values_dropped() {
        // The object lives at depth 5, so its key is indexed; the string
        // value sits at depth 6 and is not.
        let index = tokens_of(json!([[[[[{"edge_key": "edge_value"}]]]]]));

        assert!(index.contains("edge_key"));
        assert!(!index.contains("edge_value"));
    }

    #[test]
    fn test_blank_dataset_has_empty_index() {
        let index = TokenIndex::build(&Dataset::default());
        assert!(index.is_empty());
    }

    #[test]
    fn test_index_is_pure_function_of_dataset() {
        let dataset = dataset_with_data(json!({"routes": ["Singapore", "Fremantle"]}));
        let first = TokenIndex::build(&dataset);
        let second = TokenIndex::build(&dataset);

        assert_eq!(
            first.tokens().collect::<Vec<_>>(),
            second.tokens().collect::<Vec<_>>()
        );
    }

    fn tokens_of(data: Value) -> TokenIndex {
        TokenIndex::build(&dataset_with_data(data))
    }
}
