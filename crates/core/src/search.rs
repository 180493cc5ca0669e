//! Free-text search over the catalog's token indexes
//!
//! A query term is a candidate match for an index token when the token
//! contains the term as a substring; the match is then graded by normalized
//! Levenshtein similarity against the whole token. Containment alone does
//! not guarantee a high score: a short term buried in a long token grades
//! low and falls to the threshold.

use crate::catalog::DatasetCatalog;
use crate::dataset::Dataset;
use crate::similarity::similarity;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tuning constants for the search engine
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Matches scoring at or below this are discarded
    pub score_threshold: f64,
    /// Matches kept per returned dataset
    pub max_matches_per_result: usize,
    /// Result cap applied when the caller does not set one
    pub default_max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.5,
            max_matches_per_result: 5,
            default_max_results: 10,
        }
    }
}

/// Optional restrictions on a single search call
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Restrict candidates to these industry labels (empty = no restriction)
    pub industries: Vec<String>,
    /// Restrict candidates to these category labels (empty = no restriction)
    pub categories: Vec<String>,
    /// Override the engine's default result cap
    pub max_results: Option<usize>,
}

/// A single surviving (query term, index token) match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMatch {
    /// Lower-cased query term that matched
    pub term: String,
    /// Index token the term was found in
    pub token: String,
    /// Normalized Levenshtein similarity, always above the threshold
    pub score: f64,
}

/// One dataset's search outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched dataset
    pub dataset: Dataset,
    /// Sum of match scores divided by the number of query terms
    pub relevance: f64,
    /// Best matches for display, capped per configuration
    pub matches: Vec<TokenMatch>,
}

/// Stateless search engine over a borrowed catalog
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    /// Engine with default thresholds and caps
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom thresholds and caps
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Run a free-text query against every candidate dataset
    ///
    /// Results are ordered by descending relevance; ties keep catalog
    /// insertion order. An empty or whitespace-only query returns no
    /// results. Repeated identical calls over the same catalog return
    /// identical results.
    pub fn search(
        &self,
        catalog: &DatasetCatalog,
        query: &str,
        options: &SearchOptions,
    ) -> Vec<SearchResult> {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for (dataset, index) in catalog.entries() {
            if !candidate_passes(dataset, options) {
                continue;
            }

            let mut matches = Vec::new();
            for term in &terms {
                for token in index.tokens() {
                    if !token.contains(term.as_str()) {
                        continue;
                    }
                    let score = similarity(term, token);
                    if score > self.config.score_threshold {
                        matches.push(TokenMatch {
                            term: term.clone(),
                            token: token.to_string(),
                            score,
                        });
                    }
                }
            }

            if matches.is_empty() {
                continue;
            }

            // Relevance rewards breadth: summed over every surviving match,
            // normalized only by the term count.
            let relevance =
                matches.iter().map(|m| m.score).sum::<f64>() / terms.len() as f64;

            matches.sort_by(|a, b| b.score.total_cmp(&a.score));
            matches.truncate(self.config.max_matches_per_result);

            results.push(SearchResult {
                dataset: dataset.clone(),
                relevance,
                matches,
            });
        }

        results.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
        let cap = options.max_results.unwrap_or(self.config.default_max_results);
        results.truncate(cap);

        debug!(query, results = results.len(), "search complete");
        results
    }
}

fn candidate_passes(dataset: &Dataset, options: &SearchOptions) -> bool {
    if !options.industries.is_empty() && !options.industries.contains(&dataset.industry) {
        return false;
    }
    if !options.categories.is_empty() && !options.categories.contains(&dataset.category) {
        return false;
    }
    true
}
