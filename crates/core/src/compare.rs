//! Multi-way dataset comparison
//!
//! Diffs the descriptive fields of two or more datasets and emits
//! structured difference/similarity entries plus templated insight strings.
//! Uniform fields route to similarities, divergent fields to differences;
//! data volume is always reported as a difference so the size spread is
//! visible even when counts happen to agree.

use crate::catalog::DatasetCatalog;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Sizes this many times apart trigger the disparity insight
const SIZE_DISPARITY_FACTOR: usize = 10;

/// A field on which the selected datasets diverge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDifference {
    /// Display name of the field
    pub field: String,
    /// Per-dataset-id value map
    pub values: BTreeMap<String, Value>,
    /// One-line natural-language analysis
    pub analysis: String,
}

/// A field on which the selected datasets agree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSimilarity {
    /// Display name of the field
    pub field: String,
    /// The shared value
    pub value: Value,
    /// Confidence score in [0, 1]
    pub score: f64,
}

/// Outcome of comparing two or more datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Ids that resolved, in request order
    pub dataset_ids: Vec<String>,
    pub differences: Vec<FieldDifference>,
    pub similarities: Vec<FieldSimilarity>,
    /// Freeform observations triggered by simple predicates
    pub insights: Vec<String>,
}

/// Compare the named datasets field by field
///
/// Ids that do not resolve are skipped with a warning; fewer than two
/// resolved datasets is an invalid argument. Duplicate ids count once.
pub fn compare(catalog: &DatasetCatalog, ids: &[String]) -> Result<ComparisonResult> {
    let mut selected: Vec<&Dataset> = Vec::new();
    for id in ids {
        match catalog.get(id) {
            Some(dataset) if selected.iter().any(|d| d.id == dataset.id) => {}
            Some(dataset) => selected.push(dataset),
            None => warn!(id = %id, "skipping unknown dataset id in comparison"),
        }
    }

    if selected.len() < 2 {
        return Err(Error::InvalidArgument(format!(
            "comparison requires at least 2 known datasets, got {}",
            selected.len()
        )));
    }

    let mut result = ComparisonResult {
        dataset_ids: selected.iter().map(|d| d.id.clone()).collect(),
        differences: Vec::new(),
        similarities: Vec::new(),
        insights: Vec::new(),
    };

    compare_label(&selected, "Industry", |d| d.industry.as_str(), &mut result);
    compare_label(&selected, "Category", |d| d.category.as_str(), &mut result);
    compare_data_volume(&selected, &mut result);
    compare_tags(&selected, &mut result);
    collect_insights(&selected, &mut result);

    Ok(result)
}

/// Shared rule for Industry and Category: uniform value → similarity with
/// score 1.0, divergent values → difference with a templated sentence
fn compare_label<'a>(
    selected: &[&'a Dataset],
    field: &str,
    value_of: impl Fn(&'a Dataset) -> &'a str,
    result: &mut ComparisonResult,
) {
    let mut distinct: Vec<&str> = Vec::new();
    for &dataset in selected {
        let value = value_of(dataset);
        if !distinct.contains(&value) {
            distinct.push(value);
        }
    }

    if distinct.len() == 1 {
        result.similarities.push(FieldSimilarity {
            field: field.to_string(),
            value: json!(distinct[0]),
            score: 1.0,
        });
        return;
    }

    let values = selected
        .iter()
        .map(|&d| (d.id.clone(), json!(value_of(d))))
        .collect();
    result.differences.push(FieldDifference {
        field: field.to_string(),
        values,
        analysis: format!(
            "The selected datasets span {} {} values: {}.",
            distinct.len(),
            field.to_lowercase(),
            distinct.join(", ")
        ),
    });
}

fn compare_data_volume(selected: &[&Dataset], result: &mut ComparisonResult) {
    let counts: Vec<usize> = selected.iter().map(|d| d.data_count).collect();
    let min = counts.iter().copied().min().unwrap_or(0);
    let max = counts.iter().copied().max().unwrap_or(0);
    let average = counts.iter().sum::<usize>() as f64 / counts.len() as f64;

    let values = selected
        .iter()
        .map(|d| (d.id.clone(), json!(d.data_count)))
        .collect();
    result.differences.push(FieldDifference {
        field: "Data Volume".to_string(),
        values,
        analysis: format!(
            "Dataset sizes range from {min} to {max} items (average {average:.1})."
        ),
    });
}

fn compare_tags(selected: &[&Dataset], result: &mut ComparisonResult) {
    let mut shared: BTreeSet<String> = selected[0].tags.clone();
    for dataset in &selected[1..] {
        shared.retain(|tag| dataset.tags.contains(tag));
    }
    if shared.is_empty() {
        return;
    }

    let largest = selected.iter().map(|d| d.tags.len()).max().unwrap_or(0);
    let score = shared.len() as f64 / largest as f64;
    result.similarities.push(FieldSimilarity {
        field: "Common Tags".to_string(),
        value: json!(shared.iter().collect::<Vec<_>>()),
        score,
    });
}

fn collect_insights(selected: &[&Dataset], result: &mut ComparisonResult) {
    let industries: BTreeSet<&str> = selected.iter().map(|d| d.industry.as_str()).collect();
    let categories: BTreeSet<&str> = selected.iter().map(|d| d.category.as_str()).collect();

    if industries.len() > 1 {
        result.insights.push(format!(
            "The selection spans {} industries, so differences may reflect industry \
             context rather than dataset quality.",
            industries.len()
        ));
    }

    let tag_score = result
        .similarities
        .iter()
        .find(|s| s.field == "Common Tags")
        .map(|s| s.score);
    if let Some(score) = tag_score {
        result.insights.push(format!(
            "Tag overlap across every selected dataset scores {score:.2}, indicating \
             related subject matter."
        ));
    }

    if industries.contains("Shipping & Logistics") {
        result.insights.push(
            "Shipping and logistics datasets emphasize physical flows; operational \
             metrics will dominate the comparison."
                .to_string(),
        );
    }

    if categories.contains("Architecture") || categories.contains("Strategy") {
        result.insights.push(
            "Architecture and strategy datasets describe target states rather than \
             current operations."
                .to_string(),
        );
    }

    let min = selected.iter().map(|d| d.data_count).min().unwrap_or(0);
    let max = selected.iter().map(|d| d.data_count).max().unwrap_or(0);
    if min > 0 && max >= min * SIZE_DISPARITY_FACTOR {
        result.insights.push(
            "Dataset sizes differ by an order of magnitude; aggregate figures will \
             be skewed toward the larger dataset."
                .to_string(),
        );
    }
}
