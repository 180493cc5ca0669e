//! Templated per-dataset insight strings
//!
//! Presentation copy assembled from simple counting and averaging over the
//! payload plus the dataset's labels. Not analytics: the observations are
//! canned sentences with light parameterization.

use crate::catalog::DatasetCatalog;
use crate::dataset::Dataset;
use serde_json::Value;

/// Item counts above this read as broad coverage
const LARGE_DATASET_THRESHOLD: usize = 100;
/// Item counts below this read as a focused slice
const FOCUSED_DATASET_THRESHOLD: usize = 10;

/// Generate templated observations for a single dataset
///
/// Unknown ids produce an empty list, never an error.
pub fn generate_insights(catalog: &DatasetCatalog, id: &str) -> Vec<String> {
    let Some(dataset) = catalog.get(id) else {
        return Vec::new();
    };

    let mut insights = Vec::new();
    process_insights(dataset, &mut insights);
    industry_insight(dataset, &mut insights);
    category_insight(dataset, &mut insights);
    volume_insight(dataset, &mut insights);
    insights
}

/// Business-process payloads get counted and their maturity averaged
fn process_insights(dataset: &Dataset, insights: &mut Vec<String>) {
    let Some(processes) = dataset.data.get("processes").and_then(Value::as_array) else {
        return;
    };
    if processes.is_empty() {
        return;
    }

    insights.push(format!(
        "Describes {} business processes across the organization.",
        processes.len()
    ));

    let maturities: Vec<f64> = processes
        .iter()
        .filter_map(|p| p.get("maturity").and_then(Value::as_f64))
        .collect();
    if !maturities.is_empty() {
        let average = maturities.iter().sum::<f64>() / maturities.len() as f64;
        insights.push(format!(
            "Average process maturity is {average:.1} out of 5."
        ));
    }
}

fn industry_insight(dataset: &Dataset, insights: &mut Vec<String>) {
    let sentence = match dataset.industry.as_str() {
        "Shipping & Logistics" => {
            "Anchored in shipping and logistics, where asset utilization and route \
             economics drive the numbers."
                .to_string()
        }
        "Energy" => {
            "Anchored in the energy sector, where long-horizon contracts shape the data."
                .to_string()
        }
        "Cross-Industry" => {
            "Industry-agnostic reference data, applicable across the portfolio.".to_string()
        }
        other => format!("Rooted in the {other} industry."),
    };
    insights.push(sentence);
}

fn category_insight(dataset: &Dataset, insights: &mut Vec<String>) {
    let sentence = match dataset.category.as_str() {
        "Architecture" => {
            "Architecture data: describes structure and target states, not live \
             operations."
                .to_string()
        }
        "Strategy" => {
            "Strategy data: forward-looking, revisit against delivery status.".to_string()
        }
        "Operations" => {
            "Operational data: reflects day-to-day execution of the business.".to_string()
        }
        "Analytics" => {
            "Analytical data: derived figures, check the source metrics before acting."
                .to_string()
        }
        other => format!("Categorized under {other}."),
    };
    insights.push(sentence);
}

fn volume_insight(dataset: &Dataset, insights: &mut Vec<String>) {
    let sentence = if dataset.data_count > LARGE_DATASET_THRESHOLD {
        format!(
            "With {} items this is a broad dataset, suited to aggregate analysis.",
            dataset.data_count
        )
    } else if dataset.data_count < FOCUSED_DATASET_THRESHOLD {
        format!(
            "With {} items this is a focused dataset, best read item by item.",
            dataset.data_count
        )
    } else {
        format!("Holds {} items, a mid-sized dataset.", dataset.data_count)
    };
    insights.push(sentence);
}
