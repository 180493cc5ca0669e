//! Built-in dataset fixtures for the demo portfolio
//!
//! Mirrors the application's static data modules: each function returns one
//! immutable dataset, and [`builtin_catalog`] assembles the full catalog the
//! way the application does at startup.

pub mod reference;
pub mod shipping;

use datascope_core::catalog::DatasetCatalog;
use tracing::info;

/// Build the catalog from every built-in source
///
/// Called once at startup; the catalog is read-only afterwards.
pub fn builtin_catalog() -> DatasetCatalog {
    let mut catalog = DatasetCatalog::new();

    catalog.register(shipping::organization());
    catalog.register(shipping::capabilities());
    catalog.register(shipping::business_processes());
    catalog.register(shipping::roadmap());
    catalog.register(shipping::trade_flows());
    catalog.register(reference::industry_configs());
    catalog.register(reference::report_metrics());

    info!(datasets = catalog.len(), "built-in catalog assembled");
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use datascope_core::compare::compare;
    use datascope_core::insights::generate_insights;
    use datascope_core::search::{SearchEngine, SearchOptions};

    #[test]
    fn test_catalog_holds_all_sources() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 7);

        for id in [
            "organization",
            "capabilities",
            "business-processes",
            "roadmap",
            "trade-flows",
            "industry-configs",
            "report-metrics",
        ] {
            assert!(catalog.get(id).is_some(), "missing dataset {id}");
            assert!(
                !catalog.token_index(id).unwrap().is_empty(),
                "empty index for {id}"
            );
        }
    }

    #[test]
    fn test_shipping_datasets_filtered_by_industry() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.by_industry("Shipping & Logistics").len(), 5);
        assert_eq!(catalog.by_industry("Cross-Industry").len(), 2);
    }

    #[test]
    fn test_search_finds_buried_payload_facts() {
        let catalog = builtin_catalog();
        let engine = SearchEngine::new();

        // "Port Hedland" sits several levels deep in two payloads
        let results = engine.search(&catalog, "hedland", &SearchOptions::default());
        let ids: Vec<&str> = results.iter().map(|r| r.dataset.id.as_str()).collect();
        assert!(ids.contains(&"organization"));
        assert!(ids.contains(&"trade-flows"));

        let results = engine.search(&catalog, "lng", &SearchOptions::default());
        assert_eq!(results[0].dataset.id, "trade-flows");
    }

    #[test]
    fn test_builtin_datasets_compare() {
        let catalog = builtin_catalog();
        let result = compare(
            &catalog,
            &["organization".to_string(), "trade-flows".to_string()],
        )
        .unwrap();

        // Same industry, shared "shipping" tag
        assert!(result.similarities.iter().any(|s| s.field == "Industry"));
        assert!(result.similarities.iter().any(|s| s.field == "Common Tags"));
        assert!(result.differences.iter().any(|d| d.field == "Data Volume"));
    }

    #[test]
    fn test_process_dataset_insights() {
        let catalog = builtin_catalog();
        let insights = generate_insights(&catalog, "business-processes");

        assert!(insights.iter().any(|i| i.contains("8 business processes")));
        assert!(insights.iter().any(|i| i.contains("out of 5")));
    }
}
