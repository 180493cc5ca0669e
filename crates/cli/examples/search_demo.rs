use datascope_core::compare::compare;
use datascope_core::insights::generate_insights;
use datascope_core::search::{SearchEngine, SearchOptions};
use datascope_sources::builtin_catalog;

fn main() {
    println!("🔍 Dataset Search Demo\n");
    println!("======================\n");

    let catalog = builtin_catalog();
    let engine = SearchEngine::new();

    // Demo 1: Free-text search
    println!("📍 Demo 1: Free-Text Search\n");
    for query in ["lng", "hedland", "maturity roadmap"] {
        let results = engine.search(&catalog, query, &SearchOptions::default());
        println!("query '{}': {} result(s)", query, results.len());
        for result in &results {
            println!(
                "  {:<20} relevance {:.2}, best match '{}'",
                result.dataset.id, result.relevance, result.matches[0].token
            );
        }
        println!();
    }
    println!("---\n");

    // Demo 2: Comparison
    println!("⚖️  Demo 2: Dataset Comparison\n");
    let ids = ["organization".to_string(), "trade-flows".to_string()];
    let result = compare(&catalog, &ids).expect("both ids are built-in");
    println!(
        "{} similarities, {} differences, {} insights",
        result.similarities.len(),
        result.differences.len(),
        result.insights.len()
    );
    for insight in &result.insights {
        println!("  - {insight}");
    }
    println!("\n---\n");

    // Demo 3: Per-dataset insights
    println!("💡 Demo 3: Dataset Insights\n");
    for insight in generate_insights(&catalog, "business-processes") {
        println!("  - {insight}");
    }
}
