//! datascope CLI
//!
//! Command-line explorer for the built-in dataset catalog: list, search,
//! compare, and generate insights over the portfolio datasets.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use datascope_core::catalog::DatasetCatalog;
use datascope_core::compare::{compare, ComparisonResult};
use datascope_core::dataset::Dataset;
use datascope_core::insights::generate_insights;
use datascope_core::search::{SearchEngine, SearchOptions, SearchResult};
use datascope_sources::builtin_catalog;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "datascope")]
#[command(version, about = "Explore, search, and compare the dataset catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output results in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List datasets in the catalog
    List {
        /// Restrict to one industry label
        #[arg(long)]
        industry: Option<String>,

        /// Restrict to one category label
        #[arg(long)]
        category: Option<String>,
    },

    /// Show a single dataset in full
    Show {
        /// Dataset id
        id: String,
    },

    /// Free-text search across every dataset index
    Search {
        /// Query terms (whitespace separated)
        query: String,

        /// Restrict candidates to these industries (repeatable)
        #[arg(long)]
        industry: Vec<String>,

        /// Restrict candidates to these categories (repeatable)
        #[arg(long)]
        category: Vec<String>,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        max_results: Option<usize>,
    },

    /// Compare two or more datasets field by field
    Compare {
        /// Dataset ids (at least two)
        #[arg(required = true, num_args = 2..)]
        ids: Vec<String>,
    },

    /// Print templated insights for a dataset
    Insights {
        /// Dataset id
        id: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(!cli.json) // Disable colors if JSON output
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog = builtin_catalog();

    match cli.command {
        Commands::List { industry, category } => {
            list_datasets(&catalog, industry, category, cli.json)?;
        }
        Commands::Show { id } => {
            show_dataset(&catalog, &id, cli.json)?;
        }
        Commands::Search {
            query,
            industry,
            category,
            max_results,
        } => {
            run_search(&catalog, &query, industry, category, max_results, cli.json)?;
        }
        Commands::Compare { ids } => {
            run_compare(&catalog, &ids, cli.json)?;
        }
        Commands::Insights { id } => {
            run_insights(&catalog, &id, cli.json)?;
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

fn list_datasets(
    catalog: &DatasetCatalog,
    industry: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let datasets: Vec<&Dataset> = match (industry, category) {
        (Some(industry), None) => catalog.by_industry(&industry),
        (None, Some(category)) => catalog.by_category(&category),
        (Some(industry), Some(category)) => catalog
            .by_industry(&industry)
            .into_iter()
            .filter(|d| d.category == category)
            .collect(),
        (None, None) => catalog.all().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&datasets)?);
        return Ok(());
    }

    for dataset in datasets {
        println!(
            "{:<20} {:<28} {} / {} ({} items)",
            dataset.id, dataset.name, dataset.industry, dataset.category, dataset.data_count
        );
    }
    Ok(())
}

fn show_dataset(catalog: &DatasetCatalog, id: &str, json: bool) -> Result<()> {
    let Some(dataset) = catalog.get(id) else {
        println!("No dataset with id '{id}'");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(dataset)?);
        return Ok(());
    }

    println!("{} ({})", dataset.name, dataset.id);
    println!("  Industry:    {}", dataset.industry);
    println!("  Category:    {}", dataset.category);
    println!("  Items:       {}", dataset.data_count);
    println!("  Description: {}", dataset.description);
    println!(
        "  Tags:        {}",
        dataset.tags.iter().cloned().collect::<Vec<_>>().join(", ")
    );
    println!("  Data:\n{}", serde_json::to_string_pretty(&dataset.data)?);
    Ok(())
}

fn run_search(
    catalog: &DatasetCatalog,
    query: &str,
    industries: Vec<String>,
    categories: Vec<String>,
    max_results: Option<usize>,
    json: bool,
) -> Result<()> {
    let engine = SearchEngine::new();
    let options = SearchOptions {
        industries,
        categories,
        max_results,
    };
    let results = engine.search(catalog, query, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results for '{query}'");
        return Ok(());
    }

    for (rank, result) in results.iter().enumerate() {
        print_search_result(rank + 1, result);
    }
    Ok(())
}

fn print_search_result(rank: usize, result: &SearchResult) {
    println!(
        "{rank}. {} ({}) relevance {:.2}",
        result.dataset.name, result.dataset.id, result.relevance
    );
    for m in &result.matches {
        println!("     '{}' matched '{}' ({:.2})", m.term, m.token, m.score);
    }
}

fn run_compare(catalog: &DatasetCatalog, ids: &[String], json: bool) -> Result<()> {
    let result = compare(catalog, ids)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_comparison(&result);
    Ok(())
}

fn print_comparison(result: &ComparisonResult) {
    println!("Comparing: {}", result.dataset_ids.join(", "));

    if !result.similarities.is_empty() {
        println!("\nSimilarities:");
        for s in &result.similarities {
            println!("  {} = {} (score {:.2})", s.field, s.value, s.score);
        }
    }

    if !result.differences.is_empty() {
        println!("\nDifferences:");
        for d in &result.differences {
            println!("  {}:", d.field);
            for (id, value) in &d.values {
                println!("    {id}: {value}");
            }
            println!("    {}", d.analysis);
        }
    }

    if !result.insights.is_empty() {
        println!("\nInsights:");
        for insight in &result.insights {
            println!("  - {insight}");
        }
    }
}

fn run_insights(catalog: &DatasetCatalog, id: &str, json: bool) -> Result<()> {
    let insights = generate_insights(catalog, id);

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    if insights.is_empty() {
        println!("No dataset with id '{id}'");
        return Ok(());
    }
    for insight in &insights {
        println!("- {insight}");
    }
    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
