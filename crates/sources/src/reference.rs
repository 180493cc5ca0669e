//! Cross-industry reference datasets
//!
//! Generic configuration and reporting data that is not specific to the
//! shipping group itself.

use datascope_core::dataset::Dataset;
use serde_json::json;

/// Industry configuration reference data
pub fn industry_configs() -> Dataset {
    Dataset::new(
        "industry-configs",
        "Industry Configurations",
        "Cross-Industry",
        "Reference",
    )
    .with_description("Reference configuration profiles per industry vertical")
    .with_tags(["reference", "configuration"])
    .with_data_count(8)
    .with_data(json!({
        "profiles": [
            {
                "industry": "Shipping & Logistics",
                "kpi_focus": ["Fleet Utilization", "On-Time Delivery"],
                "regulatory": ["IMO 2030", "EU ETS Maritime"]
            },
            {
                "industry": "Energy",
                "kpi_focus": ["Contract Coverage", "Delivery Reliability"],
                "regulatory": ["REMIT"]
            },
            {
                "industry": "Manufacturing",
                "kpi_focus": ["Throughput", "Defect Rate"],
                "regulatory": ["ISO 9001"]
            }
        ]
    }))
}

/// Executive report metrics and ROI projections
pub fn report_metrics() -> Dataset {
    Dataset::new("report-metrics", "Report Metrics", "Cross-Industry", "Analytics")
        .with_description("Executive KPI definitions and ROI projections for reporting")
        .with_tags(["kpi", "reporting", "roi"])
        .with_data_count(32)
        .with_data(json!({
            "kpis": [
                {"name": "Fleet Utilization", "unit": "percent", "target": 92},
                {"name": "Revenue per Vessel Day", "unit": "usd", "target": 18500},
                {"name": "CO2 per Tonne-Mile", "unit": "grams", "target": 7.2}
            ],
            "roi_projections": [
                {"initiative": "Fleet telemetry rollout", "investment_musd": 12, "annual_return_musd": 4.5},
                {"initiative": "Dynamic voyage pricing", "investment_musd": 6, "annual_return_musd": 3.1}
            ]
        }))
}
