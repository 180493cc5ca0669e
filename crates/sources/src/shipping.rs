//! Meridian Maritime Group datasets
//!
//! The shipping conglomerate's own data: group structure, capability map,
//! business processes, the strategic roadmap, and commodity trade flows.

use datascope_core::dataset::Dataset;
use serde_json::json;

/// Group organizational structure
pub fn organization() -> Dataset {
    Dataset::new(
        "organization",
        "Organizational Structure",
        "Shipping & Logistics",
        "Architecture",
    )
    .with_description("Business units, subsidiaries, and regional offices of Meridian Maritime Group")
    .with_tags(["organization", "shipping", "structure"])
    .with_data_count(48)
    .with_data(json!({
        "group": "Meridian Maritime Group",
        "headquarters": "Singapore",
        "business_units": [
            {
                "name": "Dry Bulk Shipping",
                "head": "Ingrid Larsen",
                "fleet_size": 62,
                "subsidiaries": ["Meridian Bulk Carriers", "Southern Cross Chartering"]
            },
            {
                "name": "Energy Transport",
                "head": "Tomas Okafor",
                "fleet_size": 28,
                "subsidiaries": ["Meridian Gas Carriers", "Meridian Tankers"]
            },
            {
                "name": "Port Services",
                "head": "Mei Chen",
                "terminals": ["Port Hedland", "Gladstone", "Rotterdam", "Tanjong Pagar"]
            },
            {
                "name": "Logistics & Forwarding",
                "head": "Daniel Mensah",
                "warehouses": 17
            }
        ],
        "regions": ["Asia Pacific", "Europe", "Middle East", "Americas"]
    }))
}

/// Business capability map with maturity assessments
pub fn capabilities() -> Dataset {
    Dataset::new(
        "capabilities",
        "Capability Map",
        "Shipping & Logistics",
        "Architecture",
    )
    .with_description("Business capability domains with maturity assessments")
    .with_tags(["capabilities", "maturity", "architecture"])
    .with_data_count(36)
    .with_data(json!({
        "domains": [
            {
                "name": "Commercial Management",
                "maturity": 4,
                "capabilities": ["Chartering", "Freight Trading", "Customer Contracts"]
            },
            {
                "name": "Fleet Management",
                "maturity": 3,
                "capabilities": ["Vessel Operations", "Crewing", "Dry Docking", "Bunker Planning"]
            },
            {
                "name": "Voyage Operations",
                "maturity": 3,
                "capabilities": ["Voyage Planning", "Port Agency", "Laytime Management"]
            },
            {
                "name": "Corporate Services",
                "maturity": 2,
                "capabilities": ["Finance", "Legal", "Human Resources"]
            }
        ]
    }))
}

/// End-to-end business process model
pub fn business_processes() -> Dataset {
    Dataset::new(
        "business-processes",
        "Business Process Model",
        "Shipping & Logistics",
        "Operations",
    )
    .with_description("Core business processes with ownership and maturity scores")
    .with_tags(["processes", "operations", "maturity"])
    .with_data_count(24)
    .with_data(json!({
        "processes": [
            {"name": "Cargo Booking", "owner": "Commercial", "maturity": 4},
            {"name": "Voyage Estimation", "owner": "Commercial", "maturity": 4},
            {"name": "Chartering", "owner": "Commercial", "maturity": 3},
            {"name": "Port Call Handling", "owner": "Operations", "maturity": 3},
            {"name": "Customs Clearance", "owner": "Operations", "maturity": 2},
            {"name": "Demurrage Claims", "owner": "Finance", "maturity": 2},
            {"name": "Crew Rotation", "owner": "Fleet", "maturity": 3},
            {"name": "Bunker Procurement", "owner": "Fleet", "maturity": 4}
        ]
    }))
}

/// Strategic initiative roadmap
pub fn roadmap() -> Dataset {
    Dataset::new("roadmap", "Strategic Roadmap", "Shipping & Logistics", "Strategy")
        .with_description("Transformation initiatives by planning horizon")
        .with_tags(["roadmap", "strategy", "transformation"])
        .with_data_count(18)
        .with_data(json!({
            "horizons": [
                {
                    "name": "Now",
                    "initiatives": ["Fleet telemetry rollout", "Port call data standardization"]
                },
                {
                    "name": "Next",
                    "initiatives": ["Emissions reporting platform", "Dynamic voyage pricing"]
                },
                {
                    "name": "Later",
                    "initiatives": ["Autonomous short-sea pilots", "Green ammonia bunkering"]
                }
            ],
            "themes": ["Decarbonization", "Digital Operations", "Portfolio Growth"]
        }))
}

/// Commodity trade flows across the network
pub fn trade_flows() -> Dataset {
    Dataset::new("trade-flows", "Trade Flows", "Shipping & Logistics", "Analytics")
        .with_description("Commodity volumes by route across the group network")
        .with_tags(["trade", "commodities", "shipping", "routes"])
        .with_data_count(156)
        .with_data(json!({
            "commodities": ["Iron Ore", "LNG", "Coal", "Grain", "Containers"],
            "routes": [
                {
                    "origin": "Port Hedland",
                    "destination": "Qingdao",
                    "commodity": "Iron Ore",
                    "annual_tonnes_m": 42.5
                },
                {
                    "origin": "Gladstone",
                    "destination": "Tokyo",
                    "commodity": "LNG",
                    "annual_tonnes_m": 8.1
                },
                {
                    "origin": "Santos",
                    "destination": "Rotterdam",
                    "commodity": "Grain",
                    "annual_tonnes_m": 5.4
                },
                {
                    "origin": "Newcastle",
                    "destination": "Busan",
                    "commodity": "Coal",
                    "annual_tonnes_m": 12.9
                }
            ]
        }))
}
