//! The static catalog of benchmark scenarios.
//!
//! Each entry bundles a query, paging/volume constraints, and a
//! fault spec. The engine consumes one entry at a time through
//! configure; the catalog itself carries no behavior.

use crate::config::{
    Constraints, FaultMode, FaultSpec, PagingMode, QuerySpec, ScenarioConfig,
};

pub struct CatalogEntry {
    pub description: &'static str,
    pub config: ScenarioConfig,
}

/// All benchmark scenarios, in grading order.
pub fn scenarios() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            description: "Single query, single page. Validate schema + row count.",
            config: ScenarioConfig {
                scenario_id: "T1_single_page".into(),
                query: QuerySpec::new("840", "156", "M", "85", 2021),
                constraints: constraints(PagingMode::Page, 1000, 5, 5, 800),
                fault: FaultSpec::none(),
            },
        },
        CatalogEntry {
            description: "Multi-page fetch (page+maxRecords). Must fetch all pages and merge.",
            config: ScenarioConfig {
                scenario_id: "T2_multi_page".into(),
                query: QuerySpec::new("276", "250", "X", "84", 2022),
                constraints: constraints(PagingMode::Page, 500, 50, 5, 2345),
                fault: FaultSpec::of(FaultMode::Pagination),
            },
        },
        CatalogEntry {
            description: "Duplicates within and across pages: must deduplicate by primary key.",
            config: ScenarioConfig {
                scenario_id: "T3_duplicates".into(),
                query: QuerySpec::new("392", "410", "M", "87", 2020),
                constraints: constraints(PagingMode::Offset, 10, 50, 5, 25),
                fault: FaultSpec::of(FaultMode::Duplicates {
                    duplicate_rate: 0.08,
                    cross_page_duplicate_rate: 0.03,
                }),
            },
        },
        CatalogEntry {
            description: "Occasional 429: must backoff + retry and still finish.",
            config: ScenarioConfig {
                scenario_id: "T4_rate_limit_429".into(),
                query: QuerySpec::new("724", "826", "X", "30", 2019),
                constraints: constraints(PagingMode::Page, 10, 60, 3, 30),
                fault: FaultSpec::of(FaultMode::RateLimit { fail_on: vec![2] }),
            },
        },
        CatalogEntry {
            description: "Occasional 500: must retry and still finish.",
            config: ScenarioConfig {
                scenario_id: "T5_server_error_500".into(),
                query: QuerySpec::new("124", "36", "M", "12", 2023),
                constraints: constraints(PagingMode::Page, 10, 60, 3, 30),
                fault: FaultSpec::of(FaultMode::ServerError { fail_on: vec![2] }),
            },
        },
        CatalogEntry {
            description: "Same page may return different ordering/rows; must canonicalize + dedup.",
            config: ScenarioConfig {
                scenario_id: "T6_page_drift".into(),
                query: QuerySpec::new("356", "704", "X", "09", 2018),
                constraints: constraints(PagingMode::Page, 12, 60, 5, 36),
                fault: FaultSpec::of(FaultMode::PageDrift),
            },
        },
        CatalogEntry {
            description: "Totals rows included with marker; must drop totals rows.",
            config: ScenarioConfig {
                scenario_id: "T7_totals_trap".into(),
                query: QuerySpec::new("826", "372", "M", "27", 2017),
                constraints: constraints(PagingMode::Offset, 250, 60, 5, 750),
                fault: FaultSpec::of(FaultMode::TotalsTrap),
            },
        },
    ]
}

/// Look up one scenario's configuration by id.
pub fn scenario(scenario_id: &str) -> Option<ScenarioConfig> {
    scenarios()
        .into_iter()
        .find(|entry| entry.config.scenario_id == scenario_id)
        .map(|entry| entry.config)
}

fn constraints(
    paging_mode: PagingMode,
    page_size: usize,
    max_requests: u32,
    rate_limit_qps: u32,
    total_rows: usize,
) -> Constraints {
    Constraints {
        paging_mode: Some(paging_mode),
        page_size: Some(page_size),
        max_requests: Some(max_requests),
        rate_limit_qps: Some(rate_limit_qps),
        total_rows: Some(total_rows),
    }
}
