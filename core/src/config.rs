//! Scenario configuration — the record the harness installs once
//! per benchmark task.
//!
//! The fault spec is a tagged variant per fault mode, each carrying
//! its own typed parameters. Exactly one mode is active at a time.
//! Wire names accept both the current (`scenario_id`/`fault_spec`)
//! and the legacy (`task_id`/`fault_injection`) payload keys.

use serde::{Deserialize, Serialize};

use crate::types::ScenarioId;

/// Default size of the full row set when neither the fault spec
/// nor the constraints override it.
pub const DEFAULT_TOTAL_ROWS: usize = 800;

pub const DEFAULT_DUPLICATE_RATE: f64 = 0.06;
pub const DEFAULT_CROSS_PAGE_DUPLICATE_RATE: f64 = 0.02;

/// Identifies the logical dataset being queried. Base row content
/// is a pure function of the scenario id plus these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub reporter: String,
    pub partner: String,
    pub flow: String,
    pub hs: String,
    pub year: i32,
}

impl QuerySpec {
    pub fn new(reporter: &str, partner: &str, flow: &str, hs: &str, year: i32) -> Self {
        Self {
            reporter: reporter.to_string(),
            partner: partner.to_string(),
            flow: flow.to_string(),
            hs: hs.to_string(),
            year,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingMode {
    Page,
    Offset,
}

/// Harness-facing paging/volume defaults. Everything is optional;
/// absent fields fall through the documented precedence chains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging_mode: Option<PagingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_requests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_qps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<usize>,
}

/// The single active pathology for the scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FaultMode {
    None,
    /// Multi-page fetch with no injected pathology beyond volume.
    Pagination,
    Duplicates {
        #[serde(default = "default_duplicate_rate")]
        duplicate_rate: f64,
        #[serde(default = "default_cross_page_duplicate_rate")]
        cross_page_duplicate_rate: f64,
    },
    RateLimit {
        /// Request-sequence positions at which to fire, one-shot each.
        #[serde(default)]
        fail_on: Vec<u64>,
    },
    ServerError {
        #[serde(default)]
        fail_on: Vec<u64>,
    },
    PageDrift,
    TotalsTrap,
}

fn default_duplicate_rate() -> f64 {
    DEFAULT_DUPLICATE_RATE
}

fn default_cross_page_duplicate_rate() -> f64 {
    DEFAULT_CROSS_PAGE_DUPLICATE_RATE
}

impl FaultMode {
    /// Stable mode name for logs and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pagination => "pagination",
            Self::Duplicates { .. } => "duplicates",
            Self::RateLimit { .. } => "rate_limit",
            Self::ServerError { .. } => "server_error",
            Self::PageDrift => "page_drift",
            Self::TotalsTrap => "totals_trap",
        }
    }
}

/// Fault mode plus the mode-independent volume override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultSpec {
    #[serde(flatten)]
    pub mode: FaultMode,
    /// Overrides the constraint-level row count when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<usize>,
}

impl FaultSpec {
    pub fn none() -> Self {
        Self {
            mode: FaultMode::None,
            total_rows: None,
        }
    }

    pub fn of(mode: FaultMode) -> Self {
        Self {
            mode,
            total_rows: None,
        }
    }
}

impl Default for FaultSpec {
    fn default() -> Self {
        Self::none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(alias = "task_id")]
    pub scenario_id: ScenarioId,
    pub query: QuerySpec,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(rename = "fault_spec", alias = "fault_injection", default)]
    pub fault: FaultSpec,
}

impl ScenarioConfig {
    /// Size of the full row set. Precedence: fault-spec override,
    /// then constraints, then DEFAULT_TOTAL_ROWS.
    pub fn resolved_total_rows(&self) -> usize {
        self.fault
            .total_rows
            .or(self.constraints.total_rows)
            .unwrap_or(DEFAULT_TOTAL_ROWS)
    }
}
