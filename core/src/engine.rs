//! The request-simulation engine.
//!
//! CONTROL FLOW per query (fixed, documented, never reordered):
//!   1. Reject unless configured; validate parameters.
//!   2. Increment the request counter.
//!   3. Fault trigger may short-circuit with a transient error.
//!   4. Row source supplies the base dataset.
//!   5. Drift injector conditionally reorders the full set.
//!   6. Pagination calculator selects the window.
//!   7. Duplicate / totals injectors conditionally mutate the page.
//!   8. The page is recorded as "last page" and returned.
//!
//! One MockEngine is one simulated session. Requests are processed
//! strictly one at a time; a concurrent transport wraps the engine
//! in a single exclusive lock.

use serde::{Deserialize, Serialize};

use crate::config::{FaultMode, FaultSpec, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::fixtures::FixtureStore;
use crate::row::Row;
use crate::session::SessionState;
use crate::types::ScenarioId;
use crate::{drift_injector, duplicate_injector, fault_trigger, paging, rows, totals_injector};

/// Upper bound on the per-request page-size hint.
pub const MAX_PAGE_SIZE: usize = 5000;

/// Upper bound on the per-request max-records hint.
pub const MAX_MAX_RECORDS: usize = 10_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub page: usize,
    pub page_size: Option<usize>,
    #[serde(alias = "maxRecords")]
    pub max_records: Option<usize>,
    pub offset: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: None,
            max_records: None,
            offset: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigureAck {
    #[serde(rename = "task_id")]
    pub scenario_id: ScenarioId,
    #[serde(rename = "fault_spec")]
    pub fault: FaultSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    #[serde(rename = "task_id")]
    pub scenario_id: ScenarioId,
    pub page: usize,
    pub page_size: usize,
    /// Resolved start offset of the window.
    pub offset: usize,
    pub total_rows: usize,
    pub returned_rows: usize,
    pub data: Vec<Row>,
}

pub struct MockEngine {
    session: SessionState,
    fixtures: FixtureStore,
}

impl MockEngine {
    pub fn new(fixtures: FixtureStore) -> Self {
        Self {
            session: SessionState::new(),
            fixtures,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.session.is_configured()
    }

    /// Install a scenario configuration, replacing any previous one
    /// and resetting all session state. Echoes the id and fault spec.
    pub fn configure(&mut self, config: ScenarioConfig) -> ConfigureAck {
        log::debug!(
            "configure scenario={} mode={} total_rows={}",
            config.scenario_id,
            config.fault.mode.name(),
            config.resolved_total_rows(),
        );
        let ack = ConfigureAck {
            scenario_id: config.scenario_id.clone(),
            fault: config.fault.clone(),
        };
        self.session.install(config);
        ack
    }

    /// Simulate one paginated query against the active scenario.
    pub fn search(&mut self, params: &SearchParams) -> SimResult<SearchResponse> {
        let config = self.session.active()?.clone();
        validate(params)?;

        self.session.request_count += 1;
        let request = self.session.request_count;

        fault_trigger::maybe_fail(&config.fault, &mut self.session.fired, request)?;

        let total_rows = config.resolved_total_rows();
        let mut all_rows =
            rows::base_rows(&self.fixtures, &config.scenario_id, &config.query, total_rows)?;
        if config.fault.mode == FaultMode::PageDrift {
            all_rows = drift_injector::drift(all_rows, &config.scenario_id, request);
        }

        let window = paging::select_window(
            params.page,
            params.offset,
            params.max_records,
            params.page_size,
            config.constraints.page_size,
        );
        let mut page_rows = paging::window_slice(&all_rows, &window, total_rows).to_vec();

        if let FaultMode::Duplicates {
            duplicate_rate,
            cross_page_duplicate_rate,
        } = config.fault.mode
        {
            duplicate_injector::inject(
                &mut page_rows,
                &config.scenario_id,
                request,
                duplicate_rate,
                cross_page_duplicate_rate,
                &self.session.last_page,
            );
        }
        if config.fault.mode == FaultMode::TotalsTrap {
            totals_injector::inject(
                &mut page_rows,
                &config.scenario_id,
                window.page_index,
                &config.query,
            );
        }

        self.session.last_page = page_rows.clone();

        log::debug!(
            "request={request} scenario={} page={} start={} returned={}",
            config.scenario_id,
            window.page_index,
            window.start,
            page_rows.len(),
        );

        Ok(SearchResponse {
            scenario_id: config.scenario_id,
            page: window.page_index,
            page_size: window.page_size,
            offset: window.start,
            total_rows,
            returned_rows: page_rows.len(),
            data: page_rows,
        })
    }
}

fn validate(params: &SearchParams) -> SimResult<()> {
    if params.page < 1 {
        return Err(SimError::InvalidParam {
            name: "page",
            value: params.page.to_string(),
        });
    }
    if let Some(size) = params.page_size {
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(SimError::InvalidParam {
                name: "page_size",
                value: size.to_string(),
            });
        }
    }
    if let Some(max) = params.max_records {
        if !(1..=MAX_MAX_RECORDS).contains(&max) {
            return Err(SimError::InvalidParam {
                name: "max_records",
                value: max.to_string(),
            });
        }
    }
    Ok(())
}
