//! Session state for one simulated API session.
//!
//! RULE: All mutation happens behind the engine's &mut self; a
//! concurrent transport must serialize requests with one exclusive
//! lock around the whole engine, because the counter and the fired
//! set must be updated atomically with the decisions they gate.

use std::collections::HashSet;

use crate::config::ScenarioConfig;
use crate::error::{SimError, SimResult};
use crate::fault_trigger::FaultKind;
use crate::row::Row;
use crate::types::RequestSeq;

#[derive(Default)]
pub struct SessionState {
    active: Option<ScenarioConfig>,
    pub request_count: RequestSeq,
    pub fired: HashSet<(FaultKind, RequestSeq)>,
    pub last_page: Vec<Row>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new configuration. All derived state resets:
    /// counter to zero, fired occurrences cleared, last page dropped.
    pub fn install(&mut self, config: ScenarioConfig) {
        self.active = Some(config);
        self.request_count = 0;
        self.fired.clear();
        self.last_page.clear();
    }

    pub fn is_configured(&self) -> bool {
        self.active.is_some()
    }

    /// The active configuration, or the precondition error that a
    /// query before configure must surface.
    pub fn active(&self) -> SimResult<&ScenarioConfig> {
        self.active.as_ref().ok_or(SimError::NotConfigured)
    }
}
