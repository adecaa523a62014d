//! Base row production: fixture-backed where a fixture exists,
//! otherwise synthesized from the scenario seed.

use crate::config::QuerySpec;
use crate::error::SimResult;
use crate::fixtures::FixtureStore;
use crate::row::Row;
use crate::seed::SeedRng;

// Scales for the synthesized numeric fields. The draw order
// (trade value, net weight, qty) is part of the determinism
// contract — never reorder.
const TRADE_VALUE_SCALE: f64 = 1_000_000.0;
const NET_WEIGHT_SCALE: f64 = 50_000.0;
const QTY_SCALE: f64 = 10_000.0;

/// Produce the full, ordered row set for a scenario.
pub fn base_rows(
    fixtures: &FixtureStore,
    scenario_id: &str,
    query: &QuerySpec,
    total_rows: usize,
) -> SimResult<Vec<Row>> {
    if let Some(rows) = fixtures.load(scenario_id)? {
        log::debug!("scenario={scenario_id} fixture rows={}", rows.len());
        return Ok(rows);
    }
    Ok(synthesize(scenario_id, query, total_rows))
}

/// Deterministically synthesize `total_rows` rows. Content depends
/// only on the scenario id and the query fields, never on the
/// request sequence.
pub fn synthesize(scenario_id: &str, query: &QuerySpec, total_rows: usize) -> Vec<Row> {
    let year = query.year.to_string();
    let mut rng = SeedRng::from_parts(&[
        scenario_id,
        &query.reporter,
        &query.partner,
        &query.flow,
        &query.hs,
        &year,
    ]);
    (0..total_rows)
        .map(|i| Row {
            year: query.year,
            reporter: query.reporter.clone(),
            partner: query.partner.clone(),
            flow: query.flow.clone(),
            hs: query.hs.clone(),
            cmd_code: query.hs.clone(),
            trade_value: (rng.next_f64() * TRADE_VALUE_SCALE) as i64,
            net_weight: (rng.next_f64() * NET_WEIGHT_SCALE) as i64,
            qty: (rng.next_f64() * QTY_SCALE) as i64,
            record_id: format!("{scenario_id}-{i:06}"),
            is_total: false,
        })
        .collect()
}
