//! Totals-trap injection: prepend a synthetic aggregate row that a
//! correct client must recognize by its marker and discard.

use crate::config::QuerySpec;
use crate::row::Row;

/// Partner sentinel on the aggregate row ("world").
pub const WORLD_PARTNER: &str = "WLD";

/// Category-code sentinel on the aggregate row.
pub const TOTAL_CODE: &str = "TOTAL";

/// Prepend the aggregate row. The returned page grows by exactly one.
pub fn inject(page: &mut Vec<Row>, scenario_id: &str, page_index: usize, query: &QuerySpec) {
    let total = totals_row(page, scenario_id, page_index, query);
    page.insert(0, total);
}

/// Build the aggregate row for a page: sums over the pre-injection
/// page, sentinel partner/code, a marker, and a deterministic id.
pub fn totals_row(page: &[Row], scenario_id: &str, page_index: usize, query: &QuerySpec) -> Row {
    Row {
        year: query.year,
        reporter: query.reporter.clone(),
        partner: WORLD_PARTNER.to_string(),
        flow: query.flow.clone(),
        hs: TOTAL_CODE.to_string(),
        cmd_code: TOTAL_CODE.to_string(),
        trade_value: page.iter().map(|r| r.trade_value).sum(),
        net_weight: page.iter().map(|r| r.net_weight).sum(),
        qty: page.iter().map(|r| r.qty).sum(),
        record_id: format!("{scenario_id}-TOTAL-{page_index:04}"),
        is_total: true,
    }
}
