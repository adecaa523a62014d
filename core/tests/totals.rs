//! Totals trap: every returned page leads with a marked aggregate
//! row whose sums match the rest of the page exactly.

use mocktrade_core::{
    catalog,
    config::QuerySpec,
    engine::{MockEngine, SearchParams},
    fixtures::FixtureStore,
    rows, totals_injector,
};

fn engine() -> MockEngine {
    MockEngine::new(FixtureStore::new("./no-such-fixtures"))
}

#[test]
fn totals_row_sums_the_pre_injection_page() {
    let query = QuerySpec::new("826", "372", "M", "27", 2017);
    let base = rows::synthesize("totals-unit", &query, 20);

    let total = totals_injector::totals_row(&base, "totals-unit", 2, &query);
    assert!(total.is_total);
    assert_eq!(total.partner, totals_injector::WORLD_PARTNER);
    assert_eq!(total.hs, totals_injector::TOTAL_CODE);
    assert_eq!(total.record_id, "totals-unit-TOTAL-0002");
    assert_eq!(total.trade_value, base.iter().map(|r| r.trade_value).sum::<i64>());
    assert_eq!(total.net_weight, base.iter().map(|r| r.net_weight).sum::<i64>());
    assert_eq!(total.qty, base.iter().map(|r| r.qty).sum::<i64>());

    let mut page = base.clone();
    totals_injector::inject(&mut page, "totals-unit", 2, &query);
    assert_eq!(page.len(), base.len() + 1);
    assert_eq!(page[1..], base[..]);
}

#[test]
fn every_returned_page_leads_with_the_marked_total() {
    // T7: 750 rows at page size 250 — three full pages.
    let mut engine = engine();
    engine.configure(catalog::scenario("T7_totals_trap").unwrap());

    for page in 1..=3 {
        let response = engine
            .search(&SearchParams {
                page,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response.returned_rows, 251, "page {page}");

        let total = &response.data[0];
        assert!(total.is_total, "page {page} leads with a data row");
        assert_eq!(total.record_id, format!("T7_totals_trap-TOTAL-{page:04}"));

        let rest = &response.data[1..];
        assert!(rest.iter().all(|r| !r.is_total));
        assert_eq!(total.trade_value, rest.iter().map(|r| r.trade_value).sum::<i64>());
        assert_eq!(total.net_weight, rest.iter().map(|r| r.net_weight).sum::<i64>());
        assert_eq!(total.qty, rest.iter().map(|r| r.qty).sum::<i64>());
    }
}

#[test]
fn empty_terminal_page_still_carries_a_zero_total() {
    let mut engine = engine();
    engine.configure(catalog::scenario("T7_totals_trap").unwrap());

    let response = engine
        .search(&SearchParams {
            page: 4,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(response.returned_rows, 1);
    let total = &response.data[0];
    assert!(total.is_total);
    assert_eq!(total.trade_value, 0);
    assert_eq!(total.qty, 0);
}
