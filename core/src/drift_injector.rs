//! Row-order drift: deterministic per-request reordering of the
//! full row set, applied before windowing.
//!
//! The multiset of rows is preserved; only order changes. The seed
//! includes the request counter, so consecutive requests see
//! different orderings, while any two requests at the same counter
//! value drift identically.

use crate::row::Row;
use crate::seed::SeedRng;
use crate::types::RequestSeq;

pub fn drift(mut rows: Vec<Row>, scenario_id: &str, request: RequestSeq) -> Vec<Row> {
    let request = request.to_string();
    let mut rng = SeedRng::from_parts(&[scenario_id, "drift", &request]);
    rng.shuffle(&mut rows);
    rows
}
