//! Duplicate injection: overwrite a fraction of a page's rows with
//! copies from earlier in the same page and from the previously
//! returned page.
//!
//! Simulates APIs with inconsistent snapshot boundaries. The page
//! length never changes; a correct client must deduplicate by
//! record_id across pages, not assume page-local uniqueness.

use crate::row::Row;
use crate::seed::SeedRng;
use crate::types::RequestSeq;

pub fn inject(
    page: &mut [Row],
    scenario_id: &str,
    request: RequestSeq,
    dup_rate: f64,
    cross_dup_rate: f64,
    last_page: &[Row],
) {
    if page.is_empty() {
        return;
    }
    let request = request.to_string();
    let mut rng = SeedRng::from_parts(&[scenario_id, "dup", &request]);

    // Within-page: sources walk the front of the page; overwrites
    // are cumulative, so later copies may land on earlier ones.
    let within = (page.len() as f64 * dup_rate) as usize;
    for j in 0..within {
        let src = j % page.len();
        let dst = rng.next_index(page.len());
        page[dst] = page[src].clone();
    }

    // Cross-page: copies drawn from the previously returned page,
    // source drawn before destination.
    if !last_page.is_empty() && cross_dup_rate > 0.0 {
        let cross = (page.len() as f64 * cross_dup_rate) as usize;
        for _ in 0..cross {
            let src = rng.next_index(last_page.len());
            let dst = rng.next_index(page.len());
            page[dst] = last_page[src].clone();
        }
    }
}
