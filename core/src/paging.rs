//! Pagination arithmetic: resolve page/offset parameters into a
//! concrete [start, end) row window.

use crate::row::Row;

/// Page size when neither the request nor the constraints name one.
pub const DEFAULT_PAGE_SIZE: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub page_index: usize,
    pub page_size: usize,
}

/// Resolve paging parameters into a window.
///
/// Page-size precedence: the per-request max-records hint, then the
/// per-request page-size hint, then the constraint page size, then
/// DEFAULT_PAGE_SIZE. An explicit byte offset wins over the page
/// index; otherwise pages are 1-based.
pub fn select_window(
    page: usize,
    offset: Option<usize>,
    max_records: Option<usize>,
    page_size: Option<usize>,
    constraint_page_size: Option<usize>,
) -> PageWindow {
    // A zero at any level counts as absent and falls through.
    let per_page = max_records
        .filter(|&n| n > 0)
        .or(page_size.filter(|&n| n > 0))
        .or(constraint_page_size.filter(|&n| n > 0))
        .unwrap_or(DEFAULT_PAGE_SIZE);
    match offset {
        Some(start) => PageWindow {
            start,
            page_index: (start / per_page).saturating_add(1),
            page_size: per_page,
        },
        None => {
            let page_index = page.max(1);
            PageWindow {
                // Saturation keeps absurd page numbers in the
                // out-of-range-means-empty-page path.
                start: page_index.saturating_sub(1).saturating_mul(per_page),
                page_index,
                page_size: per_page,
            }
        }
    }
}

/// Slice the window out of the full row set. The end is clamped to
/// both the resolved total and the actual row count (a fixture may
/// be shorter than the configured total). An out-of-range start
/// yields an empty page — a valid terminal response, not an error.
pub fn window_slice<'a>(rows: &'a [Row], window: &PageWindow, total_rows: usize) -> &'a [Row] {
    let end = total_rows
        .min(window.start.saturating_add(window.page_size))
        .min(rows.len());
    let start = window.start.min(end);
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_precedence_chain() {
        assert_eq!(select_window(1, None, Some(100), Some(200), Some(300)).page_size, 100);
        assert_eq!(select_window(1, None, None, Some(200), Some(300)).page_size, 200);
        assert_eq!(select_window(1, None, None, None, Some(300)).page_size, 300);
        assert_eq!(select_window(1, None, None, None, None).page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn offset_wins_over_page_index() {
        let window = select_window(7, Some(120), None, Some(50), None);
        assert_eq!(window.start, 120);
        assert_eq!(window.page_index, 120 / 50 + 1);
        assert_eq!(window.page_size, 50);
    }

    #[test]
    fn zero_sizes_count_as_absent_at_every_level() {
        assert_eq!(select_window(1, None, None, None, Some(0)).page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(select_window(1, None, Some(0), Some(0), Some(0)).page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(select_window(1, None, Some(0), None, Some(300)).page_size, 300);
    }

    #[test]
    fn extreme_inputs_saturate_instead_of_overflowing() {
        let window = select_window(usize::MAX, None, None, Some(50), None);
        assert_eq!(window.start, usize::MAX);
        assert_eq!(window.page_index, usize::MAX);

        let window = select_window(1, Some(usize::MAX), Some(1), None, None);
        assert_eq!(window.start, usize::MAX);
        assert_eq!(window.page_index, usize::MAX);

        let rows = vec![Row::default(); 3];
        assert!(window_slice(&rows, &window, 3).is_empty());
    }

    #[test]
    fn page_index_is_one_based_with_a_floor() {
        let window = select_window(0, None, None, Some(50), None);
        assert_eq!(window.page_index, 1);
        assert_eq!(window.start, 0);

        let window = select_window(3, None, None, Some(50), None);
        assert_eq!(window.start, 100);
    }
}
