//! Pagination
//!
//! Pages are 1-based. There is always at least one page, even when no
//! rows survive filtering.

/// `max(1, ceil(count / items_per_page))`; a page size of 0 counts as 1
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    let per_page = items_per_page.max(1);
    count.div_ceil(per_page).max(1)
}

/// Clamp a page number into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Accept a page change only when the target is in range
///
/// Out-of-range requests are ignored rather than clamped.
pub fn request_page(target: usize, total_pages: usize) -> Option<usize> {
    if target >= 1 && target <= total_pages {
        Some(target)
    } else {
        log::debug!("[PAGE] ignoring request for page {} of {}", target, total_pages);
        None
    }
}

/// The rows shown on `page`
pub fn page_slice<T>(rows: &[T], page: usize, items_per_page: usize) -> &[T] {
    let per_page = items_per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(rows.len());
    let end = start.saturating_add(per_page).min(rows.len());
    &rows[start..end]
}

/// Running number of the row at slice index `idx`
pub fn display_ordinal(idx: usize, page: usize, items_per_page: usize) -> usize {
    idx + 1 + page.saturating_sub(1) * items_per_page.max(1)
}

/// Page numbers for the pagination bar
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages.max(1)).collect()
}
