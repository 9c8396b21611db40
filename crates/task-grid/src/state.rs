//! Grid State
//!
//! The filter, sort and page state owned by one grid instance, plus the
//! pipeline that turns it and the canonical rows into what is on screen.

use crate::config::GridConfig;
use crate::criteria::{FilterCriteria, FilterField};
use crate::filter::filter_rows;
use crate::pagination::{clamp_page, page_slice, request_page, total_pages};
use crate::present::RowView;
use crate::reorder::reorder_displayed;
use crate::row::Row;
use crate::sort::{sort_rows, SortColumn, SortState};

#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    pub criteria: FilterCriteria,
    pub sort: SortState,
    /// 1-based
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(GridConfig::default().items_per_page)
    }
}

/// Result of running the pipeline once
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub filtered_count: usize,
    pub total_pages: usize,
    /// `current_page` clamped into range
    pub page: usize,
    /// Rows on the page, in display order
    pub page_rows: Vec<Row>,
    pub rows: Vec<RowView>,
}

impl GridState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortState::default(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn set_criterion(&mut self, field: FilterField, value: impl Into<String>) {
        self.criteria.set(field, value);
    }

    pub fn clear_criteria(&mut self) {
        self.criteria.clear();
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
    }

    /// Move to `target` if it is a valid page; returns whether it moved
    pub fn go_to_page(&mut self, target: usize, filtered_count: usize) -> bool {
        match request_page(target, total_pages(filtered_count, self.items_per_page)) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }

    /// Pull `current_page` back into range after the filtered count changed
    pub fn reclamp(&mut self, filtered_count: usize) -> bool {
        let clamped = clamp_page(self.current_page, total_pages(filtered_count, self.items_per_page));
        let changed = clamped != self.current_page;
        if changed {
            log::debug!("[GRID] page {} out of range, clamped to {}", self.current_page, clamped);
            self.current_page = clamped;
        }
        changed
    }

    /// Dragging edits canonical order, which a sorted view does not show
    pub fn can_reorder(&self) -> bool {
        !self.sort.is_active()
    }

    /// Filtered then sorted rows, before pagination
    pub fn visible_rows(&self, rows: &[Row]) -> Vec<Row> {
        sort_rows(&filter_rows(rows, &self.criteria), &self.sort)
    }

    pub fn view(&self, rows: &[Row], config: &GridConfig) -> GridView {
        let visible = self.visible_rows(rows);
        let total = total_pages(visible.len(), self.items_per_page);
        let page = clamp_page(self.current_page, total);
        let page_rows = page_slice(&visible, page, self.items_per_page).to_vec();
        let row_views = page_rows
            .iter()
            .enumerate()
            .map(|(idx, row)| RowView::project(row, idx, page, self.items_per_page, config))
            .collect();
        log::debug!(
            "[GRID] {} rows -> {} visible, page {}/{}",
            rows.len(),
            visible.len(),
            page,
            total
        );
        GridView {
            filtered_count: visible.len(),
            total_pages: total,
            page,
            page_rows,
            rows: row_views,
        }
    }

    /// Apply a drag result from the page shown by `view`
    ///
    /// Returns the new canonical sequence for the row owner, or `None` when
    /// nothing should change.
    pub fn reorder(
        &self,
        rows: &[Row],
        view: &GridView,
        source: usize,
        destination: Option<usize>,
    ) -> Option<Vec<Row>> {
        if !self.can_reorder() {
            log::debug!("[GRID] reorder ignored while sorted");
            return None;
        }
        reorder_displayed(rows, &view.page_rows, source, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Status;

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter().enumerate().map(|(i, id)| Row::new(*id, (i + 1).to_string(), *id)).collect()
    }

    fn view_ids(view: &GridView) -> Vec<&str> {
        view.rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_pages_and_ordinals() {
        let data = rows(&["A", "B", "C", "D"]);
        let config = GridConfig::default();
        let mut state = GridState::new(2);

        let view = state.view(&data, &config);
        assert_eq!(view_ids(&view), vec!["A", "B"]);
        assert_eq!(view.rows.iter().map(|r| r.ordinal).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(view.total_pages, 2);

        assert!(state.go_to_page(2, view.filtered_count));
        let view = state.view(&data, &config);
        assert_eq!(view_ids(&view), vec!["C", "D"]);
        assert_eq!(view.rows.iter().map(|r| r.ordinal).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_out_of_range_page_ignored() {
        let data = rows(&["A", "B", "C"]);
        let mut state = GridState::new(2);
        assert!(!state.go_to_page(3, data.len()));
        assert!(!state.go_to_page(0, data.len()));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_filter_reclamps_page() {
        let mut data = rows(&["A", "B", "C", "D", "E"]);
        data[0].status = Status::Completed;
        let config = GridConfig::default();
        let mut state = GridState::new(2);
        assert!(state.go_to_page(3, data.len()));

        state.set_criterion(FilterField::Status, "completed");
        let view = state.view(&data, &config);
        // The view never shows an empty out-of-range page
        assert_eq!(view.page, 1);
        assert_eq!(view_ids(&view), vec!["A"]);

        assert!(state.reclamp(view.filtered_count));
        assert_eq!(state.current_page, 1);
        assert!(!state.reclamp(view.filtered_count));
    }

    #[test]
    fn test_empty_filter_result_has_one_page() {
        let data = rows(&["A", "B"]);
        let mut state = GridState::new(2);
        state.set_criterion(FilterField::Description, "zzz");
        let view = state.view(&data, &GridConfig::default());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_clear_criteria() {
        let mut state = GridState::new(2);
        state.set_criterion(FilterField::Id, "A");
        state.clear_criteria();
        assert!(!state.criteria.is_active());
    }

    #[test]
    fn test_reorder_through_state() {
        let data = rows(&["A", "B", "C", "D"]);
        let config = GridConfig::default();
        let mut state = GridState::new(2);
        state.go_to_page(2, data.len());
        let view = state.view(&data, &config);

        let updated = state.reorder(&data, &view, 1, Some(0)).unwrap();
        let ids: Vec<&str> = updated.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "D", "C"]);
        assert!(state.reorder(&data, &view, 1, None).is_none());
    }

    #[test]
    fn test_reorder_disabled_while_sorted() {
        let data = rows(&["A", "B", "C"]);
        let config = GridConfig::default();
        let mut state = GridState::new(5);
        state.toggle_sort(SortColumn::Description);
        assert!(!state.can_reorder());
        let view = state.view(&data, &config);
        assert!(state.reorder(&data, &view, 0, Some(2)).is_none());
    }
}
