//! Row Reordering
//!
//! Reordering edits the canonical row sequence. Indices reported by a drag
//! gesture refer to the displayed rows, which differ from canonical
//! positions whenever a filter is active or the page is not the first, so
//! they are mapped back through row ids before anything moves.

use crate::row::Row;

/// Receiver for a completed reorder gesture
///
/// `destination` is `None` when the gesture ended without a drop target.
pub trait ReorderListener {
    fn on_reorder_complete(&self, source_index: usize, destination_index: Option<usize>);
}

impl<F> ReorderListener for F
where
    F: Fn(usize, Option<usize>),
{
    fn on_reorder_complete(&self, source_index: usize, destination_index: Option<usize>) {
        self(source_index, destination_index)
    }
}

/// Remove the row at `source` and reinsert it at `destination`
///
/// Returns `None` (nothing to hand to the row owner) when there is no
/// destination, an index is out of bounds, or the row would not move.
pub fn move_row(rows: &[Row], source: usize, destination: Option<usize>) -> Option<Vec<Row>> {
    let destination = destination?;
    if source >= rows.len() || destination >= rows.len() || source == destination {
        log::debug!("[REORDER] no-op move {} -> {} over {} rows", source, destination, rows.len());
        return None;
    }
    let mut updated = rows.to_vec();
    let moved = updated.remove(source);
    log::debug!("[REORDER] moving {} from {} to {}", moved.id, source, destination);
    updated.insert(destination, moved);
    Some(updated)
}

/// Reorder `canonical` from indices into `displayed`
///
/// The dragged row is moved to the canonical position held by the row it
/// was dropped on.
pub fn reorder_displayed(
    canonical: &[Row],
    displayed: &[Row],
    source: usize,
    destination: Option<usize>,
) -> Option<Vec<Row>> {
    let canonical_index = |display_index: usize| {
        let id = &displayed.get(display_index)?.id;
        canonical.iter().position(|row| &row.id == id)
    };
    let source = canonical_index(source)?;
    let destination = destination.and_then(canonical_index);
    move_row(canonical, source, destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{FilterCriteria, FilterField};
    use crate::filter::filter_rows;
    use crate::row::Status;
    use proptest::prelude::*;
    use std::cell::RefCell;

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter().enumerate().map(|(i, id)| Row::new(*id, (i + 1).to_string(), *id)).collect()
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_move_row_example() {
        let moved = move_row(&rows(&["A", "B", "C"]), 0, Some(2)).unwrap();
        assert_eq!(ids(&moved), vec!["B", "C", "A"]);

        let moved = move_row(&rows(&["A", "B", "C"]), 2, Some(0)).unwrap();
        assert_eq!(ids(&moved), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_move_row_keeps_fields() {
        let original = rows(&["A", "B", "C"]);
        let moved = move_row(&original, 0, Some(2)).unwrap();
        let a = moved.iter().find(|r| r.id.as_str() == "A").unwrap();
        assert_eq!(a, &original[0]);
    }

    #[test]
    fn test_no_op_moves() {
        let r = rows(&["A", "B", "C"]);
        assert!(move_row(&r, 0, None).is_none());
        assert!(move_row(&r, 1, Some(1)).is_none());
        assert!(move_row(&r, 0, Some(3)).is_none());
        assert!(move_row(&r, 5, Some(0)).is_none());
    }

    #[test]
    fn test_reorder_under_filter_maps_to_canonical() {
        let mut canonical = rows(&["A", "B", "C", "D", "E"]);
        canonical[1].status = Status::Completed;
        canonical[3].status = Status::Completed;
        canonical[4].status = Status::Completed;
        let criteria = FilterCriteria::default().with(FilterField::Status, "completed");
        let displayed = filter_rows(&canonical, &criteria);
        assert_eq!(ids(&displayed), vec!["B", "D", "E"]);

        // Drag displayed row 0 (B) onto displayed row 2 (E)
        let updated = reorder_displayed(&canonical, &displayed, 0, Some(2)).unwrap();
        assert_eq!(ids(&updated), vec!["A", "C", "D", "E", "B"]);
    }

    #[test]
    fn test_reorder_on_second_page() {
        let canonical = rows(&["A", "B", "C", "D"]);
        let page_two = &canonical[2..4];
        let updated = reorder_displayed(&canonical, page_two, 1, Some(0)).unwrap();
        assert_eq!(ids(&updated), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn test_reorder_unknown_display_index() {
        let canonical = rows(&["A", "B"]);
        assert!(reorder_displayed(&canonical, &canonical, 0, Some(9)).is_none());
        assert!(reorder_displayed(&canonical, &canonical, 9, Some(0)).is_none());
    }

    #[test]
    fn test_closure_listener() {
        let seen = RefCell::new(Vec::new());
        let listener = |source: usize, destination: Option<usize>| seen.borrow_mut().push((source, destination));
        listener.on_reorder_complete(1, Some(3));
        listener.on_reorder_complete(0, None);
        assert_eq!(*seen.borrow(), vec![(1, Some(3)), (0, None)]);
    }

    proptest! {
        #[test]
        fn prop_reorder_is_permutation(len in 1usize..20, source in 0usize..20, destination in 0usize..20) {
            let names: Vec<String> = (0..len).map(|i| format!("r{}", i)).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let original = rows(&refs);
            if let Some(updated) = move_row(&original, source, Some(destination)) {
                let mut before: Vec<&str> = ids(&original);
                let mut after: Vec<&str> = ids(&updated);
                prop_assert_eq!(after[destination], before[source]);
                before.sort();
                after.sort();
                prop_assert_eq!(before, after);
            }
        }
    }
}
