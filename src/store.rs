//! Row Store
//!
//! The canonical row sequence, owned by the app shell and handed to the
//! grid. Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use task_grid::{Row, RowId};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All rows in canonical order
    pub rows: Vec<Row>,
}

impl AppState {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Next free id: numeric ids continue from the largest, otherwise `T-n`
pub fn next_row_id(rows: &[Row]) -> RowId {
    let numeric: Vec<u64> = rows.iter().filter_map(|r| r.id.as_str().parse().ok()).collect();
    if !rows.is_empty() && numeric.len() == rows.len() {
        let next = numeric.iter().max().copied().unwrap_or(0) + 1;
        return RowId::new(next.to_string());
    }
    (rows.len() + 1..)
        .map(|n| RowId::new(format!("T-{}", n)))
        .find(|candidate| rows.iter().all(|r| &r.id != candidate))
        .unwrap_or_else(|| RowId::new(format!("T-{}", rows.len() + 1)))
}

/// Next serial number, one past the largest numeric serial
pub fn next_serial_no(rows: &[Row]) -> String {
    let max = rows.iter().filter_map(|r| r.serial_no.trim().parse::<u64>().ok()).max().unwrap_or(0);
    (max + 1).to_string()
}

// ========================
// Store Helper Functions
// ========================

/// Append a row to the end of the canonical sequence
pub fn store_add_row(store: &AppStore, row: Row) {
    log::info!("[STORE] adding row {}", row.id);
    store.rows().write().push(row);
}

/// Replace a row in place by ID
pub fn store_update_row(store: &AppStore, updated: Row) {
    log::info!("[STORE] updating row {}", updated.id);
    if let Some(row) = store.rows().write().iter_mut().find(|row| row.id == updated.id) {
        *row = updated;
    }
}

/// Remove a row by ID
pub fn store_remove_row(store: &AppStore, id: &RowId) {
    log::info!("[STORE] removing row {}", id);
    store.rows().write().retain(|row| &row.id != id);
}

/// Replace the whole sequence (reorder results)
pub fn store_replace_rows(store: &AppStore, rows: Vec<Row>) {
    log::debug!("[STORE] replacing {} rows", rows.len());
    *store.rows().write() = rows;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_row_id_numeric() {
        let rows = vec![Row::new("3", "1", "a"), Row::new("11", "2", "b")];
        assert_eq!(next_row_id(&rows), RowId::new("12"));
    }

    #[test]
    fn test_next_row_id_text() {
        assert_eq!(next_row_id(&[]), RowId::new("T-1"));
        let rows = vec![Row::new("T-2", "1", "a"), Row::new("x", "2", "b")];
        assert_eq!(next_row_id(&rows), RowId::new("T-3"));
        let rows = vec![Row::new("T-2", "1", "a")];
        assert_eq!(next_row_id(&rows), RowId::new("T-3"));
    }

    #[test]
    fn test_next_serial_no() {
        let rows = vec![Row::new("a", "4", ""), Row::new("b", "x", ""), Row::new("c", "2", "")];
        assert_eq!(next_serial_no(&rows), "5");
        assert_eq!(next_serial_no(&[]), "1");
    }
}
