//! Grid Context
//!
//! The grid's filter/sort/page state, shared through the Leptos Context API
//! so components read and edit one explicit [`GridState`].

use leptos::prelude::*;
use task_grid::{FilterField, GridConfig, GridState, SortColumn};

#[derive(Clone, Copy)]
pub struct GridContext {
    pub state: RwSignal<GridState>,
    config: StoredValue<GridConfig>,
}

impl GridContext {
    pub fn new(config: GridConfig) -> Self {
        Self {
            state: RwSignal::new(GridState::new(config.items_per_page)),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> GridConfig {
        self.config.get_value()
    }

    /// Current value of one filter input
    pub fn criterion(&self, field: FilterField) -> String {
        self.state.with(|s| s.criteria.get(field).to_string())
    }

    pub fn set_criterion(&self, field: FilterField, value: String) {
        log::debug!("[GRID] filter {:?} = {:?}", field, value);
        self.state.update(|s| s.set_criterion(field, value));
    }

    /// The "Clear" control
    pub fn clear_criteria(&self) {
        self.state.update(|s| s.clear_criteria());
    }

    pub fn toggle_sort(&self, column: SortColumn) {
        self.state.update(|s| s.toggle_sort(column));
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|s| s.current_page = page);
    }
}

/// Get the grid context
pub fn use_grid() -> GridContext {
    use_context::<GridContext>().expect("GridContext should be provided")
}
