//! Task Grid Core
//!
//! The data pipeline behind the task grid:
//! - row: task records and their wire normalization
//! - filter: per-column filter predicates and dropdown option lists
//! - sort: single-column sorting
//! - pagination: page math and display ordinals
//! - reorder: drag-result application to the canonical sequence
//! - present: display strings and style classes
//! - state: the explicit grid state and the full pipeline

mod config;
mod criteria;
mod error;
mod filter;
mod pagination;
mod present;
mod reorder;
mod row;
mod sort;
mod state;

pub mod dates;

pub use config::GridConfig;
pub use criteria::{FilterCriteria, FilterField};
pub use error::{GridError, GridResult};
pub use filter::{capitalize, filter_rows, row_matches, FilterOptions};
pub use pagination::{clamp_page, display_ordinal, page_numbers, page_slice, request_page, total_pages};
pub use present::{
    is_assigned_class, is_assigned_label, member_classes, members_display, priority_class, priority_label,
    status_class, RowView,
};
pub use reorder::{move_row, reorder_displayed, ReorderListener};
pub use row::{number_text, rows_from_json, BoolLike, Priority, Row, RowId, Status};
pub use sort::{sort_rows, SortColumn, SortDirection, SortState};
pub use state::{GridState, GridView};
