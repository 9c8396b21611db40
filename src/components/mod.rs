//! UI Components
//!
//! Leptos components for the task grid.

mod delete_confirm_button;
mod filter_row;
mod pagination_bar;
mod task_form;
mod task_table;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_row::FilterRow;
pub use pagination_bar::PaginationBar;
pub use task_form::TaskModal;
pub use task_table::TaskTable;
