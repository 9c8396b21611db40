//! Task Grid Frontend App
//!
//! Owns the canonical rows and the grid state, and wires the grid's
//! callbacks to the row store and the add/edit modal.

use leptos::prelude::*;
use reactive_stores::Store;
use task_grid::{Row, RowId};

use crate::components::{TaskModal, TaskTable};
use crate::context::GridContext;
use crate::seed;
use crate::store::{store_remove_row, store_replace_rows, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = seed::load_config();
    let items_per_page = config.items_per_page;

    // State
    let store = Store::new(AppState::new(seed::load_rows()));
    let grid = GridContext::new(config);
    let (modal_open, set_modal_open) = signal(false);
    let (editing, set_editing) = signal::<Option<RowId>>(None);

    // Provide context to all children
    provide_context(store);
    provide_context(grid);

    let rows = Signal::derive(move || store.rows().get());
    let current_page = Signal::derive(move || grid.state.with(|s| s.current_page));

    view! {
        <main class="app-layout">
            <h1>"Tasks"</h1>

            <TaskTable
                rows=rows
                current_page=current_page
                items_per_page=items_per_page
                delete_row=move |id: RowId| store_remove_row(&store, &id)
                edit_row=move |id: RowId| {
                    set_editing.set(Some(id));
                    set_modal_open.set(true);
                }
                set_current_page=move |page: usize| grid.set_page(page)
                set_modal_open=move |open: bool| {
                    // The Add button opens a blank form
                    if open { set_editing.set(None); }
                    set_modal_open.set(open);
                }
                set_rows={move |rows: Vec<Row>| store_replace_rows(&store, rows)}
            />

            <p class="item-count">{move || format!("{} tasks", store.rows().with(|r| r.len()))}</p>

            <Show when=move || modal_open.get()>
                <TaskModal editing=editing on_close=move |_: ()| set_modal_open.set(false) />
            </Show>
        </main>
    }
}
