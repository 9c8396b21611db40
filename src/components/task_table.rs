//! Task Table Component
//!
//! The grid itself: header with sortable columns, filter row, the current
//! page of rows with drag handles, and the pagination bar.
//! Rows are owned by the parent; changes go out through the callbacks.

use leptos::prelude::*;
use task_grid::{FilterOptions, GridView, ReorderListener, Row, RowId, RowView, SortColumn};

use crate::components::{DeleteConfirmButton, FilterRow, PaginationBar};
use crate::context::{use_grid, GridContext};

use leptos_dragdrop::*;

/// Column headers; `None` columns are not sortable
const COLUMNS: &[(&str, Option<SortColumn>)] = &[
    ("Order", None),
    ("Row no", None),
    ("Serial No", Some(SortColumn::SerialNo)),
    ("Task Title", Some(SortColumn::Description)),
    ("Task ID", Some(SortColumn::Id)),
    ("Status", Some(SortColumn::Status)),
    ("Assigned Members", Some(SortColumn::AssignedMembers)),
    ("Due Date", Some(SortColumn::DueDate)),
    ("Is Assigned", Some(SortColumn::IsAssigned)),
    ("Estimated Hours", Some(SortColumn::EstimatedHours)),
    ("Priority", Some(SortColumn::Priority)),
    ("Created On", Some(SortColumn::CreatedOn)),
    ("Actions", None),
];

/// Applies drag results from the displayed page to the canonical rows
#[derive(Clone, Copy)]
struct RowReorder {
    grid: GridContext,
    rows: Signal<Vec<Row>>,
    view: Memo<GridView>,
    set_rows: Callback<Vec<Row>>,
}

impl ReorderListener for RowReorder {
    fn on_reorder_complete(&self, source_index: usize, destination_index: Option<usize>) {
        let state = self.grid.state.get_untracked();
        let updated = self.view.with_untracked(|view| {
            self.rows
                .with_untracked(|rows| state.reorder(rows, view, source_index, destination_index))
        });
        if let Some(updated) = updated {
            log::info!("[DND] reorder {} -> {:?}", source_index, destination_index);
            self.set_rows.run(updated);
        }
    }
}

/// Task grid
#[component]
pub fn TaskTable(
    #[prop(into)] rows: Signal<Vec<Row>>,
    #[prop(into)] current_page: Signal<usize>,
    items_per_page: usize,
    #[prop(into)] delete_row: Callback<RowId>,
    #[prop(into)] edit_row: Callback<RowId>,
    #[prop(into)] set_current_page: Callback<usize>,
    #[prop(into)] set_modal_open: Callback<bool>,
    #[prop(into)] set_rows: Callback<Vec<Row>>,
) -> impl IntoView {
    let grid = use_grid();
    let config = grid.config();

    // Dropdown choices follow the full row collection only
    let options = Memo::new(move |_| rows.with(|r| FilterOptions::from_rows(r)));

    // Untracked snapshot with the owner's page and this table's page size
    let page_state = move || {
        let mut state = grid.state.get_untracked();
        state.current_page = current_page.get_untracked();
        state.items_per_page = items_per_page;
        state
    };

    let grid_view = Memo::new(move |_| {
        let mut state = grid.state.get();
        state.current_page = current_page.get();
        state.items_per_page = items_per_page;
        rows.with(|r| state.view(r, &config))
    });

    // Keep the page in range when filtering shrinks the result
    Effect::new(move |_| {
        let filtered_count = grid_view.with(|v| v.filtered_count);
        let mut state = page_state();
        if state.reclamp(filtered_count) {
            set_current_page.run(state.current_page);
        }
    });

    let go_to_page = move |target: usize| {
        let filtered_count = grid_view.with_untracked(|v| v.filtered_count);
        let mut state = page_state();
        if state.go_to_page(target, filtered_count) {
            set_current_page.run(state.current_page);
        }
    };

    let can_reorder = Signal::derive(move || grid.state.with(|s| s.can_reorder()));

    let dnd = create_dnd_signals();
    let reorder = RowReorder { grid, rows, view: grid_view, set_rows };
    bind_global_mouseup(dnd, move |source, destination| {
        reorder.on_reorder_complete(source, destination)
    });

    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead>
                    <tr>
                        <th colspan="13">
                            <div class="table-controls">
                                <button class="btn-add" on:click=move |_| set_modal_open.run(true)>
                                    "Add"
                                </button>
                            </div>
                        </th>
                    </tr>
                    <tr>
                        {COLUMNS.iter().map(|(label, column)| {
                            let label = *label;
                            match *column {
                                Some(column) => view! {
                                    <th class="sortable" on:click=move |_| grid.toggle_sort(column)>
                                        {label}
                                        <span class="sort-indicator">
                                            {move || grid.state.with(|s| s.sort.indicator(column))}
                                        </span>
                                    </th>
                                }.into_any(),
                                None => view! { <th>{label}</th> }.into_any(),
                            }
                        }).collect_view()}
                    </tr>
                    <FilterRow options=options />
                </thead>
                <tbody on:mouseleave=make_on_mouseleave(dnd)>
                    <For
                        each=move || grid_view.get().rows
                        key=|row| row.clone()
                        children=move |row| view! {
                            <TaskRow
                                row=row
                                dnd=dnd
                                can_reorder=can_reorder
                                delete_row=delete_row
                                edit_row=edit_row
                            />
                        }
                    />
                </tbody>
            </table>

            <Show when=move || grid_view.with(|v| v.filtered_count == 0)>
                <p class="empty-state">"No tasks match the current filters."</p>
            </Show>

            <PaginationBar
                current_page=Signal::derive(move || grid_view.with(|v| v.page))
                total_pages=Signal::derive(move || grid_view.with(|v| v.total_pages))
                on_page=go_to_page
            />
        </div>
    }
}

/// One rendered grid row
#[component]
fn TaskRow(
    row: RowView,
    dnd: DndSignals,
    can_reorder: Signal<bool>,
    delete_row: Callback<RowId>,
    edit_row: Callback<RowId>,
) -> impl IntoView {
    let index = row.display_index;
    let delete_id = row.id.clone();
    let edit_id = row.id.clone();

    let on_mousedown = make_on_mousedown(dnd, index);
    let on_mouseenter = make_on_row_mouseenter(dnd, index);

    let row_class = move || {
        let mut c = String::from("task-row");
        if dnd.is_dragging(index) { c.push_str(" dragging"); }
        if dnd.is_drop_target(index) && !dnd.is_dragging(index) { c.push_str(" drop-target"); }
        c
    };
    let handle_class = move || {
        if can_reorder.get() { "drag-handle" } else { "drag-handle disabled" }
    };

    view! {
        <tr class=row_class on:mouseenter=on_mouseenter>
            <td>
                <div
                    class=handle_class
                    title=move || if can_reorder.get() { "Drag to reorder" } else { "Clear sorting to reorder" }
                    on:mousedown=move |ev| {
                        if can_reorder.get_untracked() {
                            on_mousedown(ev);
                        }
                    }
                >
                    "≡"
                </div>
            </td>
            <td>{row.ordinal}</td>
            <td>{row.serial_no}</td>
            <td class="expand">{row.description}</td>
            <td>{row.id.to_string()}</td>
            <td>
                <span class=format!("label {}", row.status_class)>{row.status}</span>
            </td>
            <td class=row.member_classes>{row.members}</td>
            <td>{row.due_date}</td>
            <td>
                <span class=format!("label {}", row.is_assigned_class)>{row.is_assigned_label}</span>
            </td>
            <td>{row.estimated_hours}</td>
            <td>
                <span class=format!("label {}", row.priority_class)>{row.priority_label}</span>
            </td>
            <td>{row.created_on}</td>
            <td class="actions">
                <DeleteConfirmButton on_confirm=move |_: ()| delete_row.run(delete_id.clone()) />
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| {
                        if !dnd.drag_just_ended_read.get_untracked() {
                            edit_row.run(edit_id.clone());
                        }
                    }
                >
                    "✎"
                </button>
            </td>
        </tr>
    }
}
