//! Task Form Modal
//!
//! Add/edit form for a single task. Editing starts from the stored row;
//! adding creates a row at the end of the canonical sequence.

use leptos::prelude::*;
use task_grid::{FilterOptions, GridError, GridResult, Row, RowId};

use crate::models::TaskDraft;
use crate::store::{next_row_id, next_serial_no, store_add_row, store_update_row, use_app_store, AppStateStoreFields};

/// Today's timestamp for new rows
fn created_now() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Modal form for adding or editing a task
#[component]
pub fn TaskModal(
    /// Row being edited; `None` adds a new row
    editing: ReadSignal<Option<RowId>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();

    let initial = editing
        .get_untracked()
        .and_then(|id| store.rows().with_untracked(|rows| rows.iter().find(|r| r.id == id).cloned()))
        .map(|row| TaskDraft::from_row(&row))
        .unwrap_or_default();
    let draft = RwSignal::new(initial);
    let (error, set_error) = signal(None::<String>);

    let save = move || -> GridResult<()> {
        let current = draft.get_untracked();
        match editing.get_untracked() {
            Some(id) => {
                let existing = store
                    .rows()
                    .with_untracked(|rows| rows.iter().find(|r| r.id == id).cloned())
                    .ok_or_else(|| GridError::NotFound(format!("row {}", id)))?;
                store_update_row(&store, current.apply(existing)?);
            }
            None => {
                let (id, serial_no) = store
                    .rows()
                    .with_untracked(|rows| (next_row_id(rows), next_serial_no(rows)));
                let mut row = Row::new(id.as_str(), serial_no, "");
                row.created_on = created_now();
                store_add_row(&store, current.apply(row)?);
            }
        }
        Ok(())
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match save() {
            Ok(()) => {
                set_error.set(None);
                on_close.run(());
            }
            Err(e) => {
                log::warn!("[FORM] {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    let title = if editing.get_untracked().is_some() { "Edit Task" } else { "Add Task" };

    view! {
        <div class="modal-container" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form class="task-form" on:submit=on_submit>
                    <label>
                        "Task Title"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Status"
                        <select
                            prop:value=move || draft.with(|d| d.status.clone())
                            on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                        >
                            {FilterOptions::statuses().into_iter().map(|(value, label)| {
                                let current = value.clone();
                                view! {
                                    <option value=value selected=move || draft.with(|d| d.status == current)>
                                        {label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </label>
                    <label>
                        "Assigned Members"
                        <input
                            type="text"
                            placeholder="teamMember1, teamMember2"
                            prop:value=move || draft.with(|d| d.members.clone())
                            on:input=move |ev| draft.update(|d| d.members = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Due Date"
                        <input
                            type="date"
                            prop:value=move || draft.with(|d| d.due_date.clone())
                            on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
                        />
                    </label>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.is_assigned)
                            on:change=move |ev| draft.update(|d| d.is_assigned = event_target_checked(&ev))
                        />
                        "Is Assigned"
                    </label>
                    <label>
                        "Estimated Hours"
                        <input
                            type="number"
                            min="0"
                            step="0.5"
                            prop:value=move || draft.with(|d| d.estimated_hours.clone())
                            on:input=move |ev| draft.update(|d| d.estimated_hours = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Priority"
                        <select
                            prop:value=move || draft.with(|d| d.priority.clone())
                            on:change=move |ev| draft.update(|d| d.priority = event_target_value(&ev))
                        >
                            {FilterOptions::priorities().into_iter().map(|(value, label)| {
                                let current = value.clone();
                                view! {
                                    <option value=value selected=move || draft.with(|d| d.priority == current)>
                                        {label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </label>

                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-submit">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
