//! Filter Row Component
//!
//! The header row of per-column filter inputs, plus the Clear control.

use leptos::prelude::*;
use task_grid::{FilterField, FilterOptions};

use crate::context::use_grid;

/// Free-text, number or date filter input
#[component]
fn InputFilter(
    field: FilterField,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let grid = use_grid();
    view! {
        <th>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || grid.criterion(field)
                on:input=move |ev| grid.set_criterion(field, event_target_value(&ev))
            />
        </th>
    }
}

/// Dropdown filter with an "All" choice that clears the criterion
#[component]
fn SelectFilter(
    field: FilterField,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let grid = use_grid();
    view! {
        <th>
            <select
                prop:value=move || grid.criterion(field)
                on:change=move |ev| grid.set_criterion(field, event_target_value(&ev))
            >
                <option value="">"All"</option>
                <For
                    each=move || options.get()
                    key=|(value, _)| value.clone()
                    children=move |(value, label)| {
                        let selected_value = value.clone();
                        view! {
                            <option
                                value=value
                                selected=move || grid.criterion(field) == selected_value
                            >
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </th>
    }
}

/// Filter inputs, one cell per grid column
#[component]
pub fn FilterRow(options: Memo<FilterOptions>) -> impl IntoView {
    let grid = use_grid();

    let id_options = Signal::derive(move || {
        options.with(|o| o.ids.iter().map(|id| (id.to_string(), id.to_string())).collect::<Vec<_>>())
    });
    let member_options = Signal::derive(move || {
        options.with(|o| o.members.iter().map(|m| (m.clone(), m.clone())).collect::<Vec<_>>())
    });
    let status_options = Signal::derive(FilterOptions::statuses);
    let priority_options = Signal::derive(FilterOptions::priorities);
    let is_assigned_options = Signal::derive(|| {
        FilterOptions::is_assigned()
            .into_iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <tr class="filter-row">
            // Order and row number carry no filter
            <th></th>
            <th></th>
            <InputFilter field=FilterField::SerialNo placeholder="Filter Serial No" />
            <InputFilter field=FilterField::Description placeholder="Filter Task Title" />
            <SelectFilter field=FilterField::Id options=id_options />
            <SelectFilter field=FilterField::Status options=status_options />
            <SelectFilter field=FilterField::AssignedMembers options=member_options />
            <InputFilter field=FilterField::DueDate input_type="date" placeholder="Filter Due Date" />
            <SelectFilter field=FilterField::IsAssigned options=is_assigned_options />
            <InputFilter field=FilterField::EstimatedHours input_type="number" placeholder="Filter Hours" />
            <SelectFilter field=FilterField::Priority options=priority_options />
            <InputFilter field=FilterField::CreatedOn input_type="date" placeholder="Filter Created On" />
            <th>
                <button class="clear-btn" on:click=move |_| grid.clear_criteria()>"Clear"</button>
            </th>
        </tr>
    }
}
