//! Filter Engine
//!
//! Evaluates [`FilterCriteria`] against rows. Pure and order preserving:
//! the result is always a subsequence of the input.

use std::collections::HashSet;

use crate::criteria::FilterCriteria;
use crate::dates::{same_day, DEFAULT_DATE_FORMAT};
use crate::row::{Priority, Row, RowId, Status};

/// Case-insensitive substring test; an empty needle always matches
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Does a single row satisfy every non-empty criterion?
pub fn row_matches(row: &Row, c: &FilterCriteria) -> bool {
    let members_match = if c.assigned_members.is_empty() {
        true
    } else {
        row.members_joined()
            .map(|joined| contains_ci(&joined, &c.assigned_members))
            .unwrap_or(false)
    };

    let due_date_match = c.due_date.is_empty() || same_day(&row.due_date, &c.due_date, DEFAULT_DATE_FORMAT);
    let created_on_match =
        c.created_on.is_empty() || same_day(&row.created_on, &c.created_on, DEFAULT_DATE_FORMAT);

    let is_assigned_match = c.is_assigned.is_empty()
        || row.is_assigned.as_text().to_lowercase() == c.is_assigned.to_lowercase();

    contains_ci(&row.serial_no, &c.serial_no)
        && contains_ci(&row.description, &c.description)
        && contains_ci(row.id.as_str(), &c.id)
        && contains_ci(row.status.as_str(), &c.status)
        && members_match
        && due_date_match
        && is_assigned_match
        && contains_ci(&row.estimated_hours_text(), &c.estimated_hours)
        && contains_ci(row.priority.as_str(), &c.priority)
        && created_on_match
}

/// Rows passing all criteria, in input order
pub fn filter_rows(rows: &[Row], criteria: &FilterCriteria) -> Vec<Row> {
    let filtered: Vec<Row> = rows
        .iter()
        .filter(|row| {
            let keep = row_matches(row, criteria);
            if !keep {
                log::trace!("[FILTER] rejected row {}", row.id);
            }
            keep
        })
        .cloned()
        .collect();
    log::debug!("[FILTER] {} of {} rows pass", filtered.len(), rows.len());
    filtered
}

/// Selectable values for the dropdown filters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    /// Distinct ids, first occurrence wins
    pub ids: Vec<RowId>,
    /// Distinct trimmed member names, first occurrence wins
    pub members: Vec<String>,
}

impl FilterOptions {
    /// Derive option lists from the full (unfiltered) row collection
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut seen_ids = HashSet::new();
        let ids = rows
            .iter()
            .filter(|row| seen_ids.insert(&row.id))
            .map(|row| row.id.clone())
            .collect();

        let mut seen_members = HashSet::new();
        let members = rows
            .iter()
            .filter_map(|row| row.assigned_members.as_ref())
            .flatten()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty() && seen_members.insert(m.to_string()))
            .map(str::to_string)
            .collect();

        Self { ids, members }
    }

    /// Status choices as (value, label)
    pub fn statuses() -> Vec<(String, String)> {
        Status::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), capitalize(s.as_str())))
            .collect()
    }

    /// Priority choices as (value, label)
    pub fn priorities() -> Vec<(String, String)> {
        Priority::ALL
            .iter()
            .map(|p| (p.as_str().to_string(), capitalize(p.as_str())))
            .collect()
    }

    /// Is-assigned choices as (value, label)
    pub fn is_assigned() -> Vec<(&'static str, &'static str)> {
        vec![("true", "Yes"), ("false", "No")]
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
