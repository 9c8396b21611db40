//! Row Presentation Mapper
//!
//! Pure mappings from raw field values to display strings and style
//! classes. Every mapping has a fallback, so no row can fail to render.

use crate::config::GridConfig;
use crate::dates::format_date;
use crate::filter::capitalize;
use crate::pagination::display_ordinal;
use crate::row::{BoolLike, Priority, Row, RowId, Status};

pub fn status_class(status: &Status) -> &'static str {
    match status {
        Status::InProgress => "status-inProgress",
        Status::Completed => "status-completed",
        Status::Uninitiated | Status::Other(_) => "status-uninitiated",
    }
}

pub fn priority_class(priority: &Priority) -> &'static str {
    match priority {
        Priority::Medium => "priority-medium",
        Priority::High => "priority-high",
        Priority::Low | Priority::Other(_) => "priority-low",
    }
}

pub fn priority_label(priority: &Priority) -> String {
    capitalize(priority.as_str())
}

pub fn is_assigned_class(value: &BoolLike) -> &'static str {
    if value.is_true() { "is-assigned-yes" } else { "is-assigned-no" }
}

pub fn is_assigned_label(value: &BoolLike) -> &'static str {
    if value.is_true() { "Yes" } else { "No" }
}

/// Comma-joined member list, or "None" when absent
pub fn members_display(members: Option<&[String]>) -> String {
    match members {
        Some(list) => list.join(", "),
        None => "None".to_string(),
    }
}

/// One `assigned-member-*` tag per recognized member
pub fn member_classes(members: Option<&[String]>, known: &[String]) -> String {
    let Some(list) = members else {
        return String::new();
    };
    list.iter()
        .filter(|m| known.contains(m))
        .map(|m| format!("assigned-member-{}", m))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything needed to render one grid row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowView {
    pub id: RowId,
    /// Index within the displayed page
    pub display_index: usize,
    pub ordinal: usize,
    pub serial_no: String,
    pub description: String,
    pub status: String,
    pub status_class: &'static str,
    pub members: String,
    pub member_classes: String,
    pub due_date: String,
    pub is_assigned_label: &'static str,
    pub is_assigned_class: &'static str,
    pub estimated_hours: String,
    pub priority_label: String,
    pub priority_class: &'static str,
    pub created_on: String,
}

impl RowView {
    pub fn project(row: &Row, idx: usize, page: usize, items_per_page: usize, config: &GridConfig) -> Self {
        let members = row.assigned_members.as_deref();
        Self {
            id: row.id.clone(),
            display_index: idx,
            ordinal: display_ordinal(idx, page, items_per_page),
            serial_no: row.serial_no.clone(),
            description: row.description.clone(),
            status: row.status.as_str().to_string(),
            status_class: status_class(&row.status),
            members: members_display(members),
            member_classes: member_classes(members, &config.known_members),
            due_date: format_date(&row.due_date, &config.date_format),
            is_assigned_label: is_assigned_label(&row.is_assigned),
            is_assigned_class: is_assigned_class(&row.is_assigned),
            estimated_hours: row.estimated_hours_text(),
            priority_label: priority_label(&row.priority),
            priority_class: priority_class(&row.priority),
            created_on: format_date(&row.created_on, &config.date_format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_fallback() {
        assert_eq!(status_class(&Status::Completed), "status-completed");
        assert_eq!(status_class(&Status::Other("blocked".into())), "status-uninitiated");
    }

    #[test]
    fn test_priority() {
        assert_eq!(priority_class(&Priority::High), "priority-high");
        assert_eq!(priority_class(&Priority::Other("urgent".into())), "priority-low");
        assert_eq!(priority_label(&Priority::Medium), "Medium");
        assert_eq!(priority_label(&Priority::Other("urgent".into())), "Urgent");
        assert_eq!(priority_label(&Priority::Other(String::new())), "");
    }

    #[test]
    fn test_is_assigned() {
        let no = BoolLike::Text("false".into());
        assert_eq!(is_assigned_label(&no), "No");
        assert_eq!(is_assigned_class(&no), "is-assigned-no");
        assert_eq!(is_assigned_label(&BoolLike::Bool(true)), "Yes");
        assert_eq!(is_assigned_class(&BoolLike::Bool(true)), "is-assigned-yes");
    }

    #[test]
    fn test_members_from_joined_string() {
        let row: Row = serde_json::from_str(
            r#"{"id": "a", "serialNo": "1", "assignedMembers": "teamMember1, teamMember2, guest"}"#,
        )
        .unwrap();
        let known = GridConfig::default().known_members;
        let members = row.assigned_members.as_deref();
        assert_eq!(members_display(members), "teamMember1, teamMember2, guest");
        assert_eq!(
            member_classes(members, &known),
            "assigned-member-teamMember1 assigned-member-teamMember2"
        );
    }

    #[test]
    fn test_members_absent() {
        assert_eq!(members_display(None), "None");
        assert_eq!(member_classes(None, &GridConfig::default().known_members), "");
    }

    #[test]
    fn test_project_row() {
        let mut row = Row::new("T-9", "4", "Ship it");
        row.status = Status::InProgress;
        row.due_date = "2024-03-01".into();
        row.created_on = "bogus".into();
        row.estimated_hours = 3.0;
        let view = RowView::project(&row, 1, 2, 5, &GridConfig::default());

        assert_eq!(view.ordinal, 7);
        assert_eq!(view.display_index, 1);
        assert_eq!(view.status, "inProgress");
        assert_eq!(view.status_class, "status-inProgress");
        assert_eq!(view.due_date, "3/1/2024");
        assert_eq!(view.created_on, "Invalid Date");
        assert_eq!(view.estimated_hours, "3");
        assert_eq!(view.members, "None");
        assert_eq!(view.priority_label, "Low");
    }
}
