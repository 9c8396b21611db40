//! Frontend Models
//!
//! Form-side representation of a task, converted to and from grid rows.

use task_grid::dates::parse_date;
use task_grid::{number_text, BoolLike, GridError, GridResult, Priority, Row, Status};

/// Editable fields of a task as entered in the add/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub description: String,
    pub status: String,
    /// Comma-separated member names
    pub members: String,
    pub due_date: String,
    pub is_assigned: bool,
    pub estimated_hours: String,
    pub priority: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            status: Status::Uninitiated.as_str().to_string(),
            members: String::new(),
            due_date: String::new(),
            is_assigned: false,
            estimated_hours: "0".to_string(),
            priority: Priority::Low.as_str().to_string(),
        }
    }
}

impl TaskDraft {
    pub fn from_row(row: &Row) -> Self {
        Self {
            description: row.description.clone(),
            status: row.status.as_str().to_string(),
            members: row.members_joined().unwrap_or_default(),
            // Date inputs want YYYY-MM-DD; unparsable text is carried as-is
            due_date: parse_date(&row.due_date)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| row.due_date.clone()),
            is_assigned: row.is_assigned.is_true(),
            estimated_hours: number_text(row.estimated_hours),
            priority: row.priority.as_str().to_string(),
        }
    }

    /// Validate and write the draft onto `row`, keeping its id and serial number
    pub fn apply(&self, mut row: Row) -> GridResult<Row> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(GridError::InvalidInput("task title is required".to_string()));
        }

        let hours: f64 = self
            .estimated_hours
            .trim()
            .parse()
            .map_err(|_| GridError::InvalidInput(format!("estimated hours {:?} is not a number", self.estimated_hours)))?;
        if !hours.is_finite() || hours < 0.0 {
            return Err(GridError::InvalidInput("estimated hours must be zero or more".to_string()));
        }

        let due_date = self.due_date.trim();
        let untouched = due_date == row.due_date.trim();
        if !untouched && !due_date.is_empty() && parse_date(due_date).is_none() {
            return Err(GridError::InvalidInput(format!("due date {:?} is not a date", due_date)));
        }

        let members: Vec<String> = self
            .members
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();

        row.description = description.to_string();
        row.status = Status::from(self.status.clone());
        row.assigned_members = if members.is_empty() { None } else { Some(members) };
        if !untouched {
            row.due_date = due_date.to_string();
        }
        row.is_assigned = BoolLike::Bool(self.is_assigned);
        row.estimated_hours = hours;
        row.priority = Priority::from(self.priority.clone());
        Ok(row)
    }
}
