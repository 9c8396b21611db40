//! Single-Column Sorting
//!
//! Applied after filtering and before pagination. Sorting is stable, so
//! rows that compare equal keep their canonical relative order.

use std::cmp::Ordering;

use crate::dates::parse_date;
use crate::row::Row;

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    SerialNo,
    Description,
    Id,
    Status,
    AssignedMembers,
    DueDate,
    IsAssigned,
    EstimatedHours,
    Priority,
    CreatedOn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Active sort; `column == None` keeps canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    /// A new column starts ascending; the active column flips direction
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.flip();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Asc;
        }
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some()
    }

    /// Arrow for a header cell, empty when that column is not sorted
    pub fn indicator(&self, column: SortColumn) -> &'static str {
        if self.column == Some(column) { self.direction.arrow() } else { "" }
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Numeric when both sides parse, text otherwise
fn numeric_or_text_cmp(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => text_cmp(a, b),
    }
}

/// Chronological; unparsable dates after valid ones
fn date_cmp(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &Row, b: &Row, column: SortColumn) -> Ordering {
    match column {
        SortColumn::SerialNo => numeric_or_text_cmp(&a.serial_no, &b.serial_no),
        SortColumn::Description => text_cmp(&a.description, &b.description),
        SortColumn::Id => numeric_or_text_cmp(a.id.as_str(), b.id.as_str()),
        SortColumn::Status => a
            .status
            .rank()
            .cmp(&b.status.rank())
            .then_with(|| text_cmp(a.status.as_str(), b.status.as_str())),
        SortColumn::AssignedMembers => text_cmp(
            &a.members_joined().unwrap_or_default(),
            &b.members_joined().unwrap_or_default(),
        ),
        SortColumn::DueDate => date_cmp(&a.due_date, &b.due_date),
        SortColumn::IsAssigned => a.is_assigned.is_true().cmp(&b.is_assigned.is_true()),
        SortColumn::EstimatedHours => a
            .estimated_hours
            .partial_cmp(&b.estimated_hours)
            .unwrap_or(Ordering::Equal),
        SortColumn::Priority => a
            .priority
            .rank()
            .cmp(&b.priority.rank())
            .then_with(|| text_cmp(a.priority.as_str(), b.priority.as_str())),
        SortColumn::CreatedOn => date_cmp(&a.created_on, &b.created_on),
    }
}

/// Rows ordered by the active sort column
pub fn sort_rows(rows: &[Row], sort: &SortState) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    if let Some(column) = sort.column {
        sorted.sort_by(|a, b| {
            let ord = compare(a, b, column);
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        log::debug!("[SORT] {} rows by {:?} {:?}", sorted.len(), column, sort.direction);
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{Priority, Status};

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_toggle() {
        let mut sort = SortState::default();
        assert!(!sort.is_active());

        sort.toggle(SortColumn::Priority);
        assert_eq!(sort.column, Some(SortColumn::Priority));
        assert_eq!(sort.direction, SortDirection::Asc);
        assert_eq!(sort.indicator(SortColumn::Priority), "▲");
        assert_eq!(sort.indicator(SortColumn::Status), "");

        sort.toggle(SortColumn::Priority);
        assert_eq!(sort.direction, SortDirection::Desc);

        sort.toggle(SortColumn::DueDate);
        assert_eq!(sort.column, Some(SortColumn::DueDate));
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_no_column_keeps_order() {
        let rows = vec![Row::new("B", "2", "b"), Row::new("A", "1", "a")];
        assert_eq!(sort_rows(&rows, &SortState::default()), rows);
    }

    #[test]
    fn test_serial_numeric() {
        let rows = vec![Row::new("a", "10", ""), Row::new("b", "9", ""), Row::new("c", "100", "")];
        let sort = SortState { column: Some(SortColumn::SerialNo), direction: SortDirection::Asc };
        assert_eq!(ids(&sort_rows(&rows, &sort)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_priority_rank_desc() {
        let mut low = Row::new("low", "1", "");
        low.priority = Priority::Low;
        let mut high = Row::new("high", "2", "");
        high.priority = Priority::High;
        let mut medium = Row::new("medium", "3", "");
        medium.priority = Priority::Medium;
        let sort = SortState { column: Some(SortColumn::Priority), direction: SortDirection::Desc };
        assert_eq!(ids(&sort_rows(&[low, high, medium], &sort)), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_dates_invalid_last_and_stable() {
        let mut a = Row::new("a", "1", "");
        a.due_date = "garbage".into();
        let mut b = Row::new("b", "2", "");
        b.due_date = "2024-05-01".into();
        let mut c = Row::new("c", "3", "");
        c.due_date = "2024-01-01".into();
        let mut d = Row::new("d", "4", "");
        d.due_date = "2024-05-01T08:00:00".into();
        let sort = SortState { column: Some(SortColumn::DueDate), direction: SortDirection::Asc };
        assert_eq!(ids(&sort_rows(&[a, b, c, d], &sort)), vec!["c", "b", "d", "a"]);
    }

    #[test]
    fn test_status_unknown_last() {
        let mut a = Row::new("a", "1", "");
        a.status = Status::Other("blocked".into());
        let mut b = Row::new("b", "2", "");
        b.status = Status::Completed;
        let mut c = Row::new("c", "3", "");
        c.status = Status::Uninitiated;
        let sort = SortState { column: Some(SortColumn::Status), direction: SortDirection::Asc };
        assert_eq!(ids(&sort_rows(&[a, b, c], &sort)), vec!["c", "b", "a"]);
    }
}
