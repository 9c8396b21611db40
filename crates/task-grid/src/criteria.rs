//! Filter Criteria
//!
//! One input string per filterable column. An empty string places no
//! constraint on that column.

/// Filterable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
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

impl FilterField {
    pub const ALL: [FilterField; 10] = [
        FilterField::SerialNo,
        FilterField::Description,
        FilterField::Id,
        FilterField::Status,
        FilterField::AssignedMembers,
        FilterField::DueDate,
        FilterField::IsAssigned,
        FilterField::EstimatedHours,
        FilterField::Priority,
        FilterField::CreatedOn,
    ];
}

/// Current filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub serial_no: String,
    pub description: String,
    pub id: String,
    pub status: String,
    pub assigned_members: String,
    pub due_date: String,
    pub is_assigned: String,
    pub estimated_hours: String,
    pub priority: String,
    pub created_on: String,
}

impl FilterCriteria {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::SerialNo => &self.serial_no,
            FilterField::Description => &self.description,
            FilterField::Id => &self.id,
            FilterField::Status => &self.status,
            FilterField::AssignedMembers => &self.assigned_members,
            FilterField::DueDate => &self.due_date,
            FilterField::IsAssigned => &self.is_assigned,
            FilterField::EstimatedHours => &self.estimated_hours,
            FilterField::Priority => &self.priority,
            FilterField::CreatedOn => &self.created_on,
        }
    }

    fn slot(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::SerialNo => &mut self.serial_no,
            FilterField::Description => &mut self.description,
            FilterField::Id => &mut self.id,
            FilterField::Status => &mut self.status,
            FilterField::AssignedMembers => &mut self.assigned_members,
            FilterField::DueDate => &mut self.due_date,
            FilterField::IsAssigned => &mut self.is_assigned,
            FilterField::EstimatedHours => &mut self.estimated_hours,
            FilterField::Priority => &mut self.priority,
            FilterField::CreatedOn => &mut self.created_on,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Reset every criterion to empty (the "Clear" control)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when at least one column is constrained
    pub fn is_active(&self) -> bool {
        FilterField::ALL.iter().any(|f| !self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut criteria = FilterCriteria::default();
        assert!(!criteria.is_active());

        criteria.set(FilterField::Priority, "high");
        assert_eq!(criteria.get(FilterField::Priority), "high");
        assert!(criteria.is_active());

        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_every_field_addressable() {
        let mut criteria = FilterCriteria::default();
        for (i, field) in FilterField::ALL.iter().enumerate() {
            criteria.set(*field, i.to_string());
        }
        for (i, field) in FilterField::ALL.iter().enumerate() {
            assert_eq!(criteria.get(*field), i.to_string());
        }
    }
}
