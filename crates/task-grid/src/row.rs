//! Row Model
//!
//! Task records as supplied by the row owner. Field shapes that arrive
//! loosely typed (ids as numbers or strings, members as a list or a
//! comma-joined string) are normalized here so the rest of the pipeline
//! only sees one representation.

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// Stable row identifier; accepts JSON strings or numbers
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Scalar", into = "String")]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Scalar> for RowId {
    fn from(value: Scalar) -> Self {
        RowId(value.into_text())
    }
}

impl From<RowId> for String {
    fn from(id: RowId) -> Self {
        id.0
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        RowId(id.to_string())
    }
}

/// Task status
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Uninitiated,
    InProgress,
    Completed,
    /// Unrecognized raw value, kept verbatim for display and filtering
    Other(String),
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Uninitiated, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &str {
        match self {
            Status::Uninitiated => "uninitiated",
            Status::InProgress => "inProgress",
            Status::Completed => "completed",
            Status::Other(raw) => raw,
        }
    }

    /// Sort rank; unknown values sort after the known ones
    pub fn rank(&self) -> u8 {
        match self {
            Status::Uninitiated => 0,
            Status::InProgress => 1,
            Status::Completed => 2,
            Status::Other(_) => 3,
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "uninitiated" => Status::Uninitiated,
            "inProgress" => Status::InProgress,
            "completed" => Status::Completed,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

/// Task priority
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Other(String),
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Other(raw) => raw,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
            Priority::Other(_) => 3,
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Other(s),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

/// Boolean or boolean-like string ("true"/"false")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolLike {
    Bool(bool),
    Text(String),
}

impl Default for BoolLike {
    fn default() -> Self {
        BoolLike::Bool(false)
    }
}

impl BoolLike {
    /// Stringified value, as compared by the is-assigned filter
    pub fn as_text(&self) -> &str {
        match self {
            BoolLike::Bool(true) => "true",
            BoolLike::Bool(false) => "false",
            BoolLike::Text(s) => s,
        }
    }

    /// Only `true` and `"true"` count as set
    pub fn is_true(&self) -> bool {
        matches!(self, BoolLike::Bool(true)) || matches!(self, BoolLike::Text(s) if s == "true")
    }
}

/// A task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: RowId,
    #[serde(deserialize_with = "scalar_text")]
    pub serial_no: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "members")]
    pub assigned_members: Option<Vec<String>>,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub is_assigned: BoolLike,
    #[serde(default, deserialize_with = "hours")]
    pub estimated_hours: f64,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub created_on: String,
}

impl Row {
    /// Minimal row; remaining fields take their defaults
    pub fn new(id: impl Into<String>, serial_no: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: RowId::new(id),
            serial_no: serial_no.into(),
            description: description.into(),
            status: Status::default(),
            assigned_members: None,
            due_date: String::new(),
            is_assigned: BoolLike::default(),
            estimated_hours: 0.0,
            priority: Priority::default(),
            created_on: String::new(),
        }
    }

    pub fn estimated_hours_text(&self) -> String {
        number_text(self.estimated_hours)
    }

    /// Members joined for display and filtering
    pub fn members_joined(&self) -> Option<String> {
        self.assigned_members.as_ref().map(|m| m.join(", "))
    }
}

/// Parse a JSON array of rows
pub fn rows_from_json(json: &str) -> crate::GridResult<Vec<Row>> {
    let rows: Vec<Row> = serde_json::from_str(json)?;
    log::debug!("[ROWS] parsed {} rows", rows.len());
    Ok(rows)
}

/// Format a number the way a JS string conversion would (`5`, `2.5`)
pub fn number_text(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Any JSON scalar, stringified
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => number_text(f),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Scalar::deserialize(d).map(Scalar::into_text)
}

fn hours<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    match Scalar::deserialize(d)? {
        Scalar::Int(i) => Ok(i as f64),
        Scalar::Float(f) => Ok(f),
        Scalar::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("estimatedHours is not a number: {s:?}"))),
        Scalar::Bool(b) => Err(serde::de::Error::custom(format!("estimatedHours is not a number: {b}"))),
    }
}

/// Wire shapes accepted for `assignedMembers`
#[derive(Deserialize)]
#[serde(untagged)]
enum MembersRepr {
    List(Vec<String>),
    Joined(String),
    Unrecognized(IgnoredAny),
}

impl MembersRepr {
    fn normalize(self) -> Option<Vec<String>> {
        match self {
            MembersRepr::List(list) => Some(list.into_iter().map(|m| m.trim().to_string()).collect()),
            MembersRepr::Joined(joined) => {
                let names: Vec<String> = joined
                    .split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .collect();
                // Only separators or whitespace means nobody is assigned
                if names.is_empty() { None } else { Some(names) }
            }
            MembersRepr::Unrecognized(_) => None,
        }
    }
}

fn members<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
    Ok(Option::<MembersRepr>::deserialize(d)?.and_then(MembersRepr::normalize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_row() {
        let row: Row = serde_json::from_str(
            r#"{
                "id": 7, "serialNo": 3, "description": "Write docs",
                "status": "inProgress", "assignedMembers": ["teamMember1", "teamMember2"],
                "dueDate": "2024-03-01", "isAssigned": "true", "estimatedHours": 2.5,
                "priority": "high", "createdOn": "2024-02-01"
            }"#,
        )
        .unwrap();

        assert_eq!(row.id, RowId::new("7"));
        assert_eq!(row.serial_no, "3");
        assert_eq!(row.status, Status::InProgress);
        assert_eq!(row.assigned_members, Some(vec!["teamMember1".into(), "teamMember2".into()]));
        assert_eq!(row.is_assigned, BoolLike::Text("true".into()));
        assert_eq!(row.estimated_hours_text(), "2.5");
        assert_eq!(row.priority, Priority::High);
    }

    #[test]
    fn test_joined_members_normalized() {
        let row: Row = serde_json::from_str(
            r#"{"id": "a", "serialNo": "1", "assignedMembers": "teamMember1, teamMember2"}"#,
        )
        .unwrap();
        assert_eq!(row.assigned_members, Some(vec!["teamMember1".into(), "teamMember2".into()]));
        assert_eq!(row.members_joined().as_deref(), Some("teamMember1, teamMember2"));
    }

    #[test]
    fn test_absent_or_odd_members() {
        let absent: Row = serde_json::from_str(r#"{"id": "a", "serialNo": "1"}"#).unwrap();
        assert!(absent.assigned_members.is_none());

        let null: Row = serde_json::from_str(r#"{"id": "a", "serialNo": "1", "assignedMembers": null}"#).unwrap();
        assert!(null.assigned_members.is_none());

        let empty: Row = serde_json::from_str(r#"{"id": "a", "serialNo": "1", "assignedMembers": ""}"#).unwrap();
        assert!(empty.assigned_members.is_none());

        let number: Row = serde_json::from_str(r#"{"id": "a", "serialNo": "1", "assignedMembers": 42}"#).unwrap();
        assert!(number.assigned_members.is_none());

        let separators: Row =
            serde_json::from_str(r#"{"id": "a", "serialNo": "1", "assignedMembers": " , "}"#).unwrap();
        assert!(separators.assigned_members.is_none());
        assert_eq!(crate::members_display(separators.assigned_members.as_deref()), "None");
    }

    #[test]
    fn test_unknown_enums_kept() {
        let row: Row = serde_json::from_str(
            r#"{"id": "a", "serialNo": "1", "status": "blocked", "priority": "urgent"}"#,
        )
        .unwrap();
        assert_eq!(row.status, Status::Other("blocked".into()));
        assert_eq!(row.status.as_str(), "blocked");
        assert_eq!(row.priority.as_str(), "urgent");
    }

    #[test]
    fn test_number_text() {
        assert_eq!(number_text(5.0), "5");
        assert_eq!(number_text(2.25), "2.25");
        assert_eq!(number_text(-0.0), "0");
    }

    #[test]
    fn test_bool_like() {
        assert!(BoolLike::Bool(true).is_true());
        assert!(BoolLike::Text("true".into()).is_true());
        assert!(!BoolLike::Text("TRUE".into()).is_true());
        assert!(!BoolLike::Text("false".into()).is_true());
        assert_eq!(BoolLike::Bool(false).as_text(), "false");
    }

    #[test]
    fn test_rows_from_json_error() {
        let err = rows_from_json(r#"[{"id": "a", "serialNo": "1", "estimatedHours": "lots"}]"#).unwrap_err();
        assert!(matches!(err, crate::GridError::Parse(_)));
    }
}
