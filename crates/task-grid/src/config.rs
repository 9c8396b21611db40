//! Grid Configuration

use serde::{Deserialize, Serialize};

use crate::dates::{is_valid_pattern, DEFAULT_DATE_FORMAT};
use crate::GridResult;

/// Display and paging settings for the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Rows per page
    pub items_per_page: usize,
    /// Members that get their own `assigned-member-*` style tag
    pub known_members: Vec<String>,
    /// chrono pattern for calendar dates
    pub date_format: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            items_per_page: 5,
            known_members: (1..=4).map(|n| format!("teamMember{}", n)).collect(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl GridConfig {
    pub fn from_json(json: &str) -> GridResult<Self> {
        let mut config: GridConfig = serde_json::from_str(json)?;
        if config.items_per_page == 0 {
            log::warn!("[CONFIG] itemsPerPage of 0 is not usable, using 1");
            config.items_per_page = 1;
        }
        if !is_valid_pattern(&config.date_format) {
            log::warn!("[CONFIG] dateFormat {:?} is not a valid pattern, using {:?}", config.date_format, DEFAULT_DATE_FORMAT);
            config.date_format = DEFAULT_DATE_FORMAT.to_string();
        }
        Ok(config)
    }

    /// Parse configuration, logging and falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|e| {
            log::warn!("[CONFIG] {}, using defaults", e);
            Self::default()
        })
    }
}
