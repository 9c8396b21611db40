//! Bundled Data
//!
//! Initial rows and grid configuration compiled into the app.

use task_grid::{rows_from_json, GridConfig, Row};

const SEED_ROWS: &str = include_str!("../data/tasks.json");
const GRID_CONFIG: &str = include_str!("../config/grid.json");

pub fn load_rows() -> Vec<Row> {
    match rows_from_json(SEED_ROWS) {
        Ok(rows) => {
            log::info!("[SEED] loaded {} rows", rows.len());
            rows
        }
        Err(e) => {
            log::error!("[SEED] {}, starting empty", e);
            Vec::new()
        }
    }
}

pub fn load_config() -> GridConfig {
    GridConfig::from_json_or_default(GRID_CONFIG)
}
