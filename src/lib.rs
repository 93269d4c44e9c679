//! Grid state core for the tile and color design editor.
//!
//! The page owns rendering, asset fetching and downloads; this crate owns the
//! occupancy grid, the undo history and the JSON import/export format.

use log::LevelFilter;
use wasm_bindgen::prelude::*;

pub mod constants;
pub mod data;
pub mod dependency;
pub mod error;
pub mod logic;
pub mod service;
pub mod types;

pub use dependency::{GridStore, HistoryLog};
pub use error::GridError;
pub use logic::serializer;
pub use logic::EditorLogic;
pub use service::TileEditor;
pub use types::{EditorConfig, ExportEnvelope, ImportReport, PlacementRecord, Rotation};

/// Routes `log` output to the browser console when the module loads
#[wasm_bindgen(start)]
pub fn start() {
    dependency::init_logging(LevelFilter::Info);
}

/// Changes the console log level: "error", "warn", "info", "debug" or "trace"
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match level.parse::<LevelFilter>() {
        Ok(filter) => {
            log::set_max_level(filter);
            true
        }
        Err(_) => false,
    }
}
