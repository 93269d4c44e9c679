use log::debug;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::GridError;
use crate::logic::EditorLogic;
use crate::types::{Catalog, EditorConfig};

fn js_error(err: GridError) -> JsError {
    JsError::new(&err.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Browser handle for one editing session. Ids returned here are record ids;
/// the page keeps its own id -> element map.
#[wasm_bindgen]
pub struct TileEditor {
    logic: EditorLogic,
}

#[wasm_bindgen]
impl TileEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<TileEditor, JsError> {
        let logic = EditorLogic::new(width, height).map_err(js_error)?;
        Ok(Self { logic })
    }

    /// Accepts a partial `EditorConfig` object; missing fields use the defaults
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Result<TileEditor, JsError> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|err| JsError::new(&format!("invalid config: {}", err)))?
        };
        let logic = EditorLogic::with_config(config).map_err(js_error)?;
        Ok(Self { logic })
    }

    #[wasm_bindgen]
    pub fn select_tile(&mut self, collection: &str, file: &str) {
        self.logic.select_tile(collection, file);
    }

    #[wasm_bindgen]
    pub fn select_color(&mut self, color: &str) {
        self.logic.select_color(color);
    }

    #[wasm_bindgen]
    pub fn rotate(&mut self) -> u32 {
        self.logic.rotate().degrees()
    }

    #[wasm_bindgen]
    pub fn get_rotation(&self) -> u32 {
        self.logic.data().selection().rotation().degrees()
    }

    #[wasm_bindgen]
    pub fn get_active_color(&self) -> String {
        self.logic.data().selection().color().to_string()
    }

    /// Id of the placed record, or undefined when nothing was placed
    #[wasm_bindgen]
    pub fn place_at(&mut self, x: i32, y: i32) -> Option<String> {
        match self.logic.place_at(i64::from(x), i64::from(y)) {
            Ok(placed) => placed.map(|record| record.id),
            Err(err) => {
                debug!("placement ignored: {}", err);
                None
            }
        }
    }

    #[wasm_bindgen]
    pub fn place_at_pixel(&mut self, px: f64, py: f64) -> Option<String> {
        let (x, y) = self.logic.cell_at_pixel(px, py)?;
        self.logic.place_at(x, y).ok().flatten().map(|record| record.id)
    }

    /// Id of the removed record
    #[wasm_bindgen]
    pub fn remove_at(&mut self, x: i32, y: i32) -> Option<String> {
        self.logic
            .remove_at(i64::from(x), i64::from(y))
            .map(|record| record.id)
    }

    #[wasm_bindgen]
    pub fn remove_at_pixel(&mut self, px: f64, py: f64) -> Option<String> {
        let (x, y) = self.logic.cell_at_pixel(px, py)?;
        self.logic.remove_at(x, y).map(|record| record.id)
    }

    /// Id of the record taken off the grid, or undefined when there is nothing to undo
    #[wasm_bindgen]
    pub fn undo(&mut self) -> Option<String> {
        self.logic.undo().ok().map(|record| record.id)
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.logic.reset();
    }

    #[wasm_bindgen]
    pub fn export_json(&mut self) -> Result<String, JsError> {
        self.logic.export_json().map_err(js_error)
    }

    /// Number of tiles placed from the document
    #[wasm_bindgen]
    pub fn import_json(&mut self, json: &str) -> Result<usize, JsError> {
        let report = self.logic.import_json(json).map_err(js_error)?;
        Ok(report.placed)
    }

    #[wasm_bindgen]
    pub fn get_tiles(&self) -> JsValue {
        to_js(&self.logic.tiles())
    }

    #[wasm_bindgen]
    pub fn get_usage(&self) -> JsValue {
        to_js(&self.logic.usage())
    }

    #[wasm_bindgen]
    pub fn get_cell(&self, x: i32, y: i32) -> JsValue {
        match self.logic.get(i64::from(x), i64::from(y)) {
            Some(record) => to_js(record),
            None => JsValue::NULL,
        }
    }

    #[wasm_bindgen]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.logic.data().grid().is_occupied(i64::from(x), i64::from(y))
    }

    /// `[x, y]` of the cell under a pixel offset, or null outside the grid
    #[wasm_bindgen]
    pub fn cell_at_pixel(&self, px: f64, py: f64) -> JsValue {
        match self.logic.cell_at_pixel(px, py) {
            Some(cell) => to_js(&cell),
            None => JsValue::NULL,
        }
    }

    #[wasm_bindgen]
    pub fn get_occupied_count(&self) -> usize {
        self.logic.data().grid().occupied_count()
    }

    #[wasm_bindgen]
    pub fn get_width(&self) -> usize {
        self.logic.data().grid().width()
    }

    #[wasm_bindgen]
    pub fn get_height(&self) -> usize {
        self.logic.data().grid().height()
    }

    #[wasm_bindgen]
    pub fn get_cell_size(&self) -> u32 {
        self.logic.cell_size()
    }

    #[wasm_bindgen]
    pub fn set_cell_size(&mut self, cell_size: u32) -> Result<(), JsError> {
        self.logic.set_cell_size(cell_size).map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn get_show_grid_lines(&self) -> bool {
        self.logic.show_grid_lines()
    }

    #[wasm_bindgen]
    pub fn toggle_grid_lines(&mut self) -> bool {
        self.logic.toggle_grid_lines()
    }

    #[wasm_bindgen]
    pub fn can_undo(&self) -> bool {
        self.logic.can_undo()
    }

    #[wasm_bindgen]
    pub fn get_history_len(&self) -> usize {
        self.logic.history_len()
    }

    /// Contents for `log.txt`
    #[wasm_bindgen]
    pub fn download_log_text(&self) -> String {
        self.logic.activity_log()
    }

    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.logic.reset();
    }
}

/// Parses the tile and color manifests into ordered palette entries
#[wasm_bindgen]
pub fn load_catalog(tiles_json: &str, colors_json: &str) -> Result<JsValue, JsError> {
    let catalog = Catalog::from_manifests(tiles_json, colors_json).map_err(js_error)?;
    Ok(to_js(&catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> TileEditor {
        let mut editor = TileEditor::new(8, 4).unwrap_or_else(|_| panic!("valid grid"));
        editor.select_tile("set", "a.svg");
        editor
    }

    #[test]
    fn test_editor_creation() {
        let editor = editor();
        assert_eq!(editor.get_width(), 8);
        assert_eq!(editor.get_height(), 4);
        assert_eq!(editor.get_cell_size(), 80);
        assert_eq!(editor.get_occupied_count(), 0);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_place_remove_and_undo_return_ids() {
        let mut editor = editor();
        let first = editor.place_at(0, 0).unwrap();
        assert!(editor.place_at(0, 0).is_none());
        assert!(editor.place_at(8, 0).is_none());
        let second = editor.place_at_pixel(85.0, 5.0).unwrap();
        assert!(editor.is_occupied(1, 0));

        assert_eq!(editor.remove_at(0, 0), Some(first));
        assert_eq!(editor.undo(), Some(second));
        assert_eq!(editor.undo(), None);
        assert_eq!(editor.get_occupied_count(), 0);
    }

    #[test]
    fn test_rotation_and_color_selection() {
        let mut editor = editor();
        assert_eq!(editor.rotate(), 90);
        assert_eq!(editor.get_rotation(), 90);
        editor.select_color("#123456");
        assert_eq!(editor.get_active_color(), "#123456");
    }

    #[test]
    fn test_export_import_between_sessions() {
        let mut editor = editor();
        editor.place_at(2, 3).unwrap();
        editor.place_at(7, 0).unwrap();
        let json = editor.export_json().unwrap_or_else(|_| panic!("export"));

        let mut other = TileEditor::new(8, 4).unwrap_or_else(|_| panic!("valid grid"));
        let placed = other.import_json(&json).unwrap_or_else(|_| panic!("import"));
        assert_eq!(placed, 2);
        assert!(other.is_occupied(2, 3));
        assert!(other.is_occupied(7, 0));
        assert!(!other.can_undo());
    }

    #[test]
    fn test_destroy_clears_session() {
        let mut editor = editor();
        editor.place_at(0, 0).unwrap();
        editor.destroy();
        assert_eq!(editor.get_occupied_count(), 0);
        assert_eq!(editor.get_history_len(), 0);
        assert!(editor.download_log_text().contains("reset"));
    }
}
