//! Tile and color manifests.
//!
//! The UI fetches `tiles/tiles.json` and `colors/colors.json`; this module only
//! turns their contents into ordered palette entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GridError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileEntry {
    pub collection: String,
    pub file: String,
}

impl TileEntry {
    /// Reference stored in placement records
    pub fn tile_ref(&self) -> String {
        format!("{}/{}", self.collection, self.file)
    }

    pub fn asset_path(&self) -> String {
        format!("tiles/{}/{}", self.collection, self.file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    #[serde(skip_deserializing)]
    pub palette: String,
    pub name: String,
    pub file: String,
    pub color: String,
}

impl ColorEntry {
    pub fn asset_path(&self) -> String {
        format!("colors/{}/{}", self.palette, self.file)
    }
}

/// Palette contents in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub tiles: Vec<TileEntry>,
    pub colors: Vec<ColorEntry>,
}

impl Catalog {
    pub fn from_manifests(tiles_json: &str, colors_json: &str) -> Result<Self, GridError> {
        Ok(Self {
            tiles: parse_tile_manifest(tiles_json)?,
            colors: parse_color_manifest(colors_json)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.colors.is_empty()
    }
}

/// `{ "<collection>": ["<file>", ...] }`
pub fn parse_tile_manifest(json: &str) -> Result<Vec<TileEntry>, GridError> {
    let root: Map<String, Value> = serde_json::from_str(json)?;
    let mut entries = Vec::new();
    for (collection, files) in root {
        let files: Vec<String> = serde_json::from_value(files).map_err(|err| {
            GridError::malformed(format!("tile collection '{}': {}", collection, err))
        })?;
        entries.extend(files.into_iter().map(|file| TileEntry {
            collection: collection.clone(),
            file,
        }));
    }
    Ok(entries)
}

/// `{ "<palette>": [{ "name", "file", "color" }, ...] }`
pub fn parse_color_manifest(json: &str) -> Result<Vec<ColorEntry>, GridError> {
    let root: Map<String, Value> = serde_json::from_str(json)?;
    let mut entries = Vec::new();
    for (palette, items) in root {
        let items: Vec<ColorEntry> = serde_json::from_value(items).map_err(|err| {
            GridError::malformed(format!("color palette '{}': {}", palette, err))
        })?;
        entries.extend(items.into_iter().map(|mut item| {
            item.palette = palette.clone();
            item
        }));
    }
    Ok(entries)
}
