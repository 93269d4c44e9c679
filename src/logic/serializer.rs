//! Conversion between a grid and the JSON interchange format.
//!
//! Export is `{ "cellSize": n, "tiles": [...] }`. Import also accepts a bare
//! array of records. Imports are lenient about placement: entries outside the
//! grid are dropped, and when two entries share a cell the first one wins.
//! Imports are strict about shape: any malformed record rejects the whole
//! document before the grid is touched.

use log::debug;
use serde_json::Value;

use crate::dependency::GridStore;
use crate::error::GridError;
use crate::types::{ExportEnvelope, ImportDocument, ImportReport, PlacementRecord};

/// Occupied records in row-major order
pub fn serialize(grid: &GridStore) -> Vec<PlacementRecord> {
    grid.occupied().cloned().collect()
}

pub fn export_envelope(grid: &GridStore, cell_size: u32) -> ExportEnvelope {
    ExportEnvelope {
        cell_size,
        tiles: serialize(grid),
    }
}

/// Pretty-printed with two-space indentation
pub fn encode_export(envelope: &ExportEnvelope) -> Result<String, GridError> {
    serde_json::to_string_pretty(envelope).map_err(|err| GridError::Encode(err.to_string()))
}

/// Clears `grid`, then writes each record whose cell is in range and still empty.
pub fn deserialize<I>(grid: &mut GridStore, records: I) -> ImportReport
where
    I: IntoIterator<Item = PlacementRecord>,
{
    grid.clear();
    let mut report = ImportReport::default();
    for record in records {
        match grid.place(record) {
            Ok(_) => report.placed += 1,
            Err(GridError::OutOfRange { x, y }) => {
                debug!("import: dropping tile at ({}, {}) outside the grid", x, y);
                report.out_of_range += 1;
            }
            Err(GridError::CellOccupied { x, y }) => {
                debug!("import: dropping duplicate tile at ({}, {})", x, y);
                report.duplicates += 1;
            }
            Err(err) => debug!("import: dropping tile: {}", err),
        }
    }
    report
}

/// Validates a whole import document without touching any grid
pub fn parse_import(json: &str) -> Result<ImportDocument, GridError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(_) => Ok(ImportDocument {
            cell_size: None,
            tiles: parse_records(value)?,
        }),
        Value::Object(mut object) => {
            let tiles = object
                .remove("tiles")
                .ok_or_else(|| GridError::malformed("missing `tiles`"))?;
            if !tiles.is_array() {
                return Err(GridError::malformed("`tiles` must be an array"));
            }
            let cell_size = match object.remove("cellSize") {
                None | Some(Value::Null) => None,
                Some(value) => Some(parse_cell_size(&value)?),
            };
            Ok(ImportDocument {
                cell_size,
                tiles: parse_records(tiles)?,
            })
        }
        _ => Err(GridError::malformed("expected an array of tiles or an object with `tiles`")),
    }
}

fn parse_records(tiles: Value) -> Result<Vec<PlacementRecord>, GridError> {
    serde_json::from_value(tiles).map_err(|err| GridError::malformed(format!("tiles: {}", err)))
}

/// Positive whole number; JS may emit it as `40` or `40.0`
fn parse_cell_size(value: &Value) -> Result<u32, GridError> {
    let whole = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|size| size.is_finite() && size.fract() == 0.0 && *size >= 0.0)
            .filter(|&size| size <= f64::from(u32::MAX))
            .map(|size| size as u64)
    });
    whole
        .and_then(|size| u32::try_from(size).ok())
        .filter(|&size| size > 0)
        .ok_or_else(|| GridError::malformed(format!("invalid cellSize {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rotation;

    fn record(id: &str, x: i64, y: i64) -> PlacementRecord {
        PlacementRecord::new(id, "a.svg", x, y, Rotation::Deg0, "#fff")
    }

    fn grid(width: usize, height: usize) -> GridStore {
        GridStore::new(width, height).unwrap()
    }

    #[test]
    fn test_place_serialize_remove_scenario() {
        let mut g = grid(2, 2);
        g.place(record("1", 0, 0)).unwrap();

        let json = serde_json::to_value(serialize(&g)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": "1",
                "x": 0,
                "y": 0,
                "tile": "a.svg",
                "rotation": 0,
                "color": "#fff"
            }])
        );

        assert_eq!(g.remove(0, 0), Some(record("1", 0, 0)));
        assert!(serialize(&g).is_empty());
    }

    #[test]
    fn test_round_trip_preserves_grid() {
        let mut g = grid(3, 3);
        g.place(record("a", 2, 0)).unwrap();
        g.place(PlacementRecord::new("b", "set/b.svg", 1, 2, Rotation::Deg270, "#123456"))
            .unwrap();
        let before = g.clone();

        let records = serialize(&g);
        let report = deserialize(&mut g, records);
        assert_eq!(report.placed, 2);
        assert_eq!(g, before);
    }

    #[test]
    fn test_deserialize_filters_and_orders_row_major() {
        let mut g = grid(2, 2);
        let input = vec![
            record("late", 1, 1),
            record("far", 5, 5),
            record("first", 0, 1),
            record("dup", 0, 1),
            record("neg", -1, 0),
            record("top", 1, 0),
        ];
        let report = deserialize(&mut g, input);
        assert_eq!(
            report,
            ImportReport {
                placed: 3,
                out_of_range: 2,
                duplicates: 1
            }
        );
        let ids: Vec<String> = serialize(&g).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["top", "first", "late"]);
    }

    #[test]
    fn test_deserialize_clears_existing_cells() {
        let mut g = grid(2, 2);
        g.place(record("old", 0, 0)).unwrap();
        deserialize(&mut g, vec![record("new", 1, 1)]);
        assert!(g.get(0, 0).is_none());
        assert_eq!(g.get(1, 1).map(|r| r.id.as_str()), Some("new"));
    }

    #[test]
    fn test_parse_envelope_and_bare_array() {
        let doc = parse_import(
            r##"{"cellSize": 40, "tiles": [
                {"id":"1","tile":"a.svg","x":1,"y":1,"rotation":0,"color":"#fff"}]}"##,
        )
        .unwrap();
        assert_eq!(doc.cell_size, Some(40));
        assert_eq!(doc.tiles, vec![record("1", 1, 1)]);

        let doc = parse_import(
            r##"[{"id":"1","tile":"a.svg","x":1,"y":1,"rotation":0,"color":"#fff"}]"##,
        )
        .unwrap();
        assert_eq!(doc.cell_size, None);
        assert_eq!(doc.tiles.len(), 1);

        let doc = parse_import(r#"{"tiles": []}"#).unwrap();
        assert_eq!(doc.cell_size, None);
        assert!(doc.tiles.is_empty());
    }

    #[test]
    fn test_cell_size_accepts_integral_floats() {
        let doc = parse_import(r#"{"cellSize": 40.0, "tiles": []}"#).unwrap();
        assert_eq!(doc.cell_size, Some(40));

        for case in [
            r#"{"cellSize": 40.5, "tiles": []}"#,
            r#"{"cellSize": -40.0, "tiles": []}"#,
            r#"{"cellSize": 0.0, "tiles": []}"#,
            r#"{"cellSize": 1e300, "tiles": []}"#,
        ] {
            assert!(
                matches!(parse_import(case), Err(GridError::MalformedImport(_))),
                "expected rejection for {}",
                case
            );
        }
    }

    #[test]
    fn test_parse_rejects_malformed_documents() {
        let cases = [
            "not json",
            "42",
            r#"{"cellSize": 80}"#,
            r#"{"tiles": {"x": 1}}"#,
            r#"{"tiles": [], "cellSize": "big"}"#,
            r#"{"tiles": [], "cellSize": 0}"#,
            r##"[{"id":"1","tile":"a.svg","x":"one","y":1,"rotation":0,"color":"#fff"}]"##,
            r#"[{"id":"1","tile":"a.svg","x":1,"y":1,"rotation":0}]"#,
        ];
        for case in cases {
            assert!(
                matches!(parse_import(case), Err(GridError::MalformedImport(_))),
                "expected rejection for {}",
                case
            );
        }
    }

    #[test]
    fn test_encoded_export_uses_envelope_keys() {
        let mut g = grid(2, 2);
        g.place(record("1", 0, 0)).unwrap();
        let text = encode_export(&export_envelope(&g, 80)).unwrap();
        assert!(text.contains("\n  \"cellSize\": 80"));

        let doc = parse_import(&text).unwrap();
        assert_eq!(doc.cell_size, Some(80));
        assert_eq!(doc.tiles, serialize(&g));
    }
}
