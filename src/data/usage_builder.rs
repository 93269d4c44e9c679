use indexmap::IndexMap;

use crate::types::{PlacementRecord, UsageEntry};

/// Aggregates placed tiles by (tile, color), keeping first-seen order
pub struct UsageBuilder;

impl UsageBuilder {
    pub fn build<'a, I>(records: I) -> Vec<UsageEntry>
    where
        I: IntoIterator<Item = &'a PlacementRecord>,
    {
        let mut counts: IndexMap<(&str, &str), usize> = IndexMap::new();
        for record in records {
            *counts
                .entry((record.tile_ref.as_str(), record.color.as_str()))
                .or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|((tile, color), count)| UsageEntry {
                tile: tile.to_string(),
                color: color.to_string(),
                count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rotation;

    fn record(tile: &str, color: &str) -> PlacementRecord {
        PlacementRecord::new("id", tile, 0, 0, Rotation::Deg0, color)
    }

    #[test]
    fn test_counts_by_tile_and_color() {
        let records = vec![
            record("a.svg", "#fff"),
            record("b.svg", "#fff"),
            record("a.svg", "#fff"),
            record("a.svg", "#000"),
        ];
        let usage = UsageBuilder::build(&records);
        assert_eq!(usage.len(), 3);
        assert_eq!(
            usage[0],
            UsageEntry {
                tile: "a.svg".into(),
                color: "#fff".into(),
                count: 2
            }
        );
        assert_eq!(usage[1].tile, "b.svg");
        assert_eq!(usage[2].color, "#000");
    }

    #[test]
    fn test_empty_grid_has_no_usage() {
        assert!(UsageBuilder::build(&Vec::new()).is_empty());
    }
}
