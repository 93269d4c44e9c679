use serde::Serialize;

/// Count of placed tiles sharing a tile image and color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageEntry {
    pub tile: String,
    pub color: String,
    pub count: usize,
}
