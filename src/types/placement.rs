use serde::{Deserialize, Serialize};

/// Tile rotation in degrees, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "i64")]
pub enum Rotation {
    #[default]
    Deg0 = 0,
    Deg90 = 90,
    Deg180 = 180,
    Deg270 = 270,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        self as u32
    }

    /// Next rotation step clockwise, wrapping 270 back to 0
    pub fn next(self) -> Rotation {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }
}

impl From<Rotation> for u32 {
    fn from(rotation: Rotation) -> u32 {
        rotation.degrees()
    }
}

impl TryFrom<i64> for Rotation {
    type Error = String;

    /// Accepts any multiple of 90, normalized into `[0, 360)`
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value % 90 != 0 {
            return Err(format!("rotation {} is not a multiple of 90", value));
        }
        match value.rem_euclid(360) {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            _ => Ok(Rotation::Deg270),
        }
    }
}

/// One tile instance on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub id: String,
    /// `collection/file` pair identifying the tile image
    #[serde(rename = "tile")]
    pub tile_ref: String,
    pub x: i64,
    pub y: i64,
    pub rotation: Rotation,
    pub color: String,
}

impl PlacementRecord {
    pub fn new(
        id: impl Into<String>,
        tile_ref: impl Into<String>,
        x: i64,
        y: i64,
        rotation: Rotation,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            tile_ref: tile_ref.into(),
            x,
            y,
            rotation,
            color: color.into(),
        }
    }

    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}
