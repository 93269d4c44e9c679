use crate::types::Rotation;

/// What the next grid click will place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    tile_ref: Option<String>,
    color: String,
    rotation: Rotation,
}

impl Selection {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            tile_ref: None,
            color: color.into(),
            rotation: Rotation::Deg0,
        }
    }

    pub fn select_tile(&mut self, collection: &str, file: &str) {
        self.tile_ref = Some(format!("{}/{}", collection, file));
    }

    pub fn select_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn rotate(&mut self) -> Rotation {
        self.rotation = self.rotation.next();
        self.rotation
    }

    pub fn tile_ref(&self) -> Option<&str> {
        self.tile_ref.as_deref()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}
