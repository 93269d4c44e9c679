pub mod catalog;
pub mod config;
pub mod envelope;
pub mod placement;
pub mod usage;

pub use catalog::{Catalog, ColorEntry, TileEntry};
pub use config::EditorConfig;
pub use envelope::{ExportEnvelope, ImportDocument, ImportReport};
pub use placement::{PlacementRecord, Rotation};
pub use usage::UsageEntry;
