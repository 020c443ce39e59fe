pub mod adjacency;
pub mod board;
pub mod constants;
pub mod error;
pub mod export;
pub mod geometry;
pub mod log;
pub mod prereq;
pub mod spatial;
pub mod table;

pub use adjacency::LinkSet;
pub use board::Board;
pub use constants::CoreConstants;
pub use error::{LinkerError, Result};
pub use export::{export_csv, write_prerequisites};
pub use geometry::{CoordinateSpace, Extent, project, tile_center};
pub use log::{LogEntry, LogLevel, LogSource, LogStorage, format_elapsed};
pub use prereq::{PREREQUISITES_COLUMN, encode_or_groups, prerequisite_map};
pub use spatial::{SpatialIndex, TilePoint};
pub use table::{ColumnMap, Resolution, Tile, TileId, TileTable};
