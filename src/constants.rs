//! This module contains global constants used by the layout engine.

/// Maximum number of InfoBoxes any geometry can place.
pub const MAX_INFOBOXES: usize = 12;

/// Divisor applied to the display height (rows) or width (columns) to size a tile.
pub const CONTROL_HEIGHT_RATIO: f64 = 7.4;

/// Column tiles are wider than a row tile is tall.
pub const COLUMN_WIDTH_FACTOR: f64 = 1.3;

/// GNav and Right12 keep this width:height aspect for every tile.
pub const TALL_COLUMN_ASPECT: f64 = 1.44;

/// Tiles per tall column (GNav, Right12), also the height divisor.
pub const TALL_COLUMN_TILES: i32 = 6;

/// GNav leaves this many tile heights free above its short column.
pub const GNAV_RESERVED_ROWS: i32 = 3;

/// Share of the display width taken by the square geometry's single column.
pub const SQUARE_WIDTH_FACTOR: f64 = 0.2;

/// Tiles in the square geometry's single column, also the height divisor.
pub const SQUARE_TILES: i32 = 5;

/// Profile key holding the stored geometry ordinal.
pub const PROFILE_KEY_GEOMETRY: &str = "info_box_geometry";

/// Display width assumed when none is configured.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 800;
/// Display height assumed when none is configured.
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 480;
