/*
 *  display/mod.rs
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 *
 *  InfoBox panel layout - module wiring
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

// Geometry primitives
pub mod rect;
pub mod geometry;

// Template selection for the screen shape
pub mod selector;

// Tile placement
pub mod tiling;
pub mod layout;

// Field-based page description of a layout
pub mod field;
pub mod page;

// Panel state across resizes
pub mod panel;

// Re-exports for convenience
pub use rect::Rect;
pub use geometry::Geometry;
pub use selector::{Orientation, validate_geometry, validate_ordinal, load_geometry};
pub use tiling::{Edge, TileSize};
pub use layout::{Layout, calculate, tile_size};
pub use field::{Field, FieldType};
pub use page::PageLayout;
pub use panel::InfoBoxPanel;
