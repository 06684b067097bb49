/*
 *  display/layout.rs
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 *
 *  InfoBox layout calculation - tile sizes, tile placement and the
 *  area left over for the map
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

use arrayvec::ArrayVec;
use serde::Serialize;

use super::field::Field;
use super::geometry::Geometry;
use super::page::PageLayout;
use super::rect::Rect;
use super::tiling::{lay_out, Edge, TileSize};
use crate::constants::{
    COLUMN_WIDTH_FACTOR, CONTROL_HEIGHT_RATIO, GNAV_RESERVED_ROWS, MAX_INFOBOXES,
    SQUARE_TILES, SQUARE_WIDTH_FACTOR, TALL_COLUMN_ASPECT, TALL_COLUMN_TILES,
};

/// Computed InfoBox placement for one display rectangle
///
/// `tiles[i]` is where logical InfoBox slot `i` goes on screen. The
/// value is recomputed on every resize and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Template the tiles were placed with
    pub geometry: Geometry,

    /// Tile rectangles in slot order
    pub tiles: ArrayVec<Rect, MAX_INFOBOXES>,

    /// Size shared by every tile
    pub tile_size: TileSize,

    /// Area left for the map once the tiles are placed
    pub remaining: Rect,
}

impl Layout {
    /// Layout with no InfoBoxes, the map takes the whole rectangle
    pub fn fullscreen(rect: Rect, geometry: Geometry) -> Self {
        Self {
            geometry,
            tiles: ArrayVec::new(),
            tile_size: TileSize::default(),
            remaining: rect,
        }
    }

    /// Number of tiles placed
    pub fn count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Rect] {
        &self.tiles
    }

    /// Rectangle for InfoBox `slot`
    pub fn tile(&self, slot: usize) -> Option<Rect> {
        self.tiles.get(slot).copied()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Express the layout as a page of named fields, one per InfoBox
    /// slot plus the map area
    pub fn page(&self, name: impl Into<String>) -> PageLayout {
        PageLayout::new(name)
            .add_fields(
                self.tiles
                    .iter()
                    .enumerate()
                    .map(|(slot, rect)| Field::info_box(slot, *rect))
                    .collect(),
            )
            .add_field(Field::main_view(self.remaining))
    }
}

/// Tile dimensions for `geometry` on `rect`
pub fn tile_size(geometry: Geometry, rect: Rect) -> TileSize {
    let width = rect.width();
    let height = rect.height();
    let count = geometry.count() as i32;

    match geometry {
        // rows of 4
        Geometry::TopBottom4x4 | Geometry::Bottom8 | Geometry::Top8 => TileSize::new(
            2 * width / count,
            (f64::from(height) / CONTROL_HEIGHT_RATIO) as i32,
        ),
        // columns of 4
        Geometry::LeftRight4x4 | Geometry::Left8 | Geometry::Right8 => TileSize::new(
            (f64::from(width) / CONTROL_HEIGHT_RATIO * COLUMN_WIDTH_FACTOR).round() as i32,
            2 * height / count,
        ),
        // columns of 6, width follows height
        Geometry::GNav | Geometry::Right12 => {
            let tile_height = height / TALL_COLUMN_TILES;
            TileSize::new(
                (f64::from(tile_height) * TALL_COLUMN_ASPECT).round() as i32,
                tile_height,
            )
        }
        Geometry::Square => TileSize::new(
            (f64::from(width) * SQUARE_WIDTH_FACTOR).round() as i32,
            height / SQUARE_TILES,
        ),
    }
}

/// Place the InfoBoxes of `geometry` around the edges of `rect`
///
/// `geometry` should already be validated against the rectangle's shape.
/// Nothing is clamped: Right12 or GNav on a portrait rect narrower than
/// about 0.48 of its height places the inner column left of `rect.left`
/// and leaves an inverted `remaining`.
pub fn calculate(rect: Rect, geometry: Geometry) -> Layout {
    let count = geometry.count();
    debug_assert!(count <= MAX_INFOBOXES);

    let size = tile_size(geometry, rect);
    let mut slots = [Rect::default(); MAX_INFOBOXES];
    let mut rc = rect;

    let placed = match geometry {
        Geometry::TopBottom4x4 => {
            rc.top = lay_out(Edge::Top, &mut slots[0..4], size, rc.left, rc.top);
            rc.bottom = lay_out(Edge::Bottom, &mut slots[4..8], size, rc.left, rc.bottom);
            8
        }
        Geometry::Bottom8 => {
            rc.bottom = lay_out(Edge::Bottom, &mut slots[4..8], size, rc.left, rc.bottom);
            rc.bottom = lay_out(Edge::Bottom, &mut slots[0..4], size, rc.left, rc.bottom);
            8
        }
        Geometry::Top8 => {
            rc.top = lay_out(Edge::Top, &mut slots[0..4], size, rc.left, rc.top);
            rc.top = lay_out(Edge::Top, &mut slots[4..8], size, rc.left, rc.top);
            8
        }
        Geometry::LeftRight4x4 => {
            rc.left = lay_out(Edge::Left, &mut slots[0..4], size, rc.top, rc.left);
            rc.right = lay_out(Edge::Right, &mut slots[4..8], size, rc.top, rc.right);
            8
        }
        Geometry::Left8 => {
            rc.left = lay_out(Edge::Left, &mut slots[0..4], size, rc.top, rc.left);
            rc.left = lay_out(Edge::Left, &mut slots[4..8], size, rc.top, rc.left);
            8
        }
        Geometry::Right8 => {
            rc.right = lay_out(Edge::Right, &mut slots[4..8], size, rc.top, rc.right);
            rc.right = lay_out(Edge::Right, &mut slots[0..4], size, rc.top, rc.right);
            8
        }
        Geometry::Right12 => {
            rc.right = lay_out(Edge::Right, &mut slots[6..12], size, rc.top, rc.right);
            rc.right = lay_out(Edge::Right, &mut slots[0..6], size, rc.top, rc.right);
            12
        }
        Geometry::GNav => {
            // short column sits below a band kept free at the top
            let short_top = rc.top + GNAV_RESERVED_ROWS * size.height;
            rc.right = lay_out(Edge::Right, &mut slots[6..9], size, short_top, rc.right);
            rc.right = lay_out(Edge::Right, &mut slots[0..6], size, rc.top, rc.right);
            9
        }
        Geometry::Square => {
            rc.right = lay_out(Edge::Right, &mut slots[0..5], size, rc.top, rc.right);
            5
        }
    };
    debug_assert_eq!(placed, count, "{} placed {} tiles", geometry, placed);

    if !rc.is_valid() {
        log::warn!("{} does not fit {}, map area inverted to {}", geometry, rect, rc);
    }

    Layout {
        geometry,
        tiles: slots[..count].iter().copied().collect(),
        tile_size: size,
        remaining: rc,
    }
}
