/*
 *  display/tiling.rs
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 *
 *  Place a run of equal tiles along one screen edge
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

use super::rect::Rect;
use serde::Serialize;

/// Pixel size shared by every tile of a layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TileSize {
    pub width: i32,
    pub height: i32,
}

impl TileSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Edge a row or column of tiles hugs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Row whose top is the anchor
    Top,
    /// Row whose bottom is the anchor
    Bottom,
    /// Column whose left is the anchor
    Left,
    /// Column whose right is the anchor
    Right,
}

impl Edge {
    const fn is_row(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Fill `slots` with one row or column of tiles
///
/// Rows run left to right starting at x = `along`, columns run top to
/// bottom starting at y = `along`. `anchor` is the edge the band is pinned
/// to: for `Top`/`Left` the band grows away from it, for `Bottom`/`Right`
/// the band ends at it. Returns the band's inner edge, which is where the
/// next band along the same edge goes.
pub fn lay_out(edge: Edge, slots: &mut [Rect], size: TileSize, along: i32, anchor: i32) -> i32 {
    let depth = if edge.is_row() { size.height } else { size.width };
    let (near, far, inner) = match edge {
        Edge::Top | Edge::Left => (anchor, anchor + depth, anchor + depth),
        Edge::Bottom | Edge::Right => (anchor - depth, anchor, anchor - depth),
    };

    let step = if edge.is_row() { size.width } else { size.height };
    let mut pos = along;
    for slot in slots.iter_mut() {
        *slot = if edge.is_row() {
            Rect::new(pos, near, pos + step, far)
        } else {
            Rect::new(near, pos, far, pos + step)
        };
        pos += step;
    }

    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: TileSize = TileSize::new(100, 40);

    #[test]
    fn test_top_row() {
        let mut slots = [Rect::default(); 3];
        let bottom = lay_out(Edge::Top, &mut slots, SIZE, 10, 5);
        assert_eq!(bottom, 45);
        assert_eq!(slots[0], Rect::new(10, 5, 110, 45));
        assert_eq!(slots[1], Rect::new(110, 5, 210, 45));
        assert_eq!(slots[2], Rect::new(210, 5, 310, 45));
    }

    #[test]
    fn test_bottom_row_ends_at_anchor() {
        let mut slots = [Rect::default(); 2];
        let top = lay_out(Edge::Bottom, &mut slots, SIZE, 0, 480);
        assert_eq!(top, 440);
        assert_eq!(slots[0], Rect::new(0, 440, 100, 480));
        assert_eq!(slots[1], Rect::new(100, 440, 200, 480));
    }

    #[test]
    fn test_left_column() {
        let mut slots = [Rect::default(); 2];
        let right = lay_out(Edge::Left, &mut slots, SIZE, 0, 20);
        assert_eq!(right, 120);
        assert_eq!(slots[0], Rect::new(20, 0, 120, 40));
        assert_eq!(slots[1], Rect::new(20, 40, 120, 80));
    }

    #[test]
    fn test_right_column_ends_at_anchor() {
        let mut slots = [Rect::default(); 2];
        let left = lay_out(Edge::Right, &mut slots, SIZE, 120, 800);
        assert_eq!(left, 700);
        assert_eq!(slots[0], Rect::new(700, 120, 800, 160));
        assert_eq!(slots[1], Rect::new(700, 160, 800, 200));
    }

    #[test]
    fn test_stacked_bands() {
        let mut slots = [Rect::default(); 2];
        let first = lay_out(Edge::Right, &mut slots[1..], SIZE, 0, 800);
        let second = lay_out(Edge::Right, &mut slots[..1], SIZE, 0, first);
        assert_eq!(second, 600);
        assert_eq!(slots[0].right, slots[1].left);
    }

    #[test]
    fn test_no_slots_still_moves_edge() {
        let inner = lay_out(Edge::Top, &mut [], SIZE, 0, 0);
        assert_eq!(inner, 40);
    }
}
