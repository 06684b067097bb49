/*
 *  display/field.rs
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 *
 *  Field definitions - named screen regions handed to the window host
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

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::rect::Rect;

/// What occupies a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// InfoBox bound to the given logical slot
    InfoBox(usize),
    /// Primary view (the map)
    MainView,
}

/// Field definition - a named rectangular region on the display
#[derive(Debug, Clone)]
pub struct Field {
    /// Field identifier (e.g., "infobox_3", "main_view")
    pub name: String,

    /// Field type
    pub field_type: FieldType,

    /// Bounding rectangle (x, y, width, height)
    pub bounds: Rectangle,

    /// Border, >0 draw border of specified width
    pub border: u8,
}

impl Field {
    /// Create the field for InfoBox `slot`
    pub fn info_box(slot: usize, rect: Rect) -> Self {
        Self {
            name: format!("infobox_{}", slot),
            field_type: FieldType::InfoBox(slot),
            bounds: rect.into(),
            border: 1,
        }
    }

    /// Create the map field
    pub fn main_view(rect: Rect) -> Self {
        Self {
            name: "main_view".to_string(),
            field_type: FieldType::MainView,
            bounds: rect.into(),
            border: 0,
        }
    }

    /// InfoBox slot, if this is an InfoBox field
    pub fn slot(&self) -> Option<usize> {
        match self.field_type {
            FieldType::InfoBox(slot) => Some(slot),
            FieldType::MainView => None,
        }
    }

    /// Get field width
    pub fn width(&self) -> u32 {
        self.bounds.size.width
    }

    /// Get field height
    pub fn height(&self) -> u32 {
        self.bounds.size.height
    }

    /// Get top-left position
    pub fn position(&self) -> Point {
        self.bounds.top_left
    }
}
