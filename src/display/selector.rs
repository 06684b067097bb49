/*
 *  display/selector.rs
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 *
 *  Geometry selection - fit the stored template to the screen shape
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

use super::geometry::Geometry;

/// Screen shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Square,
    Portrait,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        match width.cmp(&height) {
            std::cmp::Ordering::Greater => Orientation::Landscape,
            std::cmp::Ordering::Equal => Orientation::Square,
            std::cmp::Ordering::Less => Orientation::Portrait,
        }
    }
}

/// Adapt a geometry to the screen shape
///
/// Landscape screens get the sided counterpart of a stacked template,
/// portrait screens the stacked counterpart of a sided one, and square
/// screens always get `Square`. Always returns a usable template.
pub fn validate_geometry(geometry: Geometry, width: u32, height: u32) -> Geometry {
    let validated = match Orientation::of(width, height) {
        Orientation::Landscape => match geometry {
            Geometry::TopBottom4x4 => Geometry::LeftRight4x4,
            Geometry::Bottom8 => Geometry::Right8,
            Geometry::Top8 => Geometry::Left8,
            Geometry::Square => Geometry::Right8,
            Geometry::LeftRight4x4
            | Geometry::Left8
            | Geometry::Right8
            | Geometry::GNav
            | Geometry::Right12 => geometry,
        },
        Orientation::Square => Geometry::Square,
        Orientation::Portrait => match geometry {
            Geometry::TopBottom4x4 | Geometry::Bottom8 | Geometry::Top8 => geometry,
            Geometry::LeftRight4x4 => Geometry::TopBottom4x4,
            Geometry::Left8 => Geometry::Top8,
            Geometry::Right8 | Geometry::GNav | Geometry::Square | Geometry::Right12 => {
                Geometry::Bottom8
            }
        },
    };

    if validated != geometry {
        log::debug!("Geometry {} remapped to {} for {}x{}", geometry, validated, width, height);
    }
    validated
}

/// Validate a raw stored ordinal, falling back to the default template
/// when it is outside the table
pub fn validate_ordinal(ordinal: u32, width: u32, height: u32) -> Geometry {
    let geometry = Geometry::from_ordinal(ordinal).unwrap_or_else(|| {
        log::debug!("Geometry ordinal {} out of range, using {}", ordinal, Geometry::default());
        Geometry::default()
    });
    validate_geometry(geometry, width, height)
}

/// Resolve the geometry from the stored profile value
///
/// `None` (nothing stored yet) selects the default template.
pub fn load_geometry(stored: Option<u32>, width: u32, height: u32) -> Geometry {
    match stored {
        Some(ordinal) => validate_ordinal(ordinal, width, height),
        None => validate_geometry(Geometry::default(), width, height),
    }
}
