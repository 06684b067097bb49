/*
 *  display/geometry.rs
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 *
 *  InfoBox placement templates
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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// InfoBox placement template
///
/// The discriminant is the ordinal persisted in the profile, so the
/// order of the variants must never change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Geometry {
    /// Row of 4 above the map, row of 4 below it
    #[default]
    TopBottom4x4 = 0,

    /// Two rows of 4 below the map
    Bottom8 = 1,

    /// Two rows of 4 above the map
    Top8 = 2,

    /// Column of 4 left of the map, column of 4 right of it
    LeftRight4x4 = 3,

    /// Two columns of 4 left of the map
    Left8 = 4,

    /// Two columns of 4 right of the map
    Right8 = 5,

    /// Column of 6 plus a short column of 3 on the right
    #[serde(rename = "gnav")]
    GNav = 6,

    /// Single column of 5 on the right, for square screens
    Square = 7,

    /// Two columns of 6 on the right
    Right12 = 8,
}

impl Geometry {
    /// Every template in ordinal order
    pub const ALL: [Geometry; 9] = [
        Geometry::TopBottom4x4,
        Geometry::Bottom8,
        Geometry::Top8,
        Geometry::LeftRight4x4,
        Geometry::Left8,
        Geometry::Right8,
        Geometry::GNav,
        Geometry::Square,
        Geometry::Right12,
    ];

    /// Number of InfoBoxes the template places
    pub const fn count(self) -> usize {
        match self {
            Geometry::TopBottom4x4
            | Geometry::Bottom8
            | Geometry::Top8
            | Geometry::LeftRight4x4
            | Geometry::Left8
            | Geometry::Right8 => 8,
            Geometry::GNav => 9,
            Geometry::Square => 5,
            Geometry::Right12 => 12,
        }
    }

    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Template stored under `ordinal`, `None` when outside the table
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Short name used on the command line and in YAML
    pub const fn name(self) -> &'static str {
        match self {
            Geometry::TopBottom4x4 => "top-bottom4x4",
            Geometry::Bottom8 => "bottom8",
            Geometry::Top8 => "top8",
            Geometry::LeftRight4x4 => "left-right4x4",
            Geometry::Left8 => "left8",
            Geometry::Right8 => "right8",
            Geometry::GNav => "gnav",
            Geometry::Square => "square",
            Geometry::Right12 => "right12",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Geometry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|g| g.name()).collect();
                format!("unknown geometry '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}
