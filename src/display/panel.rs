/*
 *  display/panel.rs
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 *
 *  InfoBox panel - keeps the active geometry and layout in step with
 *  the display size and the stored profile
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
use super::layout::{calculate, Layout};
use super::rect::Rect;
use super::selector::{load_geometry, validate_geometry};
use crate::profile::{ProfileError, ProfileStore};

/// InfoBox panel state
pub struct InfoBoxPanel {
    geometry: Geometry,
    fullscreen: bool,
    rect: Rect,
    layout: Layout,
}

impl InfoBoxPanel {
    /// Load the stored geometry once and lay it out on `rect`
    pub fn init(rect: Rect, profile: &ProfileStore) -> Self {
        let geometry = load_geometry(
            profile.geometry_ordinal(),
            rect.width().max(0) as u32,
            rect.height().max(0) as u32,
        );
        log::info!("InfoBox geometry {} on {}", geometry, rect);

        Self {
            geometry,
            fullscreen: false,
            rect,
            layout: calculate(rect, geometry),
        }
    }

    /// Active geometry, already fitted to the display
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Last computed layout
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Display resized: revalidate the stored geometry and recompute
    pub fn resize(&mut self, rect: Rect, profile: &ProfileStore) -> &Layout {
        self.geometry = load_geometry(
            profile.geometry_ordinal(),
            rect.width().max(0) as u32,
            rect.height().max(0) as u32,
        );
        self.rect = rect;
        self.recompute()
    }

    /// Explicit user choice: store it, then fit it to the current display
    pub fn set_geometry(
        &mut self,
        geometry: Geometry,
        profile: &ProfileStore,
    ) -> Result<&Layout, ProfileError> {
        profile.set_geometry(geometry)?;
        Ok(self.apply_geometry(geometry))
    }

    /// Use `geometry` without storing it; the next `resize` reloads the
    /// profile and drops it
    pub fn apply_geometry(&mut self, geometry: Geometry) -> &Layout {
        self.geometry = validate_geometry(
            geometry,
            self.rect.width().max(0) as u32,
            self.rect.height().max(0) as u32,
        );
        self.recompute()
    }

    /// Hide the InfoBoxes and give the map the whole display
    pub fn set_fullscreen(&mut self, fullscreen: bool) -> &Layout {
        if self.fullscreen != fullscreen {
            log::info!("InfoBoxes {}", if fullscreen { "hidden" } else { "shown" });
        }
        self.fullscreen = fullscreen;
        self.recompute()
    }

    fn recompute(&mut self) -> &Layout {
        self.layout = if self.fullscreen {
            Layout::fullscreen(self.rect, self.geometry)
        } else {
            calculate(self.rect, self.geometry)
        };
        log::debug!(
            "Layout {}: {} tiles of {}x{}, map {}",
            self.geometry,
            self.layout.count(),
            self.layout.tile_size.width,
            self.layout.tile_size.height,
            self.layout.remaining
        );
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    fn stored(geometry: Geometry) -> ProfileStore {
        ProfileStore::in_memory(Profile {
            info_box_geometry: Some(geometry.ordinal()),
        })
    }

    #[test]
    fn test_init_without_preference() {
        let profile = ProfileStore::in_memory(Profile::default());
        let panel = InfoBoxPanel::init(Rect::with_size(480, 800), &profile);
        assert_eq!(panel.geometry(), Geometry::TopBottom4x4);
        assert_eq!(panel.layout().count(), 8);
    }

    #[test]
    fn test_resize_revalidates_stored_geometry() {
        let profile = stored(Geometry::Right12);
        let mut panel = InfoBoxPanel::init(Rect::with_size(800, 480), &profile);
        assert_eq!(panel.geometry(), Geometry::Right12);

        // rotate to portrait
        let layout = panel.resize(Rect::with_size(480, 800), &profile);
        assert_eq!(layout.geometry, Geometry::Bottom8);

        // back to landscape, the stored choice comes back
        panel.resize(Rect::with_size(800, 480), &profile);
        assert_eq!(panel.geometry(), Geometry::Right12);
        assert_eq!(panel.layout().count(), 12);
    }

    #[test]
    fn test_resize_sees_profile_change() {
        let profile = stored(Geometry::Left8);
        let mut panel = InfoBoxPanel::init(Rect::with_size(800, 480), &profile);
        profile.set_geometry(Geometry::GNav).unwrap();
        panel.resize(Rect::with_size(800, 480), &profile);
        assert_eq!(panel.geometry(), Geometry::GNav);
    }

    #[test]
    fn test_set_geometry_stores_raw_choice() {
        let profile = ProfileStore::in_memory(Profile::default());
        let mut panel = InfoBoxPanel::init(Rect::with_size(480, 480), &profile);
        let layout = panel.set_geometry(Geometry::Right8, &profile).unwrap();
        assert_eq!(layout.geometry, Geometry::Square);
        assert_eq!(profile.geometry_ordinal(), Some(Geometry::Right8.ordinal()));
    }

    #[test]
    fn test_applied_geometry_lasts_until_resize() {
        let profile = stored(Geometry::Left8);
        let mut panel = InfoBoxPanel::init(Rect::with_size(800, 480), &profile);

        panel.apply_geometry(Geometry::Right12);
        assert_eq!(panel.geometry(), Geometry::Right12);
        assert_eq!(profile.geometry_ordinal(), Some(Geometry::Left8.ordinal()));

        panel.resize(Rect::with_size(800, 480), &profile);
        assert_eq!(panel.geometry(), Geometry::Left8);
    }

    #[test]
    fn test_fullscreen_toggle() {
        let profile = ProfileStore::in_memory(Profile::default());
        let rect = Rect::with_size(800, 480);
        let mut panel = InfoBoxPanel::init(rect, &profile);

        let layout = panel.set_fullscreen(true);
        assert!(layout.is_fullscreen());
        assert_eq!(layout.remaining, rect);

        // a resize keeps the InfoBoxes hidden
        let layout = panel.resize(Rect::with_size(1024, 600), &profile);
        assert!(layout.is_fullscreen());

        let layout = panel.set_fullscreen(false);
        assert_eq!(layout.count(), 8);
        assert!(panel.layout().remaining.width() < 1024);
    }
}
