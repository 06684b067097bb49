/*
 *  tests/layout_integration.rs
 *
 *  Integration tests for the InfoBox layout engine
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 */

use infodeck::display::{calculate, load_geometry, validate_geometry, validate_ordinal, Geometry, Rect};
use infodeck::{InfoBoxPanel, Profile, ProfileStore};

const DISPLAYS: [(u32, u32); 10] = [
    (800, 480),
    (480, 800),
    (480, 480),
    (320, 240),
    (240, 320),
    (640, 480),
    (1024, 600),
    (600, 1024),
    (1920, 1080),
    (272, 480),
];

fn validated(rect: Rect, geometry: Geometry) -> Geometry {
    validate_geometry(geometry, rect.width() as u32, rect.height() as u32)
}

#[test]
fn test_count_matches_template_for_every_display() {
    for (w, h) in DISPLAYS {
        let rect = Rect::with_size(w, h);
        for g in Geometry::ALL {
            assert_eq!(calculate(rect, g).count(), g.count(), "{} on {}x{}", g, w, h);
        }
    }
}

#[test]
fn test_tiles_stay_inside_display_and_off_the_map() {
    for (w, h) in DISPLAYS {
        let rect = Rect::new(7, 11, 7 + w as i32, 11 + h as i32);
        for g in Geometry::ALL {
            let layout = calculate(rect, validated(rect, g));
            assert!(layout.remaining.is_valid(), "{} on {}x{}", layout.geometry, w, h);
            assert!(rect.contains_rect(&layout.remaining));

            for (i, tile) in layout.tiles().iter().enumerate() {
                assert!(rect.contains_rect(tile), "{} slot {} {} outside {}", layout.geometry, i, tile, rect);
                assert!(!tile.intersects(&layout.remaining), "{} slot {} overlaps map", layout.geometry, i);
                for other in &layout.tiles()[i + 1..] {
                    assert!(!tile.intersects(other), "{} tiles overlap", layout.geometry);
                }
            }
        }
    }
}

#[test]
fn test_all_tiles_share_one_size() {
    let rect = Rect::with_size(800, 480);
    for g in Geometry::ALL {
        let layout = calculate(rect, g);
        for tile in layout.tiles() {
            assert_eq!(tile.width(), layout.tile_size.width);
            assert_eq!(tile.height(), layout.tile_size.height);
        }
    }
}

#[test]
fn test_orientation_symmetry() {
    assert_eq!(validate_geometry(Geometry::LeftRight4x4, 480, 800), Geometry::TopBottom4x4);
    assert_eq!(validate_geometry(Geometry::TopBottom4x4, 800, 480), Geometry::LeftRight4x4);
    for g in Geometry::ALL {
        assert_eq!(validate_geometry(g, 600, 600), Geometry::Square);
    }
}

#[test]
fn test_validation_idempotent_everywhere() {
    for (w, h) in DISPLAYS {
        for ordinal in 0..12 {
            let once = validate_ordinal(ordinal, w, h);
            assert_eq!(validate_geometry(once, w, h), once);
        }
    }
}

#[test]
fn test_top_bottom_on_800x480() {
    let rect = Rect::with_size(800, 480);
    let layout = calculate(rect, Geometry::TopBottom4x4);
    let height = (480.0 / 7.4) as i32;

    assert_eq!(layout.count(), 8);
    for tile in &layout.tiles()[..4] {
        assert_eq!((tile.width(), tile.height()), (200, height));
        assert_eq!(tile.top, 0);
    }
    for tile in &layout.tiles()[4..] {
        assert_eq!((tile.width(), tile.height()), (200, height));
        assert_eq!(tile.bottom, 480);
    }
    assert_eq!(layout.remaining.top, height);
    assert_eq!(layout.remaining.bottom, 480 - height);
    assert_eq!((layout.remaining.left, layout.remaining.right), (0, 800));
}

#[test]
fn test_square_display_any_stored_geometry() {
    let rect = Rect::with_size(480, 480);
    for stored in [None, Some(0), Some(5), Some(8), Some(99)] {
        let geometry = load_geometry(stored, 480, 480);
        assert_eq!(geometry, Geometry::Square);

        let layout = calculate(rect, geometry);
        assert_eq!(layout.count(), 5);
        assert!(layout.tiles().iter().all(|t| t.right == 480));
        assert_eq!(layout.remaining.right, 480 - 96);
    }
}

#[test]
fn test_panel_round_trip_through_profile_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.yaml");
    let landscape = Rect::with_size(1024, 600);

    {
        let profile = ProfileStore::open(&path).unwrap();
        let mut panel = InfoBoxPanel::init(landscape, &profile);
        assert_eq!(panel.geometry(), Geometry::LeftRight4x4);
        panel.set_geometry(Geometry::GNav, &profile).unwrap();
    }

    // next start-up picks the stored choice back up
    let profile = ProfileStore::open(&path).unwrap();
    let panel = InfoBoxPanel::init(landscape, &profile);
    assert_eq!(panel.geometry(), Geometry::GNav);
    assert_eq!(panel.layout().count(), 9);
}

#[test]
fn test_concurrent_readers_see_whole_values() {
    use std::sync::Arc;
    use std::thread;

    let profile = Arc::new(ProfileStore::in_memory(Profile::default()));
    let writer = {
        let profile = Arc::clone(&profile);
        thread::spawn(move || {
            for g in Geometry::ALL.iter().cycle().take(200) {
                profile.set_geometry(*g).unwrap();
            }
        })
    };

    let rect = Rect::with_size(800, 480);
    let mut panel = InfoBoxPanel::init(rect, &profile);
    for _ in 0..200 {
        let layout = panel.resize(rect, &profile);
        assert_eq!(layout.count(), layout.geometry.count());
        assert!(profile.geometry_ordinal().is_none_or(|o| Geometry::from_ordinal(o).is_some()));
    }
    writer.join().unwrap();
}
