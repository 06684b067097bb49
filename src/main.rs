/*
 *  main.rs
 *
 *  InfoDeck - instruments around the map
 *	(c) 2020-26 Stuart Hunter
 *
 *	Print the InfoBox layout for a display
 *
 *	This program is free software: you can redistribute it and/or modify
 *	it under the terms of the GNU General Public License as published by
 *	the Free Software Foundation, either version 3 of the License, or
 *	(at your option) any later version.
 *
 *	This program is distributed in the hope that it will be useful,
 *	but WITHOUT ANY WARRANTY; without even the implied warranty of
 *	MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *	GNU General Public License for more details.
 *
 *	See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *	Public License.
 *
 */

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use infodeck::config::{self, Cli, OutputFormat};
use infodeck::display::{Geometry, InfoBoxPanel, Layout, PageLayout, Rect};
use infodeck::profile::{default_profile_path, Profile, ProfileStore};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for g in Geometry::ALL {
            println!("{:>2}  {:<14} {:>2} InfoBoxes", g.ordinal(), g.name(), g.count());
        }
        return Ok(());
    }

    // Open wide at the backend, the level gate below does the filtering;
    // the CLI level applies until the config file has been read
    env_logger::Builder::from_env(Env::default().default_filter_or("trace"))
        .format_timestamp_secs()
        .init();
    log::set_max_level(cli.provisional_level());

    let cfg = config::resolve(&cli).context("loading configuration")?;
    log::set_max_level(cfg.level_filter());

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        print!("{}", serde_yaml::to_string(&cfg)?);
        return Ok(());
    }

    info!("{} v.{} built {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let profile = match cfg.profile.clone().or_else(default_profile_path) {
        Some(path) => {
            info!("Using profile {}", path.display());
            ProfileStore::open_or_default(path)
        }
        None => ProfileStore::in_memory(Profile::default()),
    };

    let rect = cfg.display_rect();
    let mut panel = InfoBoxPanel::init(rect, &profile);

    if let Some(geometry) = cfg.geometry {
        if cli.save {
            panel
                .set_geometry(geometry, &profile)
                .context("saving geometry to profile")?;
        } else {
            panel.apply_geometry(geometry);
        }
    }
    if cfg.fullscreen.unwrap_or(false) {
        panel.set_fullscreen(true);
    }

    match cfg.output_format() {
        OutputFormat::Text => print_text(rect, panel.layout()),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(panel.layout())?),
        OutputFormat::Fields => print_fields(&panel.layout().page("infoboxes")),
    }

    Ok(())
}

fn print_text(display: Rect, layout: &Layout) {
    println!(
        "geometry  {} ({} InfoBoxes, {}x{})",
        layout.geometry,
        layout.count(),
        layout.tile_size.width,
        layout.tile_size.height
    );
    println!("display   {}", display);
    for (slot, tile) in layout.tiles().iter().enumerate() {
        println!("slot {:>2}   {}", slot, tile);
    }
    println!("map       {}", layout.remaining);
}

fn print_fields(page: &PageLayout) {
    println!("page      {}", page.name);
    for field in page.info_boxes() {
        let pos = field.position();
        println!(
            "{:<12} slot {:>2}  at ({}, {}) {}x{} border {}",
            field.name,
            field.slot().unwrap_or_default(),
            pos.x,
            pos.y,
            field.width(),
            field.height(),
            field.border
        );
    }
    match page.main_view() {
        Some(map) => {
            let pos = map.position();
            println!("{:<12}          at ({}, {}) {}x{}", map.name, pos.x, pos.y, map.width(), map.height());
        }
        None => println!("main_view    hidden"),
    }
}
