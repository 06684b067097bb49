use serde::{Deserialize, Serialize};
use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;
use log::LevelFilter;

use crate::constants::{DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH};
use crate::display::{Geometry, Rect};

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// General options
    pub log_level: Option<String>,     // e.g., "info" | "debug"
    /// display bounds the panel is laid out on
    pub display: Option<DisplayConfig>,
    /// profile holding the stored geometry
    pub profile: Option<PathBuf>,
    /// one-off geometry, validated like a stored one
    pub geometry: Option<Geometry>,
    /// hide the InfoBoxes, map takes the whole display
    pub fullscreen: Option<bool>,
    /// how the layout is printed
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub left: Option<i32>,
    pub top: Option<i32>,
}

impl DisplayConfig {
    /// Display rectangle, missing values fall back to an 800x480 screen at the origin
    ///
    /// Edges that would pass `i32::MAX` are pinned there; `validate` rejects
    /// such configurations before they reach the panel.
    pub fn rect(&self) -> Rect {
        let (left, top, right, bottom) = self.edges();
        Rect::new(
            left,
            top,
            right.unwrap_or(i32::MAX),
            bottom.unwrap_or(i32::MAX),
        )
    }

    /// Left/top edges and the right/bottom edges, `None` when they overflow
    fn edges(&self) -> (i32, i32, Option<i32>, Option<i32>) {
        let left = self.left.unwrap_or(0);
        let top = self.top.unwrap_or(0);
        let width = i32::try_from(self.width.unwrap_or(DEFAULT_DISPLAY_WIDTH)).ok();
        let height = i32::try_from(self.height.unwrap_or(DEFAULT_DISPLAY_HEIGHT)).ok();
        (
            left,
            top,
            width.and_then(|w| left.checked_add(w)),
            height.and_then(|h| top.checked_add(h)),
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
    /// named page fields handed to the window host
    Fields,
}

impl Config {
    pub fn display_rect(&self) -> Rect {
        self.display.clone().unwrap_or_default().rect()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Effective log level, `info` unless configured
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|l| l.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "infodeck", version, about = "InfoBox panel layout", disable_help_flag = false)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, short = 'c', value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    /// Enable debug log level
    #[arg(long, short = 'v', alias = "verbose", action = ArgAction::SetTrue)]
    pub debug: bool,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long, short = 'W')]
    pub display_width: Option<u32>,
    #[arg(long, short = 'H')]
    pub display_height: Option<u32>,
    #[arg(long, allow_hyphen_values = true)]
    pub display_left: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    pub display_top: Option<i32>,
    /// Profile file holding the stored geometry
    #[arg(long, short = 'p', value_hint = ValueHint::FilePath)]
    pub profile: Option<PathBuf>,
    /// InfoBox geometry (top-bottom4x4, bottom8, top8, left-right4x4, left8, right8, gnav, square, right12)
    #[arg(long, short = 'g')]
    pub geometry: Option<Geometry>,
    /// store --geometry in the profile instead of using it once
    #[arg(long, action = ArgAction::SetTrue, requires = "geometry")]
    pub save: bool,
    #[arg(long, short = 'f', action = ArgAction::Set)]
    pub fullscreen: Option<bool>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// list every geometry with its InfoBox count and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub list: bool,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

impl Cli {
    /// Log level from the command line alone, used until the config is resolved
    pub fn provisional_level(&self) -> LevelFilter {
        if self.debug {
            return LevelFilter::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(|l| l.parse().ok())
            .unwrap_or(LevelFilter::Info)
    }
}

/// Public entry point: read YAML, merge CLI overrides, validate.
pub fn resolve(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        log::debug!("Using config {}", p.display());
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/infodeck/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/infodeck/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/infodeck.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["infodeck.yaml", "config.yaml", "config/infodeck.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    // top-level
    if src.log_level.is_some()   { dst.log_level = src.log_level; }
    if src.profile.is_some()     { dst.profile = src.profile; }
    if src.geometry.is_some()    { dst.geometry = src.geometry; }
    if src.fullscreen.is_some()  { dst.fullscreen = src.fullscreen; }
    if src.format.is_some()      { dst.format = src.format; }
    // display
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.width.is_some()   { dst.width = src.width; }
    if src.height.is_some()  { dst.height = src.height; }
    if src.left.is_some()    { dst.left = src.left; }
    if src.top.is_some()     { dst.top = src.top; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some()   { cfg.log_level = cli.log_level.clone(); }
    if cli.debug                 { cfg.log_level = Some("debug".to_string()); }
    if cli.profile.is_some()     { cfg.profile = cli.profile.clone(); }
    if cli.geometry.is_some()    { cfg.geometry = cli.geometry; }
    if cli.fullscreen.is_some()  { cfg.fullscreen = cli.fullscreen; }
    if cli.format.is_some()      { cfg.format = cli.format; }

    let any_display = cli.display_width.is_some()
        || cli.display_height.is_some()
        || cli.display_left.is_some()
        || cli.display_top.is_some();

    if any_display && cfg.display.is_none() {
        cfg.display = Some(DisplayConfig::default());
    }
    if let Some(display) = cfg.display.as_mut() {
        if cli.display_width.is_some()   { display.width = cli.display_width; }
        if cli.display_height.is_some()  { display.height = cli.display_height; }
        if cli.display_left.is_some()    { display.left = cli.display_left; }
        if cli.display_top.is_some()     { display.top = cli.display_top; }
    }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(display) = cfg.display.as_ref() {
        if display.width == Some(0) || display.height == Some(0) {
            return Err(ConfigError::Validation("display width/height must be > 0".into()));
        }
        for extent in [display.width, display.height].into_iter().flatten() {
            if extent > i32::MAX as u32 / 2 {
                return Err(ConfigError::Validation(format!("display extent {} too large", extent)));
            }
        }
        let (left, top, right, bottom) = display.edges();
        if right.is_none() || bottom.is_none() {
            return Err(ConfigError::Validation(format!(
                "display at ({}, {}) runs past the pixel range",
                left, top
            )));
        }
    }
    if let Some(level) = cfg.log_level.as_deref() {
        match level.to_ascii_lowercase().as_str() {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => {},
            _ => return Err(ConfigError::Validation(format!("unknown log_level '{}'", level))),
        }
    }
    Ok(())
}
