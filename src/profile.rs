/*
 *  profile.rs
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 *
 *  Persisted user profile - holds the chosen InfoBox geometry
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

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

use crate::constants::PROFILE_KEY_GEOMETRY;
use crate::display::Geometry;

/// Error type for profile loading/saving.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stored profile values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Raw geometry ordinal, validated only when read back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_box_geometry: Option<u32>,
}

/// Profile shared between the settings UI and layout recomputes
///
/// Readers take a snapshot under the lock, so a recompute sees either
/// the old or the new geometry, never a partial write.
#[derive(Debug, Default)]
pub struct ProfileStore {
    path: Option<PathBuf>,
    profile: RwLock<Profile>,
}

impl ProfileStore {
    /// Profile that lives only in memory
    pub fn in_memory(profile: Profile) -> Self {
        Self {
            path: None,
            profile: RwLock::new(profile),
        }
    }

    /// Load the profile at `path`; a missing file is an empty profile
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProfileError> {
        let path = path.into();
        let profile = if path.exists() {
            read_yaml(&path)?
        } else {
            log::debug!("No profile at {}, starting empty", path.display());
            Profile::default()
        };
        Ok(Self {
            path: Some(path),
            profile: RwLock::new(profile),
        })
    }

    /// Like `open`, but an unreadable profile degrades to an empty one
    pub fn open_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Ignoring profile {}: {}", path.display(), e);
                Self {
                    path: Some(path),
                    profile: RwLock::new(Profile::default()),
                }
            }
        }
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Copy of the current profile
    pub fn snapshot(&self) -> Profile {
        self.profile
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Stored geometry ordinal, `None` when the user never chose one
    pub fn geometry_ordinal(&self) -> Option<u32> {
        self.snapshot().info_box_geometry
    }

    /// Record an explicit user choice and write it to disk
    ///
    /// The write lock is held until the file is in place, so concurrent
    /// callers reach the disk in the same order they updated memory.
    pub fn set_geometry(&self, geometry: Geometry) -> Result<(), ProfileError> {
        let mut profile = self
            .profile
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        profile.info_box_geometry = Some(geometry.ordinal());
        log::info!("Profile {} set to {} ({})", PROFILE_KEY_GEOMETRY, geometry, geometry.ordinal());
        self.save(&profile)
    }

    /// Replace the backing file through a sibling temp file and rename
    fn save(&self, profile: &Profile) -> Result<(), ProfileError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let staging = path.with_extension("yaml.tmp");
        fs::write(&staging, serde_yaml::to_string(profile)?)?;
        fs::rename(&staging, path)?;
        log::debug!("Profile written to {}", path.display());
        Ok(())
    }
}

/// Default profile location: ~/.config/infodeck/profile.yaml
pub fn default_profile_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("infodeck").join("profile.yaml"))
}

fn read_yaml(path: &Path) -> Result<Profile, ProfileError> {
    let s = fs::read_to_string(path)?;
    if s.trim().is_empty() {
        return Ok(Profile::default());
    }
    let profile: Profile = serde_yaml::from_str(&s)?;
    Ok(profile)
}
