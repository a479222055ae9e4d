//! Resizer settings.
//!
//! Every field has a default, so a settings file only needs the values it
//! wants to change:
//!
//! ```json
//! { "min_size": 32, "aspect_lock_modifier": "alt" }
//! ```

use crate::constants::{
    HANDLE_BACKGROUND, HANDLE_BORDER, HANDLE_OFFSET, HANDLE_SIZE, HANDLE_Z_INDEX, MIN_IMAGE_SIZE,
    OVERLAY_BORDER, OVERLAY_INSET, SETTINGS_DIR, SETTINGS_FILE,
};
use crate::error::{ResizerError, ResizerResult};
use crate::types::ModifierKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizerSettings {
    /// Floor for both width and height during a drag
    pub min_size: u32,
    /// Outward inset between the image border and the overlay frame
    pub overlay_inset: f32,
    pub handle_size: f32,
    /// Distance a handle protrudes past the overlay corner
    pub handle_offset: f32,
    pub overlay_border: String,
    pub handle_background: String,
    pub handle_border: String,
    pub handle_z_index: i32,
    /// Key that locks the aspect ratio while dragging
    pub aspect_lock_modifier: ModifierKey,
}

impl Default for ResizerSettings {
    fn default() -> Self {
        Self {
            min_size: MIN_IMAGE_SIZE,
            overlay_inset: OVERLAY_INSET,
            handle_size: HANDLE_SIZE,
            handle_offset: HANDLE_OFFSET,
            overlay_border: OVERLAY_BORDER.to_string(),
            handle_background: HANDLE_BACKGROUND.to_string(),
            handle_border: HANDLE_BORDER.to_string(),
            handle_z_index: HANDLE_Z_INDEX,
            aspect_lock_modifier: ModifierKey::default(),
        }
    }
}

impl ResizerSettings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json(json: &str) -> ResizerResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> ResizerResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the default location, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => {
                tracing::debug!(path = %path.display(), "Loaded resizer settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to load resizer settings: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> ResizerResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> ResizerResult<()> {
        if self.min_size == 0 {
            return Err(ResizerError::InvalidSettings(
                "min_size must be at least 1".to_string(),
            ));
        }
        if !self.overlay_inset.is_finite() || self.overlay_inset < 0.0 {
            return Err(ResizerError::InvalidSettings(format!(
                "overlay_inset must be a non-negative number, got {}",
                self.overlay_inset
            )));
        }
        if !self.handle_size.is_finite() || self.handle_size <= 0.0 {
            return Err(ResizerError::InvalidSettings(format!(
                "handle_size must be positive, got {}",
                self.handle_size
            )));
        }
        if !self.handle_offset.is_finite() {
            return Err(ResizerError::InvalidSettings(
                "handle_offset must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// `<config dir>/image-resizer/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}
