//! Booking configuration loaded from JSON
//!
//! ```json
//! {
//!   "layout": { "item_size": 1, "viewport_length": 5 },
//!   "centered_layout": { "item_size": 1, "viewport_length": 7 },
//!   "centering": "legacy",
//!   "keymap": { "next": ["n", "down"] }
//! }
//! ```
//!
//! Every field is optional. Keymap entries replace the default keys of the
//! commands they name.

use std::fs;
use std::path::Path;

use scroll_picker::{Centering, ConfigError, PickerLayout};
use scroll_picker_core::PickerKeymap;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfig {
    /// Layout of the date and time pickers
    pub layout: PickerLayout,
    /// Layout of the tournament selector
    pub centered_layout: PickerLayout,
    pub centering: Centering,
    pub keymap: PickerKeymap,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            layout: PickerLayout::vertical(1.0, 5.0),
            centered_layout: PickerLayout::vertical(1.0, 5.0),
            centering: Centering::Standard,
            keymap: PickerKeymap::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    layout: Option<PickerLayout>,
    centered_layout: Option<PickerLayout>,
    centering: Option<Centering>,
    keymap: Option<PickerKeymap>,
}

impl BookingConfig {
    /// Parse and validate a config, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let defaults = Self::default();

        let config = Self {
            layout: raw.layout.unwrap_or(defaults.layout),
            centered_layout: raw.centered_layout.unwrap_or(defaults.centered_layout),
            centering: raw.centering.unwrap_or(defaults.centering),
            keymap: match raw.keymap {
                Some(user) => PickerKeymap::merge(defaults.keymap, user),
                None => defaults.keymap,
            },
        };
        config.layout.validate()?;
        config.centered_layout.validate()?;
        Ok(config)
    }

    /// Read a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}
