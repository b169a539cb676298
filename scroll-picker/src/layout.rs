//! Layout configuration for pickers
//!
//! Layout constants are configuration, not negotiated at runtime: a host
//! loads them once (usually from JSON) and passes the same values on every
//! render.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{
    is_usable_size, spacer_length, CENTER_SPACER_DIVISOR, LEGACY_CENTER_SPACER_DIVISOR,
};

/// Errors raised while loading or validating picker configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("item_size must be a positive number, got {0}")]
    ItemSize(f32),

    #[error("viewport_length {viewport_length} is smaller than item_size {item_size}")]
    Viewport { viewport_length: f32, item_size: f32 },
}

/// Scroll direction of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Items stacked top to bottom; one slot is `item_size` rows
    #[default]
    Vertical,
    /// Items laid out left to right; one slot is `item_size` columns
    Horizontal,
}

/// Slot and viewport lengths of one axis, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerLayout {
    /// Length of one item slot along the scroll direction
    pub item_size: f32,
    /// Length of the visible window along the scroll direction
    pub viewport_length: f32,
    pub orientation: Orientation,
}

impl Default for PickerLayout {
    fn default() -> Self {
        Self {
            item_size: 1.0,
            viewport_length: 5.0,
            orientation: Orientation::Vertical,
        }
    }
}

impl PickerLayout {
    /// Vertical layout with the given slot and viewport lengths
    pub fn vertical(item_size: f32, viewport_length: f32) -> Self {
        Self {
            item_size,
            viewport_length,
            orientation: Orientation::Vertical,
        }
    }

    /// Horizontal layout with the given slot and viewport lengths
    pub fn horizontal(item_size: f32, viewport_length: f32) -> Self {
        Self {
            item_size,
            viewport_length,
            orientation: Orientation::Horizontal,
        }
    }

    /// Check the layout can drive an axis
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_usable_size(self.item_size) {
            return Err(ConfigError::ItemSize(self.item_size));
        }
        if !self.viewport_length.is_finite() || self.viewport_length < self.item_size {
            return Err(ConfigError::Viewport {
                viewport_length: self.viewport_length,
                item_size: self.item_size,
            });
        }
        Ok(())
    }

    /// Parse and validate a layout from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Whole cells one slot occupies on screen (at least one)
    pub fn slot_cells(&self) -> u16 {
        if is_usable_size(self.item_size) {
            self.item_size.round().clamp(1.0, f32::from(u16::MAX)) as u16
        } else {
            1
        }
    }
}

/// Which spacer formula a centered selector uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Centering {
    /// `(viewport - item) / 2`: selected item at dead center
    #[default]
    Standard,
    /// `(viewport - item) / 2.5`: the second selector variant's padding
    Legacy,
}

impl Centering {
    /// Divisor applied to the free viewport length
    pub fn divisor(self) -> f32 {
        match self {
            Centering::Standard => CENTER_SPACER_DIVISOR,
            Centering::Legacy => LEGACY_CENTER_SPACER_DIVISOR,
        }
    }

    /// Spacer length for a layout under this formula
    pub fn spacer(self, layout: &PickerLayout) -> f32 {
        spacer_length(layout.viewport_length, layout.item_size, self.divisor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PickerLayout::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_item_size() {
        let err = PickerLayout::vertical(0.0, 5.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::ItemSize(_)));

        let err = PickerLayout::vertical(f32::NAN, 5.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::ItemSize(_)));
    }

    #[test]
    fn test_validate_rejects_small_viewport() {
        let err = PickerLayout::horizontal(8.0, 4.0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Viewport { .. }));
        assert!(err.to_string().contains("smaller than item_size"));
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let layout = PickerLayout::from_json(r#"{ "item_size": 2.0 }"#).unwrap();
        assert_eq!(layout.item_size, 2.0);
        assert_eq!(layout.viewport_length, 5.0);
        assert_eq!(layout.orientation, Orientation::Vertical);

        let layout =
            PickerLayout::from_json(r#"{ "item_size": 9, "viewport_length": 45, "orientation": "horizontal" }"#)
                .unwrap();
        assert_eq!(layout.orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            PickerLayout::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PickerLayout::from_json(r#"{ "item_size": -1 }"#),
            Err(ConfigError::ItemSize(_))
        ));
    }

    #[test]
    fn test_slot_cells() {
        assert_eq!(PickerLayout::vertical(1.0, 5.0).slot_cells(), 1);
        assert_eq!(PickerLayout::vertical(2.4, 5.0).slot_cells(), 2);
        assert_eq!(PickerLayout::vertical(0.2, 5.0).slot_cells(), 1);
        assert_eq!(PickerLayout::vertical(0.0, 5.0).slot_cells(), 1);
    }

    #[test]
    fn test_centering_spacers() {
        let layout = PickerLayout::horizontal(10.0, 40.0);
        assert_eq!(Centering::Standard.spacer(&layout), 15.0);
        assert_eq!(Centering::Legacy.spacer(&layout), 12.0);
    }
}
