//! The persisted configuration record.
//!
//! One record describes every user-chosen display setting plus the ordered list of
//! image references. It is stored as pretty-printed JSON and overwritten on each save.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{AssetRef, Background};
use crate::constants::{
    DEFAULT_AGE, DEFAULT_ANIMATION_SPEED, DEFAULT_FLOWER_COUNT, DEFAULT_FONT_SIZE,
    DEFAULT_IMAGE_SIZE, DEFAULT_RECIPIENT_NAME, DEFAULT_SENDER, DEFAULT_TEXT_COLOR,
    DEFAULT_TEXT_COLOR2, MAX_IMAGES,
};

/// User display settings.
///
/// Every field falls back to its built-in default when absent from a loaded record,
/// so a partial file still yields a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Configuration {
    pub recipient_name: String,
    #[validate(range(min = 1))]
    pub age: u32,
    pub sender: String,
    /// Main greeting color (`#RRGGBB`)
    pub text_color: String,
    /// Sender line color, also the second stop of the color animation
    pub text_color2: String,
    pub font_size: u32,
    pub background: Background,
    /// Seconds per color animation cycle
    pub animation_speed: u32,
    pub flower_count: u32,
    /// Display width of each additional image, in pixels
    pub image_size: u32,
    #[validate(length(max = 3))]
    pub image_paths: Vec<AssetRef>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            recipient_name: DEFAULT_RECIPIENT_NAME.to_string(),
            age: DEFAULT_AGE,
            sender: DEFAULT_SENDER.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            text_color2: DEFAULT_TEXT_COLOR2.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            background: Background::default(),
            animation_speed: DEFAULT_ANIMATION_SPEED,
            flower_count: DEFAULT_FLOWER_COUNT,
            image_size: DEFAULT_IMAGE_SIZE,
            image_paths: Vec::new(),
        }
    }
}

impl Configuration {
    /// Built-in defaults used on first run or when the saved record is unreadable
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Convert to pretty JSON for the configuration file
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from the configuration file contents
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace the image list, keeping at most `MAX_IMAGES` references in order
    pub fn set_images(&mut self, references: impl IntoIterator<Item = AssetRef>) {
        self.image_paths = references.into_iter().take(MAX_IMAGES).collect();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
