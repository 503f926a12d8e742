//! Application-wide constants: storage layout, record defaults and slider bounds.

use std::ops::RangeInclusive;

/// Storage root used when `GREETING_STORAGE_ROOT` is not set
pub const DEFAULT_STORAGE_ROOT: &str = "saved_birthday_data";

/// File name of the persisted configuration record, relative to the storage root
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Directory holding uploaded images, relative to the storage root
pub const ASSET_DIR_NAME: &str = "images";

/// Maximum number of additional images shown on the page
pub const MAX_IMAGES: usize = 3;

// Record defaults
pub const DEFAULT_RECIPIENT_NAME: &str = "recipient";
pub const DEFAULT_AGE: u32 = 59;
pub const DEFAULT_SENDER: &str = "family";
pub const DEFAULT_TEXT_COLOR: &str = "#FF69B4";
pub const DEFAULT_TEXT_COLOR2: &str = "#4B0082";
pub const DEFAULT_FONT_SIZE: u32 = 72;
pub const DEFAULT_IMAGE_SIZE: u32 = 200;
pub const DEFAULT_ANIMATION_SPEED: u32 = 3;
pub const DEFAULT_FLOWER_COUNT: u32 = 20;

// Slider bounds offered by the presentation layer
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 40..=100;
pub const IMAGE_SIZE_RANGE: RangeInclusive<u32> = 100..=300;
pub const ANIMATION_SPEED_RANGE: RangeInclusive<u32> = 1..=10;
pub const FLOWER_COUNT_RANGE: RangeInclusive<u32> = 5..=50;

/// Largest width or height of a rendered display image, in pixels
pub const MAX_DISPLAY_DIMENSION: u32 = 4096;

/// MIME type of every re-encoded display image
pub const DISPLAY_MIME_TYPE: &str = "image/png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_slider_bounds() {
        assert!(FONT_SIZE_RANGE.contains(&DEFAULT_FONT_SIZE));
        assert!(IMAGE_SIZE_RANGE.contains(&DEFAULT_IMAGE_SIZE));
        assert!(ANIMATION_SPEED_RANGE.contains(&DEFAULT_ANIMATION_SPEED));
        assert!(FLOWER_COUNT_RANGE.contains(&DEFAULT_FLOWER_COUNT));
    }
}
