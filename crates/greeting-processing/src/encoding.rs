//! Text-safe encodings for embedding images directly in a page.

use base64::{engine::general_purpose::STANDARD, Engine};
use greeting_core::constants::DISPLAY_MIME_TYPE;

/// Standard base64 of the raster bytes
pub fn to_inline_encoding(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// `data:image/png;base64,...` URI for an `<img src>` or CSS `url()`
pub fn to_data_uri(data: &[u8]) -> String {
    format!("data:{};base64,{}", DISPLAY_MIME_TYPE, to_inline_encoding(data))
}
