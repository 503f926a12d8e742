//! Greeting Image Processing Library
//!
//! This crate turns stored image bytes into something the page can show inline:
//! a proportionally scaled PNG plus its base64 / data URI encoding.

pub mod encoding;
pub mod error;
pub mod image;

// Re-export commonly used types
pub use encoding::{to_data_uri, to_inline_encoding};
pub use error::RenderError;
pub use crate::image::{ImageRenderer, ImageResize, RenderedImage};
