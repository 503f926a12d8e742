//! Image processing module
//!
//! - Dimension math and resampling (resize)
//! - Decode / resize / re-encode pipeline (renderer)

pub mod renderer;
pub mod resize;

pub use renderer::{ImageRenderer, RenderedImage};
pub use resize::ImageResize;
