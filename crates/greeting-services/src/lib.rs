//! Greeting Services Library
//!
//! `GreetingService` runs one render cycle: load the saved settings, store uploads,
//! save on request, and resolve the background and gallery images into data the
//! presentation layer can embed directly.

pub mod greeting;
pub mod types;

pub use greeting::GreetingService;
pub use types::{
    BackgroundSource, ImageGallery, PageData, ResolvedImage, SkipReason, SkippedImage, Upload,
};
