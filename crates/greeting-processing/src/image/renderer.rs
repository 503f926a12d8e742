//! Image renderer - decode, scale to a display width, re-encode as PNG
//!
//! All functions work on in-memory bytes only; a failure never leaves anything
//! behind on disk.

use crate::error::RenderError;
use crate::image::resize::ImageResize;
use bytes::Bytes;
use greeting_core::constants::MAX_DISPLAY_DIMENSION;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::io::Cursor;

/// A display-ready raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    /// PNG bytes
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
}

/// Turns stored image bytes into display-ready PNGs
pub struct ImageRenderer;

impl ImageRenderer {
    /// Scale an image to `target_width`, keeping its aspect ratio, and re-encode as PNG.
    ///
    /// `target_width` must be positive and at most `MAX_DISPLAY_DIMENSION`; it is
    /// checked before any decoding happens. A resulting height above the same bound
    /// is rejected before any pixels are allocated.
    pub fn resize_to_width(data: &[u8], target_width: i64) -> Result<RenderedImage, RenderError> {
        let width = u32::try_from(target_width)
            .ok()
            .filter(|w| (1..=MAX_DISPLAY_DIMENSION).contains(w))
            .ok_or_else(|| {
                RenderError::InvalidArgument(format!(
                    "target width must be between 1 and {} pixels, got {}",
                    MAX_DISPLAY_DIMENSION, target_width
                ))
            })?;

        let img = Self::decode(data)?;
        let (orig_width, orig_height) = img.dimensions();
        let height = ImageResize::height_for_width(orig_width, orig_height, width);
        if height > MAX_DISPLAY_DIMENSION {
            return Err(RenderError::InvalidArgument(format!(
                "{}x{} image scaled to width {} would be {} pixels high, above the {} limit",
                orig_width, orig_height, width, height, MAX_DISPLAY_DIMENSION
            )));
        }

        tracing::debug!(
            orig_width,
            orig_height,
            width,
            height,
            "Resizing image for display"
        );

        let resized = ImageResize::resize_image(&img, width, height);
        Self::encode_png(&resized)
    }

    /// Re-encode an image as PNG at its original size
    pub fn to_png(data: &[u8]) -> Result<RenderedImage, RenderError> {
        let img = Self::decode(data)?;
        Self::encode_png(&img)
    }

    /// Width and height of an encoded image
    pub fn dimensions(data: &[u8]) -> Result<(u32, u32), RenderError> {
        Ok(Self::decode(data)?.dimensions())
    }

    fn decode(data: &[u8]) -> Result<DynamicImage, RenderError> {
        let reader = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| RenderError::DecodeFailed(e.to_string()))?;

        if reader.format().is_none() {
            return Err(RenderError::DecodeFailed(
                "unrecognized image format".to_string(),
            ));
        }

        let img = reader
            .decode()
            .map_err(|e| RenderError::DecodeFailed(e.to_string()))?;

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::DecodeFailed(format!(
                "image has no pixels ({}x{})",
                width, height
            )));
        }

        Ok(img)
    }

    fn encode_png(img: &DynamicImage) -> Result<RenderedImage, RenderError> {
        // PNG has no float sample formats
        let converted;
        let img = match img {
            DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                converted = DynamicImage::ImageRgba8(img.to_rgba8());
                &converted
            }
            _ => img,
        };

        let (width, height) = img.dimensions();
        let estimated_size = (width as usize) * (height as usize) * 3;
        let mut buffer = Vec::with_capacity(estimated_size);
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|e| RenderError::EncodeFailed(e.to_string()))?;

        Ok(RenderedImage {
            data: Bytes::from(buffer),
            width,
            height,
        })
    }
}
