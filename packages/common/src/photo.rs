//! Photo pipeline: decode whatever was uploaded, shrink it into a bounding
//! box and store it as a single fixed encoding.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};
use thiserror::Error;

/// Content type of every processed photo.
pub const PHOTO_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoSettings {
    pub max_width: u32,
    pub max_height: u32,
    /// JPEG quality, 1-100.
    pub quality: u8,
}

impl Default for PhotoSettings {
    fn default() -> Self {
        Self {
            max_width: 2000,
            max_height: 2000,
            quality: 85,
        }
    }
}

/// Decode `raw`, fit it inside the bounding box and re-encode it.
///
/// Aspect ratio is preserved and images already inside the box are never
/// upscaled. Transparency is flattened since the output has no alpha channel.
pub fn process_image(raw: &[u8], settings: &PhotoSettings) -> Result<Vec<u8>, PhotoError> {
    let reader = ImageReader::new(Cursor::new(raw))
        .with_guessed_format()
        .map_err(|e| PhotoError::Decode(e.to_string()))?;

    if reader.format().is_none() {
        return Err(PhotoError::UnsupportedFormat(
            "could not detect image format".into(),
        ));
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(inner) => PhotoError::UnsupportedFormat(inner.to_string()),
        other => PhotoError::Decode(other.to_string()),
    })?;

    let (width, height) = (img.width(), img.height());
    let img = if width > settings.max_width || height > settings.max_height {
        img.resize(settings.max_width, settings.max_height, FilterType::Lanczos3)
    } else {
        img
    };

    tracing::debug!(
        source_width = width,
        source_height = height,
        width = img.width(),
        height = img.height(),
        "Processed photo"
    );

    encode_jpeg(img, settings.quality)
}

fn encode_jpeg(img: DynamicImage, quality: u8) -> Result<Vec<u8>, PhotoError> {
    let rgb = DynamicImage::ImageRgb8(img.into_rgb8());
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder)
        .map_err(|e| PhotoError::Encode(e.to_string()))?;
    Ok(buf)
}
