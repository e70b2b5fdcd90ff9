//! Logo assets: decodes uploaded logo payloads into RGB pixels.
//!
//! Logos arrive as data URLs (`data:image/png;base64,...`) or as bare base64.
//! Decoding is done per label instance by the renderers, which fall back to a
//! placeholder mark when it fails instead of aborting the document.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use image::{Rgb, RgbImage};

use crate::error::LabelError;

/// A decoded logo, alpha already composited onto white.
///
/// Cheap to clone: the pixel buffer is shared.
#[derive(Clone)]
pub struct LogoImage {
    pixels: Arc<RgbImage>,
}

impl LogoImage {
    pub fn new(pixels: RgbImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f32 {
        if self.height() == 0 {
            return 1.0;
        }
        self.width() as f32 / self.height() as f32
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

impl fmt::Debug for LogoImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogoImage({}x{})", self.width(), self.height())
    }
}

impl PartialEq for LogoImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels) || *self.pixels == *other.pixels
    }
}

/// Strip a `data:image/...;base64,` prefix if present.
fn strip_data_url(payload: &str) -> &str {
    let trimmed = payload.trim();
    match trimmed.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map(|(_, body)| body).unwrap_or(""),
        None => trimmed,
    }
}

/// Decode a logo payload (data URL or bare base64) into an RGB image.
pub fn decode_logo(payload: &str) -> Result<LogoImage, LabelError> {
    let body = strip_data_url(payload);
    if body.is_empty() {
        return Err(LabelError::Asset("logo payload is empty".into()));
    }

    let bytes = BASE64_STANDARD
        .decode(body)
        .map_err(|e| LabelError::Asset(format!("Base64 decode error: {}", e)))?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| LabelError::Asset(format!("Failed to decode image: {}", e)))?;

    // Composite against white so transparent logos print cleanly
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut rgb = RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        let over_white = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
        rgb.put_pixel(x, y, Rgb([over_white(r), over_white(g), over_white(b)]));
    }

    Ok(LogoImage::new(rgb))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    /// A small PNG logo encoded as a data URL.
    pub(crate) fn png_data_url(width: u32, height: u32, pixel: [u8; 4]) -> String {
        let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        format!("data:image/png;base64,{}", BASE64_STANDARD.encode(bytes))
    }

    #[test]
    fn test_decode_data_url() {
        let logo = decode_logo(&png_data_url(4, 2, [255, 0, 0, 255])).unwrap();
        assert_eq!(logo.width(), 4);
        assert_eq!(logo.height(), 2);
        assert_eq!(logo.aspect(), 2.0);
        assert_eq!(logo.pixels().get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_decode_bare_base64() {
        let url = png_data_url(1, 1, [0, 0, 0, 255]);
        let bare = url.split_once(',').unwrap().1;
        assert!(decode_logo(bare).is_ok());
    }

    #[test]
    fn test_transparent_becomes_white() {
        let logo = decode_logo(&png_data_url(1, 1, [0, 0, 0, 0])).unwrap();
        assert_eq!(logo.pixels().get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_invalid_base64() {
        let err = decode_logo("data:image/png;base64,@@@not-base64@@@").unwrap_err();
        assert!(matches!(err, LabelError::Asset(_)));
    }

    #[test]
    fn test_not_an_image() {
        let payload = format!(
            "data:image/png;base64,{}",
            BASE64_STANDARD.encode(b"definitely not a png")
        );
        assert!(matches!(decode_logo(&payload), Err(LabelError::Asset(_))));
    }

    #[test]
    fn test_empty_payload() {
        assert!(matches!(decode_logo("data:image/png;base64,"), Err(LabelError::Asset(_))));
        assert!(matches!(decode_logo("   "), Err(LabelError::Asset(_))));
    }
}
