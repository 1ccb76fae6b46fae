//! Decoding and scaling of encoded QR images, and the renderer seam used by
//! the generate handler.

use crate::config::QrConfig;
use crate::qr::{EncodedQr, Payload, PayloadKind, QrEncoder};
use crate::Result;
use egui::ColorImage;
use image::imageops::FilterType;
use image::ImageFormat;

/// Turns input text into a displayable bitmap.
///
/// Implementations run on a worker thread, so they must be `Send + Sync`.
pub trait QrRenderer: Send + Sync {
    fn render(&self, text: &str) -> Result<ColorImage>;
}

/// Decode a PNG-encoded QR image and scale it to `size` x `size` with
/// bilinear filtering.
pub fn scale_to_display(encoded: &EncodedQr, size: u32) -> Result<ColorImage> {
    let decoded = image::load_from_memory_with_format(&encoded.png, ImageFormat::Png)?;
    let rgba = decoded.resize_exact(size, size, FilterType::Triangle).to_rgba8();

    Ok(ColorImage::from_rgba_unmultiplied(
        [rgba.width() as usize, rgba.height() as usize],
        rgba.as_raw(),
    ))
}

/// The production pipeline: payload shaping, encoding, then scaling
#[derive(Clone, Debug)]
pub struct QrPipeline {
    encoder: QrEncoder,
    payload: PayloadKind,
    display_size: u32,
}

impl Default for QrPipeline {
    fn default() -> Self {
        Self::from_config(&QrConfig::default())
    }
}

impl QrPipeline {
    pub fn from_config(config: &QrConfig) -> Self {
        Self {
            encoder: QrEncoder::from_config(config),
            payload: config.payload,
            display_size: config.display_size,
        }
    }

    pub fn display_size(&self) -> u32 {
        self.display_size
    }
}

impl QrRenderer for QrPipeline {
    fn render(&self, text: &str) -> Result<ColorImage> {
        let payload = Payload::new(self.payload, text);
        let encoded = self.encoder.encode(&payload)?;
        scale_to_display(&encoded, self.display_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TinyQrError;
    use egui::Color32;

    #[test]
    fn test_pipeline_renders_display_size() {
        let image = QrPipeline::default().render("https://example.com").unwrap();
        assert_eq!(image.size, [250, 250]);
    }

    #[test]
    fn test_pipeline_corners_are_quiet_zone() {
        let image = QrPipeline::default().render("hello").unwrap();
        // The quiet zone is light, so the top-left pixel is white
        assert_eq!(image.pixels[0], Color32::WHITE);
    }

    #[test]
    fn test_pipeline_contains_dark_modules() {
        let image = QrPipeline::default().render("hello").unwrap();
        assert!(image.pixels.iter().any(|p| p.r() < 64));
    }

    #[test]
    fn test_scale_custom_size() {
        let encoded = QrEncoder::default().encode(&Payload::text("abc")).unwrap();
        let image = scale_to_display(&encoded, 100).unwrap();
        assert_eq!(image.size, [100, 100]);
    }

    #[test]
    fn test_scale_rejects_garbage() {
        let encoded = EncodedQr {
            png: vec![1, 2, 3, 4],
            modules: 21,
            dimension: 21,
        };
        let err = scale_to_display(&encoded, 100).unwrap_err();
        assert!(matches!(err, TinyQrError::Render(_)));
    }

    #[test]
    fn test_pipeline_propagates_encode_error() {
        let text = "x".repeat(8000);
        let err = QrPipeline::default().render(&text).unwrap_err();
        assert!(matches!(err, TinyQrError::Encode(_)));
    }
}
