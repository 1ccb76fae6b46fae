//! QR encoding to PNG bytes

use crate::config::QrConfig;
use crate::qr::Payload;
use crate::Result;
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;
use tracing::debug;

/// Quiet zone width in modules on each side (fixed by the QR standard)
const QUIET_ZONE_MODULES: u32 = 4;

/// A QR code rendered to an encoded PNG image
#[derive(Clone, Debug)]
pub struct EncodedQr {
    /// PNG file bytes
    pub png: Vec<u8>,
    /// Number of modules per side, excluding the quiet zone
    pub modules: usize,
    /// Edge length of the PNG in pixels
    pub dimension: u32,
}

/// Encodes payloads into PNG-encoded QR images
#[derive(Clone, Debug)]
pub struct QrEncoder {
    module_pixels: u32,
    max_dimension: u32,
    quiet_zone: bool,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::from_config(&QrConfig::default())
    }
}

impl QrEncoder {
    pub fn from_config(config: &QrConfig) -> Self {
        Self {
            module_pixels: config.module_pixels.max(1),
            max_dimension: config.max_encoded_dimension,
            quiet_zone: config.quiet_zone,
        }
    }

    /// Pixels per module for a code `modules` wide, shrunk so the image
    /// stays within the configured maximum.
    fn pixels_per_module(&self, modules: usize) -> u32 {
        let total = modules as u32 + if self.quiet_zone { 2 * QUIET_ZONE_MODULES } else { 0 };
        let fit = self.max_dimension / total.max(1);
        self.module_pixels.min(fit).max(1)
    }

    /// Encode a payload at error-correction level M
    pub fn encode(&self, payload: &Payload) -> Result<EncodedQr> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)?;
        let modules = code.width();
        let px = self.pixels_per_module(modules);

        let quiet = if self.quiet_zone { QUIET_ZONE_MODULES } else { 0 };
        let dimension = (modules as u32 + 2 * quiet) * px;

        let mut img = GrayImage::from_pixel(dimension, dimension, Luma([255u8]));
        for (i, color) in code.to_colors().iter().enumerate() {
            if *color != Color::Dark {
                continue;
            }
            let x = (i % modules) as u32 + quiet;
            let y = (i / modules) as u32 + quiet;
            for dy in 0..px {
                for dx in 0..px {
                    img.put_pixel(x * px + dx, y * px + dy, Luma([0u8]));
                }
            }
        }

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(img).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        debug!(
            "[QR] Encoded {} bytes into {} modules, {}px image ({} bytes PNG)",
            payload.as_bytes().len(),
            modules,
            dimension,
            png.len()
        );

        Ok(EncodedQr {
            png,
            modules,
            dimension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TinyQrError;

    #[test]
    fn test_encode_produces_png() {
        let encoded = QrEncoder::default()
            .encode(&Payload::text("https://example.com"))
            .unwrap();

        assert!(encoded.png.starts_with(&[0x89, b'P', b'N', b'G']));
        assert!(encoded.modules >= 21);
        // 64px per module plus a 4-module quiet zone on both sides
        assert_eq!(encoded.dimension, (encoded.modules as u32 + 8) * 64);
    }

    #[test]
    fn test_module_size_shrinks_to_fit() {
        let config = QrConfig {
            max_encoded_dimension: 512,
            ..QrConfig::default()
        };
        let encoded = QrEncoder::from_config(&config)
            .encode(&Payload::text("shrink me to fit"))
            .unwrap();

        assert!(encoded.dimension <= 512);
    }

    #[test]
    fn test_without_quiet_zone() {
        let config = QrConfig {
            quiet_zone: false,
            module_pixels: 2,
            ..QrConfig::default()
        };
        let encoded = QrEncoder::from_config(&config)
            .encode(&Payload::text("abc"))
            .unwrap();

        assert_eq!(encoded.dimension, encoded.modules as u32 * 2);
    }

    #[test]
    fn test_data_too_long_is_encode_error() {
        let text = "x".repeat(8000);
        let err = QrEncoder::default().encode(&Payload::text(&text)).unwrap_err();
        assert!(matches!(err, TinyQrError::Encode(_)));
    }
}
