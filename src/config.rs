//! Application configuration
//!
//! All values are fixed at startup. There are no flags, files or
//! environment variables behind them.

use crate::qr::PayloadKind;
use crate::{Result, TinyQrError};
use std::time::Duration;

/// Top-level window settings
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Default inner size in logical pixels
    pub inner_size: [f32; 2],
    /// Minimum inner size in logical pixels
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "TinyQR".to_string(),
            inner_size: [420.0, 550.0],
            min_inner_size: [320.0, 420.0],
        }
    }
}

/// QR encode/render settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrConfig {
    /// Edge length of the displayed bitmap in pixels
    pub display_size: u32,
    /// Pixels per QR module in the encoded image
    pub module_pixels: u32,
    /// Upper bound for the encoded image edge; module size shrinks to fit
    pub max_encoded_dimension: u32,
    /// Whether to draw the quiet zone around the code
    pub quiet_zone: bool,
    /// How the input text is shaped before encoding
    pub payload: PayloadKind,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            display_size: 250,
            module_pixels: 64,
            max_encoded_dimension: 4096,
            quiet_zone: true,
            payload: PayloadKind::Text,
        }
    }
}

/// Configuration for the whole application
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub qr: QrConfig,
    /// How long a notice stays visible
    pub notice_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            qr: QrConfig::default(),
            notice_timeout: Duration::from_secs(3),
        }
    }
}

impl AppConfig {
    /// Set the displayed QR code size
    pub fn with_display_size(mut self, size: u32) -> Self {
        self.qr.display_size = size;
        self
    }

    /// Set the payload kind
    pub fn with_payload(mut self, payload: PayloadKind) -> Self {
        self.qr.payload = payload;
        self
    }

    /// Set the notice timeout
    pub fn with_notice_timeout(mut self, timeout: Duration) -> Self {
        self.notice_timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let [w, h] = self.window.inner_size;
        if !(w > 0.0 && h > 0.0) {
            return Err(TinyQrError::Config(format!(
                "window size must be positive, got {}x{}",
                w, h
            )));
        }

        let [min_w, min_h] = self.window.min_inner_size;
        if !(min_w > 0.0 && min_h > 0.0) {
            return Err(TinyQrError::Config(format!(
                "minimum window size must be positive, got {}x{}",
                min_w, min_h
            )));
        }
        if min_w > w || min_h > h {
            return Err(TinyQrError::Config(format!(
                "minimum window size {}x{} exceeds window size {}x{}",
                min_w, min_h, w, h
            )));
        }

        if self.qr.display_size == 0 {
            return Err(TinyQrError::Config("display size must be non-zero".to_string()));
        }

        if self.qr.module_pixels == 0 {
            return Err(TinyQrError::Config("module pixels must be non-zero".to_string()));
        }

        if self.qr.display_size > self.qr.max_encoded_dimension {
            return Err(TinyQrError::Config(format!(
                "display size {} exceeds max encoded dimension {}",
                self.qr.display_size, self.qr.max_encoded_dimension
            )));
        }

        if self.notice_timeout.is_zero() {
            return Err(TinyQrError::Config("notice timeout must be non-zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "TinyQR");
        assert_eq!(config.qr.display_size, 250);
        assert_eq!(config.qr.module_pixels, 64);
        assert_eq!(config.notice_timeout, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = AppConfig::default()
            .with_display_size(128)
            .with_payload(PayloadKind::Url)
            .with_notice_timeout(Duration::from_millis(500));

        assert_eq!(config.qr.display_size, 128);
        assert_eq!(config.qr.payload, PayloadKind::Url);
        assert_eq!(config.notice_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_validate_rejects_zero_display() {
        let config = AppConfig::default().with_display_size(0);
        assert!(matches!(config.validate(), Err(TinyQrError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_display() {
        let config = AppConfig::default().with_display_size(10_000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_window_size() {
        let mut config = AppConfig::default();
        config.window.inner_size = [f32::NAN, 550.0];
        assert!(matches!(config.validate(), Err(TinyQrError::Config(_))));
    }

    #[test]
    fn test_validate_checks_min_window_size() {
        let mut config = AppConfig::default();
        config.window.min_inner_size = [0.0, 420.0];
        assert!(config.validate().is_err());

        config.window.min_inner_size = [f32::NAN, 420.0];
        assert!(config.validate().is_err());

        config.window.min_inner_size = [500.0, 420.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = AppConfig::default().with_notice_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
