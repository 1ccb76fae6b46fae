//! Error types for TinyQR
//!
//! Every failure inside the generate pipeline is caught and surfaced to the
//! user as a single "generation failed" notice. The variants only exist so
//! logs can tell the stages apart.

use thiserror::Error;

/// TinyQR application errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TinyQrError {
    /// The text could not be turned into a QR code (usually too long)
    #[error("QR encoding error: {0}")]
    Encode(String),

    /// The encoded QR code could not be decoded or scaled for display
    #[error("Render error: {0}")]
    Render(String),

    /// The background worker failed (spawn failure or panic)
    #[error("Worker error: {0}")]
    Worker(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<qrcode::types::QrError> for TinyQrError {
    fn from(e: qrcode::types::QrError) -> Self {
        TinyQrError::Encode(e.to_string())
    }
}

impl From<image::ImageError> for TinyQrError {
    fn from(e: image::ImageError) -> Self {
        TinyQrError::Render(e.to_string())
    }
}

impl TinyQrError {
    /// The underlying message without the stage prefix.
    ///
    /// This is what ends up in the "Error generating QR code: ..." notice.
    pub fn detail(&self) -> &str {
        match self {
            TinyQrError::Encode(msg)
            | TinyQrError::Render(msg)
            | TinyQrError::Worker(msg)
            | TinyQrError::Config(msg) => msg,
        }
    }
}

/// Result type alias for TinyQR operations
pub type Result<T> = std::result::Result<T, TinyQrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_strips_prefix() {
        let err = TinyQrError::Render("boom".to_string());
        assert_eq!(err.to_string(), "Render error: boom");
        assert_eq!(err.detail(), "boom");
    }

    #[test]
    fn test_qr_error_converts_to_encode() {
        let err: TinyQrError = qrcode::types::QrError::DataTooLong.into();
        assert!(matches!(err, TinyQrError::Encode(_)));
        assert_eq!(err.detail(), "data too long");
    }
}
