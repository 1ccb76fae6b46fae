//! QR code pipeline
//!
//! Text goes through three stages:
//! - **Payload**: optional URL shaping of the input
//! - **Encoder**: `qrcode` modules rendered into a PNG
//! - **Render**: PNG decoded and scaled to the display bitmap

mod encoder;
mod payload;
mod render;

pub use encoder::{EncodedQr, QrEncoder};
pub use payload::{Payload, PayloadKind};
pub use render::{scale_to_display, QrPipeline, QrRenderer};
