//! TinyQR - a tiny desktop QR code generator
//!
//! One window with a text field, a generate button and the rendered QR
//! code. Encoding runs on a worker thread; results are applied on the UI
//! thread.

pub mod config;
pub mod error;
pub mod processor;
pub mod qr;
pub mod state;
pub mod ui;

pub use config::AppConfig;
pub use error::{Result, TinyQrError};
pub use processor::{GenerateHandler, GenerateState, TriggerOutcome};
pub use qr::{QrPipeline, QrRenderer};
pub use state::{AppState, DisplaySurface, Notice, NoticeKind, Notices};
