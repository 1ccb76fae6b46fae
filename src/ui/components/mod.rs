//! UI components for the TinyQR window

pub mod about;
pub mod generate_button;
pub mod input_field;
pub mod qr_display;
pub mod toast;

pub use about::{AboutPanel, ABOUT_TITLE};
pub use generate_button::GenerateButton;
pub use input_field::{InputField, INPUT_PROMPT};
pub use qr_display::{QrDisplay, QrTexture};
pub use toast::ToastOverlay;
