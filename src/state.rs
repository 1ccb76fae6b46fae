//! Application state owned by the UI thread
//!
//! This module holds the data the window renders each frame:
//! - **DisplaySurface**: the most recently generated QR bitmap
//! - **Notices**: the queue of transient, auto-dismissing messages
//! - **AppState**: the two above plus the text input and About panel flag
//!
//! Nothing here is shared with worker threads; results from the generate
//! worker reach it through `GenerateHandler::poll`.

use egui::ColorImage;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// The slot showing the latest generated image
#[derive(Clone, Debug, Default)]
pub struct DisplaySurface {
    image: Option<ColorImage>,
    /// Bumped on every update so the UI knows when to re-upload the texture
    revision: u64,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed image
    pub fn set_image(&mut self, image: ColorImage) {
        self.image = Some(image);
        self.revision += 1;
    }

    pub fn image(&self) -> Option<&ColorImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Notice severity, used for styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient user-visible message
#[derive(Clone, Debug)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    /// Set when the notice first becomes visible
    shown_at: Option<Instant>,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: None,
        }
    }
}

/// Queue of transient notices.
///
/// Only the front notice is visible. Its timeout starts counting when it
/// reaches the front, after which it is dismissed and the next one shows.
#[derive(Clone, Debug)]
pub struct Notices {
    queue: VecDeque<Notice>,
    timeout: Duration,
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl Notices {
    pub fn new(timeout: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            timeout,
        }
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.queue.push_back(Notice::new(kind, message));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message);
    }

    /// Dismiss expired notices and return the visible one, if any.
    ///
    /// Also returns how long the visible notice has left, so the caller can
    /// schedule a repaint.
    pub fn visible(&mut self, now: Instant) -> Option<(&Notice, Duration)> {
        loop {
            let front = self.queue.front_mut()?;
            let shown_at = *front.shown_at.get_or_insert(now);
            let elapsed = now.saturating_duration_since(shown_at);
            if elapsed < self.timeout {
                break;
            }
            self.queue.pop_front();
        }

        let remaining = self.timeout.saturating_sub(
            self.queue
                .front()
                .and_then(|n| n.shown_at)
                .map(|t| now.saturating_duration_since(t))
                .unwrap_or_default(),
        );
        self.queue.front().map(|n| (n, remaining))
    }

    /// Dismiss the visible notice immediately
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    /// Messages of all queued notices, oldest first
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(|n| n.message.as_str())
    }

    /// Most recently pushed notice
    pub fn latest(&self) -> Option<&Notice> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Central UI state
#[derive(Debug)]
pub struct AppState {
    /// Current text input
    pub input_text: String,
    /// Latest generated image
    pub display: DisplaySurface,
    /// Transient notices
    pub notices: Notices,
    /// Whether the About panel is open
    pub show_about: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}

impl AppState {
    pub fn new(notice_timeout: Duration) -> Self {
        Self {
            input_text: String::new(),
            display: DisplaySurface::new(),
            notices: Notices::new(notice_timeout),
            show_about: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_image() -> ColorImage {
        ColorImage::from_rgba_unmultiplied([1, 1], &[0, 0, 0, 255])
    }

    #[test]
    fn test_display_revision_bumps() {
        let mut display = DisplaySurface::new();
        assert!(!display.has_image());
        assert_eq!(display.revision(), 0);

        display.set_image(tiny_image());
        display.set_image(tiny_image());
        assert!(display.has_image());
        assert_eq!(display.revision(), 2);
    }

    #[test]
    fn test_notice_expires_after_timeout() {
        let mut notices = Notices::new(Duration::from_secs(3));
        notices.info("hello");

        let t0 = Instant::now();
        let (notice, remaining) = notices.visible(t0).unwrap();
        assert_eq!(notice.message, "hello");
        assert_eq!(remaining, Duration::from_secs(3));

        assert!(notices.visible(t0 + Duration::from_secs(2)).is_some());
        assert!(notices.visible(t0 + Duration::from_secs(3)).is_none());
        assert!(notices.is_empty());
    }

    #[test]
    fn test_notices_show_one_at_a_time() {
        let mut notices = Notices::new(Duration::from_secs(3));
        notices.info("first");
        notices.error("second");

        let t0 = Instant::now();
        assert_eq!(notices.visible(t0).unwrap().0.message, "first");

        // Second notice's timer starts only once it is visible
        let t1 = t0 + Duration::from_secs(4);
        let (notice, remaining) = notices.visible(t1).unwrap();
        assert_eq!(notice.message, "second");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(remaining, Duration::from_secs(3));
    }

    #[test]
    fn test_dismiss_and_latest() {
        let mut notices = Notices::default();
        notices.info("a");
        notices.success("b");
        assert_eq!(notices.latest().unwrap().message, "b");
        assert_eq!(notices.messages().collect::<Vec<_>>(), vec!["a", "b"]);

        notices.dismiss();
        assert_eq!(notices.len(), 1);
    }
}
