//! Generate interaction handler
//!
//! Reacts to the generate trigger: validates the input, runs the QR renderer
//! on a worker thread and applies the outcome back on the UI thread.
//!
//! The trigger is disabled while a generation is in flight, so there is never
//! more than one outstanding request. Results travel back over a channel that
//! the UI drains once per frame in [`GenerateHandler::poll`].

use crate::qr::QrRenderer;
use crate::state::{DisplaySurface, Notices};
use crate::{Result, TinyQrError};
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use egui::ColorImage;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Label of the trigger when idle
pub const GENERATE_LABEL: &str = "Generate QR Code";
/// Label of the trigger while a generation is in flight
pub const GENERATING_LABEL: &str = "Generating...";

pub const EMPTY_INPUT_NOTICE: &str = "Please enter text to generate a QR code";
pub const SUCCESS_NOTICE: &str = "QR code generated successfully";
pub const ERROR_NOTICE_PREFIX: &str = "Error generating QR code: ";

/// One in-flight request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingGeneration {
    pub text: String,
    pub issued_at: Instant,
}

/// Generate action state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GenerateState {
    /// Ready for a trigger
    #[default]
    Idle,
    /// Exactly one generation in flight
    Generating(PendingGeneration),
}

impl GenerateState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GenerateState::Idle)
    }

    pub fn is_generating(&self) -> bool {
        matches!(self, GenerateState::Generating(_))
    }
}

impl std::fmt::Display for GenerateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateState::Idle => write!(f, "Idle"),
            GenerateState::Generating(_) => write!(f, "Generating"),
        }
    }
}

/// What a trigger did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Input was blank; a notice was shown and nothing else happened
    EmptyInput,
    /// A generation was started
    Started,
    /// A generation is already in flight; the trigger was ignored
    Busy,
    /// The worker could not be started; an error notice was shown
    Failed,
}

/// Summary of a finished generation, returned once by `poll`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub succeeded: bool,
    pub elapsed: Duration,
}

/// Drives the generate action
pub struct GenerateHandler {
    renderer: Arc<dyn QrRenderer>,
    state: GenerateState,
    result_tx: Sender<Result<ColorImage>>,
    result_rx: Receiver<Result<ColorImage>>,
    /// Woken by the worker so the UI polls promptly
    repaint: Option<egui::Context>,
}

impl GenerateHandler {
    pub fn new(renderer: Arc<dyn QrRenderer>) -> Self {
        let (result_tx, result_rx) = bounded(4);
        Self {
            renderer,
            state: GenerateState::Idle,
            result_tx,
            result_rx,
            repaint: None,
        }
    }

    /// Register the context the worker should wake on completion
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn state(&self) -> &GenerateState {
        &self.state
    }

    pub fn is_generating(&self) -> bool {
        self.state.is_generating()
    }

    /// Whether the trigger control accepts clicks
    pub fn is_enabled(&self) -> bool {
        self.state.is_idle()
    }

    /// Current trigger label
    pub fn button_label(&self) -> &'static str {
        match self.state {
            GenerateState::Idle => GENERATE_LABEL,
            GenerateState::Generating(_) => GENERATING_LABEL,
        }
    }

    /// Handle a trigger with the current input text
    pub fn trigger(&mut self, input: &str, notices: &mut Notices) -> TriggerOutcome {
        if self.is_generating() {
            debug!("[GENERATE] Already generating, ignoring trigger");
            return TriggerOutcome::Busy;
        }

        if input.trim().is_empty() {
            debug!("[GENERATE] Blank input, nothing to encode");
            notices.info(EMPTY_INPUT_NOTICE);
            return TriggerOutcome::EmptyInput;
        }

        let text = input.to_string();
        self.state = GenerateState::Generating(PendingGeneration {
            text: text.clone(),
            issued_at: Instant::now(),
        });
        info!("[GENERATE] Started for {} bytes of input", text.len());

        match self.spawn_worker(text) {
            Ok(()) => TriggerOutcome::Started,
            Err(e) => {
                self.abort_pending(e, notices);
                TriggerOutcome::Failed
            }
        }
    }

    /// Drop the in-flight generation without a worker result
    fn abort_pending(&mut self, err: TinyQrError, notices: &mut Notices) {
        error!("[GENERATE] Aborted: {}", err);
        notices.error(format!("{}{}", ERROR_NOTICE_PREFIX, err.detail()));
        self.state = GenerateState::Idle;
    }

    fn spawn_worker(&self, text: String) -> Result<()> {
        let renderer = Arc::clone(&self.renderer);
        let tx = self.result_tx.clone();
        let repaint = self.repaint.clone();

        let spawned = thread::Builder::new()
            .name("qr-generate".to_string())
            .spawn(move || {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| renderer.render(&text)))
                    .unwrap_or_else(|payload| {
                        Err(TinyQrError::Worker(panic_message(&*payload)))
                    });

                if tx.send(outcome).is_err() {
                    warn!("[GENERATE] Handler dropped before result was delivered");
                }
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            });

        spawned
            .map(|_| ())
            .map_err(|e| TinyQrError::Worker(format!("failed to spawn worker: {}", e)))
    }

    /// Apply a finished generation, if any.
    ///
    /// Call once per frame on the UI thread. Returns the completion exactly
    /// once per started generation.
    pub fn poll(
        &mut self,
        display: &mut DisplaySurface,
        notices: &mut Notices,
    ) -> Option<Completion> {
        let pending = match &self.state {
            GenerateState::Idle => return None,
            GenerateState::Generating(pending) => pending,
        };

        let outcome = match self.result_rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            // Unreachable while we hold a sender, but never leave the trigger stuck
            Err(TryRecvError::Disconnected) => Err(TinyQrError::Worker(
                "result channel disconnected".to_string(),
            )),
        };

        let elapsed = pending.issued_at.elapsed();
        let text = pending.text.clone();

        let succeeded = match outcome {
            Ok(image) => {
                info!(
                    "[GENERATE] Completed in {:?} ({}x{})",
                    elapsed, image.size[0], image.size[1]
                );
                display.set_image(image);
                notices.success(SUCCESS_NOTICE);
                true
            }
            Err(e) => {
                warn!("[GENERATE] Failed after {:?}: {}", elapsed, e);
                notices.error(format!("{}{}", ERROR_NOTICE_PREFIX, e.detail()));
                false
            }
        };

        // Restore the trigger whatever the outcome
        self.state = GenerateState::Idle;

        Some(Completion {
            text,
            succeeded,
            elapsed,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "renderer panicked".to_string()
    }
}
