//! Background processing
//!
//! - **generate**: the generate interaction handler and its worker thread

pub mod generate;

pub use generate::{
    Completion, GenerateHandler, GenerateState, PendingGeneration, TriggerOutcome,
    EMPTY_INPUT_NOTICE, ERROR_NOTICE_PREFIX, GENERATE_LABEL, GENERATING_LABEL, SUCCESS_NOTICE,
};
