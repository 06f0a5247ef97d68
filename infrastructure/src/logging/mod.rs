//! Structured decision logging.
//!
//! Provides [`JsonlDecisionLogger`], a JSONL file writer that implements
//! the [`DecisionLogger`](termgate_application::DecisionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlDecisionLogger;
