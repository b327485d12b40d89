//! # fibdev-cli
//!
//! Output for the device benchmark client: per-call trace lines, latency
//! logs, summaries, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use output::{LatencySample, LogFormat};
pub use presenter::{CLITracePresenter, TracePresenter};
