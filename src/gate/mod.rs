//! Safety Gate
//!
//! Orchestrates one decision per intercepted tool invocation:
//!
//! 1. Tool class check (always-safe and always-ask tools defer)
//! 2. Deterministic rules (unsafe defers, known-safe allows)
//! 3. Oracle classification for everything unresolved
//!
//! Safe shell commands are recorded as whitelist patterns before the
//! decision is returned. An allow decision is printed to stdout; every
//! deferral is silence, leaving the caller's own permission flow in charge.

mod analysis;
mod orchestrator;

pub use analysis::format_for_analysis;
pub use orchestrator::{emit_decision, SafetyGate};
