//! Core types for the tool-safety gate
//!
//! This module provides the fundamental types used throughout the gate:
//! - `ToolInvocation` / `ToolKind` - The intercepted tool call and its category
//! - `GateDecision` / `DeferCause` - The gate's verdict for one invocation
//! - `HookOutput` - Wire format for allow decisions
//! - `GateError` - Error types

pub mod error;
pub mod invocation;
pub mod verdict;

pub use error::{GateError, GateResult};
pub use invocation::{ToolInvocation, ToolKind};
pub use verdict::{DeferCause, GateDecision, HookOutput, SafetyVerdict};
