//! Decision and verdict types
//!
//! Core types for the gate's output side:
//! - `SafetyVerdict` - A safety classification with its reason
//! - `GateDecision` - What the gate decided for this invocation
//! - `DeferCause` - Why the gate stayed silent
//! - `HookOutput` - The wire format emitted on an allow decision

use serde::{Deserialize, Serialize};

/// Hook event name emitted in the output payload
const HOOK_EVENT_NAME: &str = "PreToolUse";

/// Fallback reason when a classification omits one
fn default_reason() -> String {
    "No reason provided".to_string()
}

/// A safety classification with its reason
///
/// Missing fields are conservative: an absent `safe` reads as unsafe.
#[derive(Debug, Clone, Deserialize)]
pub struct SafetyVerdict {
    /// Whether the action is safe to run unattended
    #[serde(default)]
    pub safe: bool,
    /// Short explanation of the classification
    #[serde(default = "default_reason")]
    pub reason: String,
}

/// Why the gate chose to stay silent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferCause {
    /// Read-only tool, nothing to decide
    AlwaysSafeTool,
    /// Tool that always goes through the normal permission flow
    AlwaysAskTool,
    /// Command matched an unsafe marker
    UnsafeCommand,
    /// Oracle classified the action as unsafe
    OracleUnsafe,
    /// Oracle could not produce a verdict
    OracleUnavailable,
}

impl std::fmt::Display for DeferCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeferCause::AlwaysSafeTool => write!(f, "always-safe tool"),
            DeferCause::AlwaysAskTool => write!(f, "always-ask tool"),
            DeferCause::UnsafeCommand => write!(f, "unsafe command"),
            DeferCause::OracleUnsafe => write!(f, "oracle judged unsafe"),
            DeferCause::OracleUnavailable => write!(f, "oracle unavailable"),
        }
    }
}

/// What the gate decided for this invocation
///
/// Only `Allow` produces output; every `Defer` is silence on the wire,
/// with the cause kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Approve the action, skipping the caller's permission prompt
    Allow {
        /// Reason surfaced to the caller
        reason: String,
    },
    /// Stay silent and let the caller's own permission flow decide
    Defer(DeferCause),
}

impl GateDecision {
    /// Create an allow decision with a reason
    pub fn allow(reason: impl Into<String>) -> Self {
        GateDecision::Allow {
            reason: reason.into(),
        }
    }

    /// Whether this decision approves the action
    pub fn is_allow(&self) -> bool {
        matches!(self, GateDecision::Allow { .. })
    }

    /// Convert to the wire output, if any
    pub fn to_output(&self) -> Option<HookOutput> {
        match self {
            GateDecision::Allow { reason } => Some(HookOutput::allow(reason.clone())),
            GateDecision::Defer(_) => None,
        }
    }
}

/// Top-level output payload emitted on an allow decision
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

/// Inner decision payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    pub permission_decision: String,
    pub permission_decision_reason: String,
}

impl HookOutput {
    /// Build an allow payload with the given reason
    pub fn allow(reason: impl Into<String>) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME.to_string(),
                permission_decision: "allow".to_string(),
                permission_decision_reason: reason.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_deserialize() {
        let v: SafetyVerdict =
            serde_json::from_str(r#"{"safe": true, "reason": "read-only"}"#).unwrap();
        assert!(v.safe);
        assert_eq!(v.reason, "read-only");
    }

    #[test]
    fn test_verdict_missing_fields_are_conservative() {
        let v: SafetyVerdict = serde_json::from_str(r#"{"reason": "whatever"}"#).unwrap();
        assert!(!v.safe);

        let v: SafetyVerdict = serde_json::from_str(r#"{"safe": true}"#).unwrap();
        assert_eq!(v.reason, "No reason provided");
    }

    #[test]
    fn test_decision_output_shape() {
        let decision = GateDecision::allow("rule: known safe");
        let output = decision.to_output().unwrap();
        let json = serde_json::to_string(&output).unwrap();

        assert!(json.contains(r#""hookSpecificOutput""#));
        assert!(json.contains(r#""hookEventName":"PreToolUse""#));
        assert!(json.contains(r#""permissionDecision":"allow""#));
        assert!(json.contains(r#""permissionDecisionReason":"rule: known safe""#));
    }

    #[test]
    fn test_defer_produces_no_output() {
        let decision = GateDecision::Defer(DeferCause::UnsafeCommand);
        assert!(decision.to_output().is_none());
        assert!(!decision.is_allow());
    }
}
