//! Tool invocation input model
//!
//! An intercepted tool call arrives as a single JSON payload with the tool
//! name and its input object. Classification by tool name decides which
//! evaluation path the gate takes.

use serde::Deserialize;
use serde_json::Value;

use crate::core::error::{GateError, GateResult};

/// Tools that only observe state and never need gating
const ALWAYS_SAFE_TOOLS: &[&str] = &["Read", "Glob", "Grep", "WebSearch", "WebFetch"];

/// Tools that must always go through the normal permission flow
const ALWAYS_ASK_TOOLS: &[&str] = &["Task", "Skill"];

/// The shell command tool name
const SHELL_TOOL: &str = "Bash";

/// Category of an intercepted tool call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Read-only tool, no gating needed
    AlwaysSafe,
    /// Tool that always requires the normal permission flow
    AlwaysAsk,
    /// Shell command, evaluated by the rule engine first
    ShellCommand,
    /// Any other tool, evaluated by the oracle
    Generic,
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolKind::AlwaysSafe => write!(f, "always-safe"),
            ToolKind::AlwaysAsk => write!(f, "always-ask"),
            ToolKind::ShellCommand => write!(f, "shell-command"),
            ToolKind::Generic => write!(f, "generic"),
        }
    }
}

/// An intercepted tool call, as read from stdin
#[derive(Debug, Clone, Deserialize)]
pub struct ToolInvocation {
    /// Name of the tool being called
    #[serde(default)]
    pub tool_name: String,
    /// Tool input object, shape depends on the tool
    #[serde(default)]
    pub tool_input: Value,
}

impl ToolInvocation {
    /// Create an invocation directly (mainly for tests)
    pub fn new(tool_name: impl Into<String>, tool_input: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_input,
        }
    }

    /// Parse an invocation from a raw hook payload
    pub fn from_json(payload: &str) -> GateResult<Self> {
        serde_json::from_str(payload).map_err(|e| GateError::InvalidPayload(e.to_string()))
    }

    /// Classify the invocation by tool name
    pub fn kind(&self) -> ToolKind {
        let name = self.tool_name.as_str();
        if ALWAYS_SAFE_TOOLS.contains(&name) {
            ToolKind::AlwaysSafe
        } else if ALWAYS_ASK_TOOLS.contains(&name) {
            ToolKind::AlwaysAsk
        } else if name == SHELL_TOOL {
            ToolKind::ShellCommand
        } else {
            ToolKind::Generic
        }
    }

    /// The shell command string, if present in the input
    pub fn command(&self) -> Option<&str> {
        self.tool_input.get("command").and_then(|v| v.as_str())
    }

    /// The caller-supplied description, if present in the input
    pub fn description(&self) -> Option<&str> {
        self.tool_input.get("description").and_then(|v| v.as_str())
    }

    /// Get an arbitrary string field from the tool input
    pub fn input_str(&self, field: &str) -> Option<&str> {
        self.tool_input.get(field).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_classification() {
        let read = ToolInvocation::new("Read", json!({"file_path": "/tmp/x"}));
        assert_eq!(read.kind(), ToolKind::AlwaysSafe);

        let task = ToolInvocation::new("Task", json!({}));
        assert_eq!(task.kind(), ToolKind::AlwaysAsk);

        let bash = ToolInvocation::new("Bash", json!({"command": "ls"}));
        assert_eq!(bash.kind(), ToolKind::ShellCommand);

        let other = ToolInvocation::new("SomeNewTool", json!({}));
        assert_eq!(other.kind(), ToolKind::Generic);
    }

    #[test]
    fn test_command_accessor() {
        let bash = ToolInvocation::new(
            "Bash",
            json!({"command": "git status", "description": "Show status"}),
        );
        assert_eq!(bash.command(), Some("git status"));
        assert_eq!(bash.description(), Some("Show status"));

        let empty = ToolInvocation::new("Bash", json!({}));
        assert_eq!(empty.command(), None);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let inv: ToolInvocation = serde_json::from_str(r#"{"tool_name": "Bash"}"#).unwrap();
        assert_eq!(inv.tool_name, "Bash");
        assert!(inv.tool_input.is_null());

        let inv: ToolInvocation = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(inv.tool_name, "");
        assert_eq!(inv.kind(), ToolKind::Generic);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ToolInvocation::from_json("not json at all").unwrap_err();
        assert!(matches!(err, GateError::InvalidPayload(_)));

        let inv = ToolInvocation::from_json(r#"{"tool_name": "Bash", "tool_input": {}}"#).unwrap();
        assert_eq!(inv.kind(), ToolKind::ShellCommand);
    }
}
