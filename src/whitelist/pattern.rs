//! Permission pattern derivation
//!
//! Patterns use the caller's settings syntax: `Bash(git status:*)` allows
//! any command starting with that prefix. Derivation stays at subcommand
//! granularity so a pattern never approves more than the vetted base.

use serde::Serialize;

/// Command tools whose first argument is a subcommand
///
/// For these the pattern base keeps two words (`go test`, not `go`), since
/// sibling subcommands can have very different risk profiles.
const MULTI_WORD_TOOLS: &[&str] = &[
    "go", "npm", "yarn", "cargo", "make", "git", "docker", "kubectl", "python", "pip", "bun",
];

/// A whitelist entry in the caller's permission syntax
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionPattern(String);

impl PermissionPattern {
    /// Wrap an already-formed pattern string
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// The pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PermissionPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive the prefix pattern for a command at subcommand granularity
pub fn derive_pattern(command: &str) -> PermissionPattern {
    let parts: Vec<&str> = command.split_whitespace().collect();
    if parts.is_empty() {
        return PermissionPattern(format!("Bash({}:*)", command));
    }

    let base = if parts.len() >= 2 && MULTI_WORD_TOOLS.contains(&parts[0]) {
        format!("{} {}", parts[0], parts[1])
    } else {
        parts[0].to_string()
    };

    PermissionPattern(format!("Bash({}:*)", base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_tool_keeps_subcommand() {
        assert_eq!(derive_pattern("go test ./...").as_str(), "Bash(go test:*)");
        assert_eq!(derive_pattern("git status").as_str(), "Bash(git status:*)");
        assert_eq!(
            derive_pattern("cargo build --release").as_str(),
            "Bash(cargo build:*)"
        );
    }

    #[test]
    fn test_single_word_base() {
        assert_eq!(derive_pattern("ls -la").as_str(), "Bash(ls:*)");
        assert_eq!(derive_pattern("pytest").as_str(), "Bash(pytest:*)");
        // A multi-word tool invoked bare keeps just the tool name
        assert_eq!(derive_pattern("make").as_str(), "Bash(make:*)");
    }

    #[test]
    fn test_unknown_tool_uses_first_word_only() {
        assert_eq!(
            derive_pattern("terraform plan -out=tf.plan").as_str(),
            "Bash(terraform:*)"
        );
    }

    #[test]
    fn test_empty_command_falls_back_to_raw() {
        assert_eq!(derive_pattern("").as_str(), "Bash(:*)");
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        assert_eq!(
            derive_pattern("  go   test   ./...  ").as_str(),
            "Bash(go test:*)"
        );
    }

    #[test]
    fn test_pattern_serializes_as_plain_string() {
        let pattern = derive_pattern("go test ./...");
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, r#""Bash(go test:*)""#);
    }
}
