//! Deterministic command safety rules
//!
//! String-containment checks over the lower-cased command. Matching is
//! deliberately not tokenized: a marker hitting inside an unrelated word
//! is an acceptable false positive, the cost is one extra confirmation
//! prompt. All three checks are independent; callers decide precedence
//! (unsafe always wins).

/// Substrings that mark a command as never safe to run unattended
const UNSAFE_MARKERS: &[&str] = &[
    // Destructive
    "rm ",
    "rm\t",
    "rmdir",
    "unlink",
    "git clean",
    "git reset --hard",
    "git reset --mixed",
    // Force flags
    "--force",
    " -f ",
    " -rf",
    "-rf ",
    // Secrets in file paths
    ".env",
    ".ssh",
    ".aws",
    ".gnupg",
    "credentials",
    "secrets",
    "/etc/passwd",
    "/etc/shadow",
    // Inline secrets (API keys, tokens)
    "sk-",
    "api_key=",
    "apikey=",
    "token=",
    "secret=",
    "password=",
    "passwd=",
    "bearer ",
    "basic ",
    // System modification
    "sudo ",
    "sudo\t",
    "doas ",
    "chmod ",
    "chown ",
    "chgrp ",
    "systemctl",
    "service ",
    // Process killing
    "pkill ",
    "kill ",
    "killall ",
    // Arbitrary execution
    "eval ",
    "exec ",
    "docker run",
    "docker exec",
    "kubectl run",
    "kubectl exec",
    // Network (data exfiltration risk)
    "curl ",
    "wget ",
    "nc ",
    "netcat",
    // Package managers (run arbitrary install scripts)
    "brew install",
    "brew upgrade",
    "pip install",
    "npm install",
    "yarn add",
    "pnpm install",
    "bun install",
];

/// Substrings marking commands that may run but must never be whitelisted
///
/// A persisted prefix pattern would also match later, more dangerous
/// variants (`git push` today, `git push --force` tomorrow).
const NEVER_WHITELIST_MARKERS: &[&str] = &[
    "git push",
    "docker run",
    "docker exec",
    "kubectl exec",
    "kubectl run",
    "kubectl delete",
    "kubectl apply",
];

/// Substrings marking commands known safe to run and to whitelist
const SAFE_COMMAND_BASES: &[&str] = &[
    // Version checks
    "--version",
    "-v",
    "version",
    // Read-only git
    "git status",
    "git log",
    "git diff",
    "git branch",
    "git show",
    "git remote",
    // Build/test (local operations)
    "go build",
    "go test",
    "go run",
    "go mod",
    "go version",
    "cargo build",
    "cargo test",
    "cargo run",
    "cargo check",
    "npm test",
    "npm run",
    "npm start",
    "make",
    "cmake",
    "pytest",
    "python -m pytest",
    // Read-only file operations
    "ls",
    "cat ",
    "head ",
    "tail ",
    "less ",
    "more ",
    "find ",
    "grep ",
    "wc ",
    "du ",
    "df ",
];

/// Is this command unsafe to run unattended?
pub fn is_unsafe(command: &str) -> bool {
    let lower = command.to_lowercase();
    UNSAFE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Is this command safe to run once but never to whitelist?
pub fn is_never_whitelistable(command: &str) -> bool {
    let lower = command.to_lowercase();
    NEVER_WHITELIST_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Is this command known safe to run and to whitelist?
pub fn is_known_safe(command: &str) -> bool {
    let lower = command.to_lowercase();
    SAFE_COMMAND_BASES.iter().any(|base| lower.contains(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destructive_commands_are_unsafe() {
        assert!(is_unsafe("rm -rf node_modules"));
        assert!(is_unsafe("rm file.txt"));
        assert!(is_unsafe("git clean -fd"));
        assert!(is_unsafe("git reset --hard HEAD~1"));
    }

    #[test]
    fn test_force_flags_are_unsafe() {
        assert!(is_unsafe("git push --force origin main"));
        assert!(is_unsafe("git push -f origin main"));
    }

    #[test]
    fn test_secret_paths_are_unsafe() {
        assert!(is_unsafe("cat .env"));
        assert!(is_unsafe("cat ~/.ssh/id_rsa"));
        assert!(is_unsafe("ls ~/.aws"));
        assert!(is_unsafe("grep root /etc/passwd"));
    }

    #[test]
    fn test_inline_secrets_are_unsafe() {
        assert!(is_unsafe("OPENAI_API_KEY=sk-abc123 pnpm test"));
        assert!(is_unsafe("export API_KEY=secret123"));
        assert!(is_unsafe("curl -H 'Bearer token123' https://api.com"));
    }

    #[test]
    fn test_system_and_network_commands_are_unsafe() {
        assert!(is_unsafe("sudo apt update"));
        assert!(is_unsafe("chmod 777 /etc/passwd"));
        assert!(is_unsafe("pkill node"));
        assert!(is_unsafe("kill -9 1234"));
        assert!(is_unsafe("curl https://api.github.com"));
        assert!(is_unsafe("wget https://example.com/install.sh"));
    }

    #[test]
    fn test_package_installs_are_unsafe() {
        assert!(is_unsafe("npm install lodash"));
        assert!(is_unsafe("pip install requests"));
        assert!(is_unsafe("brew install jq"));
    }

    #[test]
    fn test_plain_commands_are_not_unsafe() {
        assert!(!is_unsafe("git push origin main"));
        assert!(!is_unsafe("git status"));
        assert!(!is_unsafe("go test ./..."));
        assert!(!is_unsafe("echo hello"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(is_unsafe("RM -RF /tmp/x"));
        assert!(is_unsafe("Sudo apt update"));
        assert!(is_never_whitelistable("Git Push origin main"));
    }

    #[test]
    fn test_never_whitelistable() {
        assert!(is_never_whitelistable("git push origin main"));
        assert!(is_never_whitelistable("docker run hello-world"));
        assert!(is_never_whitelistable("kubectl apply -f deploy.yaml"));
        assert!(!is_never_whitelistable("git status"));
        assert!(!is_never_whitelistable("go test ./..."));
    }

    #[test]
    fn test_known_safe_commands() {
        assert!(is_known_safe("git status"));
        assert!(is_known_safe("git log --oneline"));
        assert!(is_known_safe("go test ./..."));
        assert!(is_known_safe("go test -v -race"));
        assert!(is_known_safe("cargo build --release"));
        assert!(is_known_safe("npm test"));
        assert!(is_known_safe("make all"));
        assert!(is_known_safe("head -20 main.go"));
        assert!(is_known_safe("node --version"));
    }

    #[test]
    fn test_unknown_commands_are_not_known_safe() {
        assert!(!is_known_safe("terraform apply"));
        assert!(!is_known_safe("echo hello"));
    }

    #[test]
    fn test_unsafe_and_safe_can_both_match() {
        // "cat .env" hits the "cat " safe base and the ".env" unsafe
        // marker at once. Callers must check unsafe first.
        assert!(is_unsafe("cat .env"));
        assert!(is_known_safe("cat .env"));
    }
}
