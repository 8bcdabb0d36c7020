//! Oracle prompt texts
//!
//! Both prompts demand a single JSON object as the whole reply. Replies are
//! still free text in practice, so the client extracts the JSON span rather
//! than trusting the shape.

/// System prompt for classifying an action as safe or unsafe
pub const CLASSIFY_SYSTEM_PROMPT: &str = r#"Evaluate if this command is safe to run without user confirmation.

SAFE if the command:
- Only reads, displays, or queries information
- Builds, compiles, or tests code (local operations)
- Installs dependencies from standard registries
- Checks versions or system info

UNSAFE if the command:
- Deletes or modifies files (rm, mv to overwrite, truncate)
- Uses --force or -f flags (destructive override)
- Accesses secrets (.env, .ssh, .aws, credentials, keys, tokens, passwd)
- Makes network requests that could send data (curl, wget)
- Runs arbitrary/untrusted code (docker run, eval, exec)
- Changes permissions or ownership (chmod, chown, sudo)
- Has irreversible effects (git reset --hard, git clean, drop)

Think: "Could this command leak secrets, destroy data, or cause harm?"

Respond with ONLY: {"safe": true, "reason": "..."} or {"safe": false, "reason": "..."}
"#;

/// System prompt for proposing the safest whitelist pattern for a command
pub const PATTERN_SYSTEM_PROMPT: &str = r#"Given a bash command, suggest the SAFEST permission pattern to whitelist it.

Valid pattern syntax:
- "Bash(go build:*)" - prefix match, allows "go build", "go build ./...", "go build -v"
- "Bash(npm *)" - wildcard, allows "npm install", "npm test", "npm run dev"
- "Bash(git * main)" - allows "git checkout main", "git merge main"
- "Bash(exact cmd)" - exact match only

Return a pattern ONLY if ALL possible matching commands are safe:
- Could adding ANY flags make it dangerous? If yes → "none"
- Could changing arguments cause harm? If yes → "none"
- Does it only read/display/build/test? If yes → safe pattern

Return "none" if:
- Different arguments could be destructive (git push → git push --force)
- It deletes data, makes network requests, runs arbitrary code, or changes system state

Think: "If I whitelist this pattern, what's the WORST command that would match?"

Respond with ONLY: {"pattern": "Bash(...)"} or {"pattern": "none"}
"#;
