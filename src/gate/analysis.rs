//! Invocation formatting for oracle analysis
//!
//! Each tool gets a compact text rendering of what it is about to do.
//! Free-text fields are capped so a huge file write cannot blow up the
//! prompt; the caps are generous enough to judge intent.

use crate::core::ToolInvocation;

/// Character cap for write-content previews
const CONTENT_PREVIEW_CHARS: usize = 200;

/// Character cap for edit old/new string previews
const EDIT_PREVIEW_CHARS: usize = 100;

/// Character cap for the generic input dump
const INPUT_DUMP_CHARS: usize = 500;

/// Render an invocation as analysis text for the oracle
pub fn format_for_analysis(invocation: &ToolInvocation) -> String {
    match invocation.tool_name.as_str() {
        "Bash" => format!(
            "Tool: Bash\nCommand: {}\nDescription: {}",
            invocation.command().unwrap_or(""),
            invocation.description().unwrap_or("")
        ),
        "Write" => {
            let file_path = invocation.input_str("file_path").unwrap_or("");
            let preview = truncate_chars(
                invocation.input_str("content").unwrap_or(""),
                CONTENT_PREVIEW_CHARS,
            );
            format!(
                "Tool: Write\nFile: {}\nContent preview: {}...",
                file_path, preview
            )
        }
        "Edit" => {
            let file_path = invocation.input_str("file_path").unwrap_or("");
            let old = truncate_chars(
                invocation.input_str("old_string").unwrap_or(""),
                EDIT_PREVIEW_CHARS,
            );
            let new = truncate_chars(
                invocation.input_str("new_string").unwrap_or(""),
                EDIT_PREVIEW_CHARS,
            );
            format!(
                "Tool: Edit\nFile: {}\nReplacing: {}\nWith: {}",
                file_path, old, new
            )
        }
        "NotebookEdit" => {
            let notebook = invocation.input_str("notebook_path").unwrap_or("");
            let mode = invocation.input_str("edit_mode").unwrap_or("replace");
            format!("Tool: NotebookEdit\nNotebook: {}\nMode: {}", notebook, mode)
        }
        _ => {
            let dump =
                serde_json::to_string_pretty(&invocation.tool_input).unwrap_or_default();
            format!(
                "Tool: {}\nInput: {}",
                invocation.tool_name,
                truncate_chars(&dump, INPUT_DUMP_CHARS)
            )
        }
    }
}

/// Truncate to at most `max` characters (not bytes)
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
