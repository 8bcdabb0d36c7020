//! Safety Oracle
//!
//! The gate's second tier: a small local model reached over HTTP that
//! classifies actions the rule engine could not resolve, and proposes
//! whitelist patterns for commands it judged safe.
//!
//! The oracle is advisory and fallible. Its absence degrades the gate to
//! "defer everything the rules didn't approve", which is safe.

mod client;
mod prompts;

pub use client::OracleClient;
pub use prompts::{CLASSIFY_SYSTEM_PROMPT, PATTERN_SYSTEM_PROMPT};
