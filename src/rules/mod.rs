//! Rule Engine
//!
//! The deterministic first tier of the gate. Three independent checks over
//! the command string:
//!
//! | Check | Meaning |
//! |-------|---------|
//! | `is_unsafe` | Never run unattended, never whitelist |
//! | `is_never_whitelistable` | May run once, never persist a pattern |
//! | `is_known_safe` | Run and whitelist without asking the oracle |
//!
//! Unsafe always wins over known-safe. These checks never consult the
//! oracle, so a deterministic verdict costs nothing and cannot flake.

mod engine;

pub use engine::{is_known_safe, is_never_whitelistable, is_unsafe};
