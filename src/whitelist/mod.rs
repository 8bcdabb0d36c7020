//! Whitelist Synthesis & Persistence
//!
//! The gate's third tier: commands judged safe become durable permission
//! patterns in the caller's settings file, so the same command never needs
//! gating twice.
//!
//! - `derive_pattern` - Structural prefix pattern at subcommand granularity
//! - `SettingsStore` - Project-else-global settings document persistence
//! - `WhitelistSynthesizer` - Guards plus origin-based pattern derivation
//!
//! Patterns only ever narrow: a command that may not be whitelisted today
//! is never persisted, no matter which tier approved the single run.

mod pattern;
mod store;
mod synthesizer;

pub use pattern::{derive_pattern, PermissionPattern};
pub use store::SettingsStore;
pub use synthesizer::{SafetyOrigin, WhitelistSynthesizer};
