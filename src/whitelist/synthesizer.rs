//! Whitelist synthesis
//!
//! Turns a one-off "safe" verdict into a durable permission pattern. The
//! never-whitelist and unsafe checks run again before any write, whatever
//! the caller already checked.

use std::sync::Arc;

use crate::core::GateResult;
use crate::oracle::OracleClient;
use crate::rules;

use super::pattern::{derive_pattern, PermissionPattern};
use super::store::SettingsStore;

/// How a command came to be judged safe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyOrigin {
    /// Matched a curated safe base in the rule engine
    RuleConfirmed,
    /// Classified safe by the oracle
    OracleClassified,
}

/// Records safe commands as permission patterns
pub struct WhitelistSynthesizer {
    store: SettingsStore,
    oracle: Arc<OracleClient>,
}

impl WhitelistSynthesizer {
    /// Create a synthesizer over the given store and oracle
    pub fn new(store: SettingsStore, oracle: Arc<OracleClient>) -> Self {
        Self { store, oracle }
    }

    /// Persist a pattern for a safe command, if one should exist
    ///
    /// Commands that are never-whitelistable or hit an unsafe marker are
    /// skipped. Rule-confirmed commands get the structural prefix pattern;
    /// oracle-classified commands use the oracle's proposal, and its
    /// abstention means nothing is persisted.
    pub async fn record_if_safe(
        &self,
        command: &str,
        origin: SafetyOrigin,
    ) -> GateResult<Option<PermissionPattern>> {
        if rules::is_never_whitelistable(command) {
            tracing::debug!("[Whitelist] Command is never whitelistable: {}", command);
            return Ok(None);
        }
        if rules::is_unsafe(command) {
            tracing::debug!("[Whitelist] Command hits an unsafe marker: {}", command);
            return Ok(None);
        }

        let pattern = match origin {
            SafetyOrigin::RuleConfirmed => derive_pattern(command),
            SafetyOrigin::OracleClassified => match self.oracle.propose_pattern(command).await {
                Some(pattern) => PermissionPattern::new(pattern),
                None => {
                    tracing::debug!("[Whitelist] Oracle offered no pattern for: {}", command);
                    return Ok(None);
                }
            },
        };

        let inserted = self.store.append_pattern(&pattern)?;
        if inserted {
            tracing::info!("[Whitelist] Added {} for command: {}", pattern, command);
        } else {
            tracing::debug!("[Whitelist] Pattern already present: {}", pattern);
        }

        Ok(Some(pattern))
    }
}
