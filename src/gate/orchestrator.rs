//! Decision orchestration
//!
//! One `evaluate` call per intercepted invocation, walking the tiers in
//! order: tool class, deterministic rules, oracle. A deterministic unsafe
//! verdict is terminal and the oracle is never consulted for it. Whitelist
//! updates happen before the decision is returned, and their failures are
//! logged without changing the verdict.

use std::sync::Arc;

use anyhow::Result;

use crate::config::GateConfig;
use crate::core::{DeferCause, GateDecision, GateResult, ToolInvocation, ToolKind};
use crate::oracle::OracleClient;
use crate::rules;
use crate::whitelist::{SafetyOrigin, SettingsStore, WhitelistSynthesizer};

use super::analysis::format_for_analysis;

/// The safety gate for one process run
pub struct SafetyGate {
    oracle: Arc<OracleClient>,
    synthesizer: WhitelistSynthesizer,
}

impl SafetyGate {
    /// Create a gate from configuration
    pub fn new(config: &GateConfig) -> Result<Self> {
        let oracle = Arc::new(OracleClient::new(config)?);
        let store = SettingsStore::new()?;
        let synthesizer = WhitelistSynthesizer::new(store, oracle.clone());

        Ok(Self {
            oracle,
            synthesizer,
        })
    }

    /// Create a gate from pre-built parts
    pub fn with_parts(oracle: Arc<OracleClient>, synthesizer: WhitelistSynthesizer) -> Self {
        Self {
            oracle,
            synthesizer,
        }
    }

    /// Decide what to do with an intercepted tool invocation
    pub async fn evaluate(&self, invocation: &ToolInvocation) -> GateDecision {
        let kind = invocation.kind();
        tracing::debug!("Evaluating {} ({})", invocation.tool_name, kind);

        match kind {
            ToolKind::AlwaysSafe => {
                return GateDecision::Defer(DeferCause::AlwaysSafeTool);
            }
            ToolKind::AlwaysAsk => {
                return GateDecision::Defer(DeferCause::AlwaysAskTool);
            }
            ToolKind::ShellCommand => {
                let command = invocation.command().unwrap_or("");

                if rules::is_unsafe(command) {
                    tracing::info!("Unsafe command, deferring to permission prompt: {}", command);
                    return GateDecision::Defer(DeferCause::UnsafeCommand);
                }

                if rules::is_known_safe(command) {
                    self.record_whitelist(command, SafetyOrigin::RuleConfirmed)
                        .await;
                    return GateDecision::allow("rule: known safe");
                }
                // Not resolved by the rules, ask the oracle
            }
            ToolKind::Generic => {}
        }

        self.consult_oracle(invocation).await
    }

    /// Ask the oracle about an invocation the rules could not resolve
    async fn consult_oracle(&self, invocation: &ToolInvocation) -> GateDecision {
        let analysis = format_for_analysis(invocation);

        let verdict = match self.oracle.classify(&analysis).await {
            Some(verdict) => verdict,
            None => {
                tracing::warn!(
                    "No oracle verdict for {}, deferring",
                    invocation.tool_name
                );
                return GateDecision::Defer(DeferCause::OracleUnavailable);
            }
        };

        if !verdict.safe {
            tracing::info!(
                "Oracle judged {} unsafe: {}",
                invocation.tool_name,
                verdict.reason
            );
            return GateDecision::Defer(DeferCause::OracleUnsafe);
        }

        if invocation.kind() == ToolKind::ShellCommand {
            if let Some(command) = invocation.command() {
                if !command.is_empty() {
                    self.record_whitelist(command, SafetyOrigin::OracleClassified)
                        .await;
                }
            }
        }

        GateDecision::allow(format!("oracle assessment: {}", verdict.reason))
    }

    /// Record a whitelist pattern, logging failures without failing the decision
    async fn record_whitelist(&self, command: &str, origin: SafetyOrigin) {
        if let Err(e) = self.synthesizer.record_if_safe(command, origin).await {
            tracing::error!("Whitelist update failed for {}: {}", command, e);
        }
    }
}

/// Write the decision to stdout, if it produces output
///
/// Allow decisions emit one JSON object; deferrals emit nothing. Stdout is
/// the wire protocol, so nothing else may ever be printed there.
pub fn emit_decision(decision: &GateDecision) -> GateResult<()> {
    if let Some(output) = decision.to_output() {
        let json = serde_json::to_string(&output)?;
        println!("{}", json);
    }
    Ok(())
}
