use std::io::Read;

use toolgate::config::GateConfig;
use toolgate::core::{GateDecision, ToolInvocation};
use toolgate::gate::{emit_decision, SafetyGate};
use toolgate::logging;

#[tokio::main]
async fn main() {
    // A hook must never block the tool call it inspects: whatever goes
    // wrong, stay silent and exit zero.
    if let Err(e) = run().await {
        tracing::warn!("Gate failure, deferring: {:#}", e);
    }
}

async fn run() -> anyhow::Result<()> {
    logging::init_logging()?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    // Fail open on unparsable input: stay silent and let the caller's
    // own permission flow handle the call.
    let invocation = match ToolInvocation::from_json(&input) {
        Ok(invocation) => invocation,
        Err(e) => {
            tracing::warn!("{}, deferring", e);
            return Ok(());
        }
    };

    let config = GateConfig::from_env();
    let gate = SafetyGate::new(&config)?;

    let decision = gate.evaluate(&invocation).await;
    match &decision {
        GateDecision::Allow { reason } => {
            tracing::info!("Allowing {}: {}", invocation.tool_name, reason)
        }
        GateDecision::Defer(cause) => {
            tracing::info!("Deferring {}: {}", invocation.tool_name, cause)
        }
    }

    emit_decision(&decision)?;

    Ok(())
}
