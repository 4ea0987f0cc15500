//! Single-shot execution: fetch, evaluate, map the outcome to a verdict.

use std::process::ExitCode;

use probe_common::{ProbeError, ProbeResult, Verdict};
use probe_foreman::ForemanClient;
use tracing::Level;

use crate::checks::Check;
use crate::cli::ConnectionArgs;

/// Build a client from the connection options and run the check once.
pub async fn execute<C: Check>(check: &C, connection: &ConnectionArgs) -> Verdict {
    match connection.client() {
        Ok(client) => run(check, &client).await,
        Err(err) => conclude(check, &check.url(), Err(err)),
    }
}

/// Run the check once with an existing client.
pub async fn run<C: Check>(check: &C, client: &ForemanClient) -> Verdict {
    let url = check.url();
    tracing::debug!(url = %url, "Resolved request URL");

    let outcome = client.get_json(&url).await.and_then(|reply| {
        if tracing::enabled!(Level::DEBUG) {
            let pretty = serde_json::to_string_pretty(&reply).unwrap_or_default();
            tracing::debug!("Reply from server:\n{pretty}");
        }
        check.evaluate(reply)
    });

    conclude(check, &url, outcome)
}

/// Map the outcome of a run to the verdict to report.
///
/// Transport failures are CRITICAL with the check's guidance text; any other
/// failure means no verdict could be reached and is UNKNOWN.
pub fn conclude<C: Check + ?Sized>(check: &C, url: &str, outcome: ProbeResult<Verdict>) -> Verdict {
    match outcome {
        Ok(verdict) => verdict,
        Err(err) => {
            tracing::debug!(error = %err, "Check failed");
            match err {
                ProbeError::HttpStatus { .. } => Verdict::critical(check.status_hint(url)),
                ProbeError::Connection { .. } => Verdict::critical(check.connection_hint(url)),
                other => Verdict::unknown(other.to_string()),
            }
        }
    }
}

/// Print the plugin output line and return the matching exit code.
#[must_use]
pub fn report(verdict: &Verdict) -> ExitCode {
    println!("{verdict}");
    ExitCode::from(verdict.exit_code())
}
