//! Logging setup shared by the probe binaries.
//!
//! Plugin output goes to stdout and is read by the supervisor, so all
//! diagnostics are written to stderr.

use color_eyre::eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const PROBE_TARGETS: [&str; 3] = ["probe_checks", "probe_foreman", "probe_common"];

/// Directive level for the probe crates.
#[must_use]
pub const fn level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Build the filter: the probe crates at [`level`], then `RUST_LOG` on top.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_with(verbose, env.as_deref())
}

/// Build the filter from explicit `RUST_LOG` directives.
///
/// Later directives replace earlier ones for the same target, so anything in
/// `env` wins over the probe defaults. Invalid directives are skipped.
#[must_use]
pub fn filter_with(verbose: bool, env: Option<&str>) -> EnvFilter {
    let mut directives: Vec<String> = PROBE_TARGETS
        .iter()
        .map(|target| format!("{target}={}", level(verbose)))
        .collect();
    directives.extend(env.filter(|env| !env.trim().is_empty()).map(str::to_string));
    EnvFilter::builder().parse_lossy(directives.join(","))
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter(verbose))
        .try_init()?;
    Ok(())
}
