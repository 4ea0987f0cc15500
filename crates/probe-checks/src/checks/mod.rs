//! Verdict evaluation for each probe.
//!
//! Evaluation is pure: every check turns an already decoded reply into a
//! [`Verdict`]. Fetching, and mapping transport failures to verdicts, is
//! done by [`crate::runner`].
//!
//! ## Types
//!
//! - [`Check`]: the seam between a probe and the runner
//! - [`DashboardCheck`]: one dashboard counter against host levels
//! - [`HostListCheck`]: the length of a host list against host levels
//! - [`LastReportCheck`]: age and outcome of a client's last report

pub mod dashboard;
pub mod host_list;
pub mod last_report;

pub use dashboard::DashboardCheck;
pub use host_list::HostListCheck;
pub use last_report::LastReportCheck;

use probe_common::{Levels, ProbeResult, Status, Verdict};
use serde_json::Value;

/// A probe the runner can execute.
pub trait Check {
    /// URL of the single request this check performs.
    fn url(&self) -> String;

    /// Turn the decoded reply into a verdict.
    fn evaluate(&self, reply: Value) -> ProbeResult<Verdict>;

    /// Operator guidance when the server answers with an error status.
    fn status_hint(&self, url: &str) -> String;

    /// Operator guidance when the server cannot be reached at all.
    fn connection_hint(&self, url: &str) -> String;
}

/// Classify a count against host levels.
///
/// `detail` is only rendered when the count is within levels; it is
/// appended right after `summary`. The levels always close the message.
pub fn count_verdict(
    count: i64,
    levels: &Levels<i64>,
    summary: &str,
    detail: impl FnOnce() -> String,
) -> Verdict {
    let status = levels.classify(&count);
    let message = if status == Status::Ok {
        format!("{summary}{} (levels at {levels})", detail())
    } else {
        format!("{summary} (levels at {levels})")
    };
    Verdict::new(status, message)
}
