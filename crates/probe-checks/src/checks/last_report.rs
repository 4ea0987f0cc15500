//! Last report freshness check.

use chrono::{DateTime, Utc};
use probe_common::time::{format_elapsed, minutes, parse_report_timestamp};
use probe_common::{Levels, ProbeResult, Status, Verdict};
use probe_foreman::{ApiPath, Endpoint, LastReport};
use serde_json::Value;

use super::Check;

/// Summary Foreman gives a run that applied cleanly.
pub const SUCCESS_SUMMARY: &str = "Success";

/// Placeholder for a run time missing from the report metrics.
pub const NOT_AVAILABLE: &str = "N/A";

/// Check that a client reported recently and that the run succeeded.
#[derive(Debug, Clone)]
pub struct LastReportCheck {
    /// Foreman server.
    pub endpoint: Endpoint,
    /// Puppet client hostname.
    pub client: String,
    /// Age levels in minutes.
    pub levels: Levels<i64>,
    /// Time the report age is measured against.
    pub reference_time: DateTime<Utc>,
}

impl LastReportCheck {
    /// Evaluate a decoded last report.
    pub fn evaluate_report(&self, report: &LastReport) -> ProbeResult<Verdict> {
        let reported_at = parse_report_timestamp(&report.reported_at)?;
        Ok(evaluate_freshness(
            reported_at,
            &report.summary,
            report.total_time(),
            self.reference_time,
            self.levels,
        ))
    }
}

/// Classify the age of a report, then its outcome.
///
/// Age is checked first: a stale report is WARNING or CRITICAL whatever its
/// summary. A fresh report is OK only when its summary is exactly
/// [`SUCCESS_SUMMARY`].
#[must_use]
pub fn evaluate_freshness(
    reported_at: DateTime<Utc>,
    summary: &str,
    total_time: Option<&Value>,
    reference_time: DateTime<Utc>,
    levels: Levels<i64>,
) -> Verdict {
    let elapsed = reference_time - reported_at;

    let status = match levels.map(minutes).classify(&elapsed) {
        Status::Ok if summary != SUCCESS_SUMMARY => Status::Warning,
        status => status,
    };

    let took = match total_time {
        Some(Value::String(text)) => text.clone(),
        Some(value) => value.to_string(),
        None => NOT_AVAILABLE.to_string(),
    };

    Verdict::new(
        status,
        format!(
            "Last report was marked as {summary} {} ago - took {took} seconds",
            format_elapsed(elapsed)
        ),
    )
}

impl Check for LastReportCheck {
    fn url(&self) -> String {
        self.endpoint.url(&ApiPath::LastReport {
            client: self.client.clone(),
        })
    }

    fn evaluate(&self, reply: Value) -> ProbeResult<Verdict> {
        let report = LastReport::from_value(reply)?;
        self.evaluate_report(&report)
    }

    fn status_hint(&self, url: &str) -> String {
        format!("Check {url} does that node ever reported?")
    }

    fn connection_hint(&self, url: &str) -> String {
        format!("Error on {url} Double check foreman name")
    }
}
