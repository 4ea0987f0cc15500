//! Dashboard counter check.

use probe_common::{Levels, ProbeResult, Verdict};
use probe_foreman::{ApiPath, DashboardMode, DashboardReport, Endpoint};
use serde_json::Value;

use super::{Check, count_verdict};

/// Compare one `api/dashboard/` counter with host levels.
#[derive(Debug, Clone)]
pub struct DashboardCheck {
    /// Foreman server.
    pub endpoint: Endpoint,
    /// Counter to read.
    pub mode: DashboardMode,
    /// Host levels.
    pub levels: Levels<i64>,
}

impl DashboardCheck {
    /// Evaluate a decoded dashboard.
    ///
    /// Within levels, the whole dashboard snapshot is appended to the message.
    pub fn evaluate_report(&self, report: &DashboardReport) -> ProbeResult<Verdict> {
        let count = report.count(self.mode)?;
        let summary = format!("{} has {count} servers", self.mode.as_str());
        Ok(count_verdict(count, &self.levels, &summary, || {
            format!(" - {}", report.snapshot())
        }))
    }
}

impl Check for DashboardCheck {
    fn url(&self) -> String {
        self.endpoint.url(&ApiPath::Dashboard)
    }

    fn evaluate(&self, reply: Value) -> ProbeResult<Verdict> {
        let report = DashboardReport::from_value(reply)?;
        self.evaluate_report(&report)
    }

    fn status_hint(&self, url: &str) -> String {
        format!("Check {url} does that node ever reported?")
    }

    fn connection_hint(&self, url: &str) -> String {
        format!("Error on {url} Double check foreman name")
    }
}
