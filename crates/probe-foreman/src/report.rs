//! Typed views of the Foreman payloads the probes read.
//!
//! See <http://theforeman.org/projects/foreman/wiki/API>.

use clap::ValueEnum;
use probe_common::{ProbeError, ProbeResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Host counters exposed by `api/dashboard/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum DashboardMode {
    PendingHosts,
    GoodHosts,
    DisabledHosts,
    ReportsMissing,
    ActiveHostsOkEnabled,
    PendingHostsEnabled,
    GoodHostsEnabled,
    ActiveHostsOk,
    TotalHosts,
    OkHostsEnabled,
    OutOfSyncHostsEnabled,
    ActiveHosts,
    BadHostsEnabled,
    OkHosts,
    OutOfSyncHosts,
    BadHosts,
}

impl DashboardMode {
    /// Every recognized dashboard counter.
    pub const ALL: [Self; 16] = [
        Self::PendingHosts,
        Self::GoodHosts,
        Self::DisabledHosts,
        Self::ReportsMissing,
        Self::ActiveHostsOkEnabled,
        Self::PendingHostsEnabled,
        Self::GoodHostsEnabled,
        Self::ActiveHostsOk,
        Self::TotalHosts,
        Self::OkHostsEnabled,
        Self::OutOfSyncHostsEnabled,
        Self::ActiveHosts,
        Self::BadHostsEnabled,
        Self::OkHosts,
        Self::OutOfSyncHosts,
        Self::BadHosts,
    ];

    /// Key of this counter in the dashboard object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingHosts => "pending_hosts",
            Self::GoodHosts => "good_hosts",
            Self::DisabledHosts => "disabled_hosts",
            Self::ReportsMissing => "reports_missing",
            Self::ActiveHostsOkEnabled => "active_hosts_ok_enabled",
            Self::PendingHostsEnabled => "pending_hosts_enabled",
            Self::GoodHostsEnabled => "good_hosts_enabled",
            Self::ActiveHostsOk => "active_hosts_ok",
            Self::TotalHosts => "total_hosts",
            Self::OkHostsEnabled => "ok_hosts_enabled",
            Self::OutOfSyncHostsEnabled => "out_of_sync_hosts_enabled",
            Self::ActiveHosts => "active_hosts",
            Self::BadHostsEnabled => "bad_hosts_enabled",
            Self::OkHosts => "ok_hosts",
            Self::OutOfSyncHosts => "out_of_sync_hosts",
            Self::BadHosts => "bad_hosts",
        }
    }
}

/// Host states served as lists under `hosts/<state>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum HostListMode {
    /// Hosts that missed their report window.
    OutOfSync,
    /// Hosts whose last run had errors.
    Errors,
    /// Hosts that applied changes in their last run.
    Active,
}

impl HostListMode {
    /// Path segment of this list.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfSync => "out_of_sync",
            Self::Errors => "errors",
            Self::Active => "active",
        }
    }
}

/// The dashboard object, kept whole so it can be echoed back.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    counters: Map<String, Value>,
}

impl DashboardReport {
    /// Wrap a dashboard response.
    pub fn from_value(value: Value) -> ProbeResult<Self> {
        match value {
            Value::Object(counters) => Ok(Self { counters }),
            other => Err(ProbeError::InvalidResponse {
                message: format!("dashboard is not an object: {other}"),
            }),
        }
    }

    /// Host count for a counter.
    pub fn count(&self, mode: DashboardMode) -> ProbeResult<i64> {
        let key = mode.as_str();
        let value = self.counters.get(key).ok_or_else(|| ProbeError::MissingField {
            field: key.to_string(),
        })?;
        value.as_i64().ok_or_else(|| ProbeError::InvalidResponse {
            message: format!("{key} is not an integer: {value}"),
        })
    }

    /// The whole snapshot as compact JSON.
    #[must_use]
    pub fn snapshot(&self) -> String {
        Value::Object(self.counters.clone()).to_string()
    }
}

/// One entry of a host list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostEntry {
    /// The host record.
    pub host: HostRecord,
}

/// The fields of a host record the probes read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostRecord {
    /// Fully qualified host name.
    pub name: String,
}

/// A `hosts/<state>/` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct HostList(pub Vec<HostEntry>);

impl HostList {
    /// Decode a host list response.
    pub fn from_value(value: Value) -> ProbeResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Number of hosts in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Host names in response order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.host.name.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct LastReportEnvelope {
    report: LastReport,
}

/// The `report` object of `hosts/<client>/reports/last`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LastReport {
    /// UTC timestamp such as `2012-02-20T22:06:12Z`.
    pub reported_at: String,
    /// Run status, `Success` when the run applied cleanly.
    pub summary: String,
    /// Report metrics; some reports carry none or an incomplete set.
    #[serde(default)]
    pub metrics: Option<Value>,
}

impl LastReport {
    /// Decode a last report response.
    pub fn from_value(value: Value) -> ProbeResult<Self> {
        if value.get("report").is_none() {
            return Err(ProbeError::MissingField {
                field: "report".to_string(),
            });
        }
        let envelope: LastReportEnvelope = serde_json::from_value(value)?;
        Ok(envelope.report)
    }

    /// Total run time in seconds, when the report carries it.
    #[must_use]
    pub fn total_time(&self) -> Option<&Value> {
        self.metrics
            .as_ref()?
            .get("time")?
            .get("total")
            .filter(|total| !total.is_null())
    }
}
