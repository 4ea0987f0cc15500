//! Host list size check.

use probe_common::{Levels, ProbeResult, Verdict};
use probe_foreman::{ApiPath, Endpoint, HostList, HostListMode};
use serde_json::Value;

use super::{Check, count_verdict};

/// Count the hosts Foreman lists under `hosts/<mode>/`.
#[derive(Debug, Clone)]
pub struct HostListCheck {
    /// Foreman server.
    pub endpoint: Endpoint,
    /// Host state to list.
    pub mode: HostListMode,
    /// Host levels.
    pub levels: Levels<i64>,
}

impl HostListCheck {
    /// Evaluate a decoded host list. Within levels, the host names are listed.
    #[must_use]
    pub fn evaluate_list(&self, hosts: &HostList) -> Verdict {
        let count = i64::try_from(hosts.len()).unwrap_or(i64::MAX);
        let summary = format!("{count} servers have the status : {}", self.mode.as_str());
        count_verdict(count, &self.levels, &summary, || {
            let mut detail = String::from(" -");
            for name in hosts.names() {
                detail.push(' ');
                detail.push_str(name);
            }
            detail
        })
    }
}

impl Check for HostListCheck {
    fn url(&self) -> String {
        self.endpoint.url(&ApiPath::HostList(self.mode))
    }

    fn evaluate(&self, reply: Value) -> ProbeResult<Verdict> {
        let hosts = HostList::from_value(reply)?;
        Ok(self.evaluate_list(&hosts))
    }

    fn status_hint(&self, url: &str) -> String {
        format!("is {url} valid mode ? Check credentials")
    }

    fn connection_hint(&self, url: &str) -> String {
        format!("Error on {url} Double check foreman server name")
    }
}
