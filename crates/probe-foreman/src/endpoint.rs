//! Endpoint URL assembly.

use std::fmt;

use crate::report::HostListMode;

/// Scheme, host, port and path prefix of a Foreman server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// `http` or `https`.
    pub scheme: &'static str,
    /// Server hostname.
    pub host: String,
    /// Server port, already upgraded for TLS.
    pub port: u16,
    /// Path prefix, always `/` or `/<prefix>/`.
    pub prefix: String,
}

/// A Foreman resource queried by one of the probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiPath {
    /// Global dashboard counters.
    Dashboard,
    /// Hosts in the given state.
    HostList(HostListMode),
    /// Last report of one client.
    LastReport {
        /// Puppet client hostname.
        client: String,
    },
}

impl Endpoint {
    /// Plain HTTP port, also the value an unset `--port` carries.
    pub const HTTP_PORT: u16 = 80;
    /// Port used instead of [`Self::HTTP_PORT`] when TLS is requested.
    pub const HTTPS_PORT: u16 = 443;

    /// Build an endpoint from connection options.
    ///
    /// Examples:
    /// - `foreman`, 80, tls, `/` -> `https://foreman:443/`
    /// - `foreman`, 8080, no tls, `custom` -> `http://foreman:8080/custom/`
    pub fn new(host: impl Into<String>, port: u16, tls: bool, prefix: &str) -> Self {
        let (scheme, port) = if tls {
            let port = if port == Self::HTTP_PORT {
                Self::HTTPS_PORT
            } else {
                port
            };
            ("https", port)
        } else {
            ("http", port)
        };

        let trimmed = prefix.trim_matches('/');
        let prefix = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };

        Self {
            scheme,
            host: host.into(),
            port,
            prefix,
        }
    }

    /// Base URL every API path is appended to.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}{}", self.scheme, self.host, self.port, self.prefix)
    }

    /// Full URL of an API path on this server.
    #[must_use]
    pub fn url(&self, path: &ApiPath) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => f.write_str("api/dashboard/"),
            Self::HostList(mode) => write!(f, "hosts/{}/", mode.as_str()),
            Self::LastReport { client } => write!(f, "hosts/{client}/reports/last"),
        }
    }
}
