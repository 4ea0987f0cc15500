//! CLI definitions for the three probes.

use std::fmt;
use std::time::Duration;

use clap::{Args, Parser};
use probe_common::{Levels, ProbeResult, Verdict, time};
use probe_foreman::{Credentials, DashboardMode, Endpoint, ForemanClient, HostListMode};

use crate::checks::{DashboardCheck, HostListCheck, LastReportCheck};
use crate::runner;

const DASHBOARD_HELP: &str = "\
Warning and Critical are maximum number of hosts foreman has in that MODE

Example:
  check_foreman_dashboard -H foreman.example.com -m out_of_sync_hosts -w 5 -c 10
  warns when 5 nodes are out of sync, goes critical at 10";

const NODES_HELP: &str = "\
Warning and Critical are maximum number of hosts foreman has in that MODE

Example:
  check_puppet_nodes -H foreman.example.com -m out_of_sync -w 5 -c 10
  warns when 5 nodes are out of sync, goes critical at 10";

const PUPPET_HELP: &str = "\
Warning and Critical are defined in minutes

Example:
  check_puppet -H server1.example.com -F foreman.example.com -w 60 -c 120
  checks that server1 reported to foreman.example.com in the last hour";

/// Network and authentication options shared by every probe.
#[derive(Args, Clone)]
#[command(next_help_heading = "Connection Options")]
pub struct ConnectionArgs {
    /// Foreman username
    #[arg(short, long, env = "FOREMAN_USERNAME")]
    pub username: Option<String>,

    /// Foreman password
    #[arg(short, long, env = "FOREMAN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Connection timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// Foreman port (80 becomes 443 with --ssl)
    #[arg(short = 'P', long, default_value_t = Endpoint::HTTP_PORT)]
    pub port: u16,

    /// Foreman prefix, if not installed on /
    #[arg(long, default_value = "/")]
    pub prefix: String,

    /// If the connection requires ssl
    #[arg(short = 'S', long)]
    pub ssl: bool,

    /// Verbose mode: echo arguments and the raw server reply on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConnectionArgs {
    /// Endpoint of the given Foreman server.
    #[must_use]
    pub fn endpoint(&self, host: &str) -> Endpoint {
        Endpoint::new(host, self.port, self.ssl, &self.prefix)
    }

    /// Credentials, when both username and password are set.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(self.username.as_deref(), self.password.as_deref())
    }

    /// Build the HTTP client for one run.
    pub fn client(&self) -> ProbeResult<ForemanClient> {
        ForemanClient::new(Duration::from_secs(self.timeout), self.credentials())
    }
}

impl fmt::Debug for ConnectionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionArgs")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("port", &self.port)
            .field("prefix", &self.prefix)
            .field("ssl", &self.ssl)
            .field("verbose", &self.verbose)
            .finish()
    }
}

/// Check if the puppet nodes are globally healthy: not too many in errors,
/// not too many out of sync.
#[derive(Parser, Debug)]
#[command(name = "check_foreman_dashboard")]
#[command(author, version, long_about = None)]
#[command(after_help = DASHBOARD_HELP)]
pub struct DashboardCli {
    /// Foreman hostname
    #[arg(short = 'H', long)]
    pub hostname: String,

    /// Dashboard counter to check
    #[arg(short, long, value_enum)]
    pub mode: DashboardMode,

    /// Warning level in hosts
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    pub warning: i64,

    /// Critical level in hosts
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pub critical: i64,

    /// Connection options.
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl DashboardCli {
    /// The check described by these arguments.
    #[must_use]
    pub fn check(&self) -> DashboardCheck {
        DashboardCheck {
            endpoint: self.connection.endpoint(&self.hostname),
            mode: self.mode,
            levels: Levels::new(self.warning, self.critical),
        }
    }

    /// Run the check once.
    pub async fn execute(&self) -> Verdict {
        tracing::debug!(args = ?self, "CLI arguments");
        runner::execute(&self.check(), &self.connection).await
    }
}

/// Check if the puppet nodes are globally healthy, counting the hosts
/// Foreman lists in a given state.
#[derive(Parser, Debug)]
#[command(name = "check_puppet_nodes")]
#[command(author, version, long_about = None)]
#[command(after_help = NODES_HELP)]
pub struct NodesCli {
    /// Foreman hostname
    #[arg(short = 'H', long)]
    pub hostname: String,

    /// Host state to count
    #[arg(short, long, value_enum)]
    pub mode: HostListMode,

    /// Warning level in hosts
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    pub warning: i64,

    /// Critical level in hosts
    #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
    pub critical: i64,

    /// Connection options.
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl NodesCli {
    /// The check described by these arguments.
    #[must_use]
    pub fn check(&self) -> HostListCheck {
        HostListCheck {
            endpoint: self.connection.endpoint(&self.hostname),
            mode: self.mode,
            levels: Levels::new(self.warning, self.critical),
        }
    }

    /// Run the check once.
    pub async fn execute(&self) -> Verdict {
        tracing::debug!(args = ?self, "CLI arguments");
        runner::execute(&self.check(), &self.connection).await
    }
}

/// Check that the last report of a puppet client was successful and not
/// too long ago.
#[derive(Parser, Debug)]
#[command(name = "check_puppet")]
#[command(author, version, long_about = None)]
#[command(after_help = PUPPET_HELP)]
pub struct PuppetCli {
    /// Puppet client hostname
    #[arg(short = 'H', long)]
    pub hostname: String,

    /// Foreman host to contact
    #[arg(short = 'F', long)]
    pub foreman: String,

    /// Warning level in minutes
    #[arg(short, long, default_value_t = 30, allow_negative_numbers = true)]
    pub warning: i64,

    /// Critical level in minutes
    #[arg(short, long, default_value_t = 60, allow_negative_numbers = true)]
    pub critical: i64,

    /// Connection options.
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl PuppetCli {
    /// The check described by these arguments, measured from now.
    #[must_use]
    pub fn check(&self) -> LastReportCheck {
        LastReportCheck {
            endpoint: self.connection.endpoint(&self.foreman),
            client: self.hostname.clone(),
            levels: Levels::new(self.warning, self.critical),
            reference_time: time::now_seconds(),
        }
    }

    /// Run the check once.
    pub async fn execute(&self) -> Verdict {
        tracing::debug!(args = ?self, "CLI arguments");
        runner::execute(&self.check(), &self.connection).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn commands_are_well_formed() {
        DashboardCli::command().debug_assert();
        NodesCli::command().debug_assert();
        PuppetCli::command().debug_assert();
    }

    #[test]
    fn dashboard_defaults() {
        let cli = DashboardCli::try_parse_from([
            "check_foreman_dashboard",
            "-H",
            "foreman.example.com",
            "-m",
            "out_of_sync_hosts",
        ])
        .unwrap();
        assert_eq!(cli.mode, DashboardMode::OutOfSyncHosts);
        assert_eq!((cli.warning, cli.critical), (5, 10));
        assert_eq!(cli.connection.timeout, 10);
        assert_eq!(cli.connection.port, 80);
        assert_eq!(cli.connection.prefix, "/");
        assert!(!cli.connection.ssl);
        assert!(!cli.connection.verbose);
    }

    #[test]
    fn puppet_defaults_are_minutes() {
        let cli = PuppetCli::try_parse_from([
            "check_puppet",
            "-H",
            "web01.example.com",
            "-F",
            "foreman.example.com",
        ])
        .unwrap();
        assert_eq!((cli.warning, cli.critical), (30, 60));
        assert_eq!(cli.check().client, "web01.example.com");
        assert_eq!(cli.check().endpoint.host, "foreman.example.com");
    }

    #[test]
    fn missing_hostname_is_a_usage_error() {
        let err = DashboardCli::try_parse_from(["check_foreman_dashboard", "-m", "total_hosts"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_foreman_is_a_usage_error() {
        let err = PuppetCli::try_parse_from(["check_puppet", "-H", "web01"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn stray_positional_is_rejected() {
        let err = NodesCli::try_parse_from([
            "check_puppet_nodes",
            "-H",
            "foreman",
            "-m",
            "errors",
            "extra",
        ])
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = NodesCli::try_parse_from(["check_puppet_nodes", "-H", "foreman", "-m", "broken"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn ssl_upgrades_default_port() {
        let cli = NodesCli::try_parse_from([
            "check_puppet_nodes",
            "-H",
            "foreman",
            "-m",
            "active",
            "-S",
            "--prefix",
            "custom",
        ])
        .unwrap();
        assert_eq!(
            cli.check().endpoint.base_url(),
            "https://foreman:443/custom/"
        );
    }

    #[test]
    fn negative_levels_are_accepted() {
        let cli = DashboardCli::try_parse_from([
            "check_foreman_dashboard",
            "-H",
            "foreman",
            "-m",
            "bad_hosts",
            "-w",
            "-1",
            "-c",
            "0",
        ])
        .unwrap();
        assert_eq!(cli.check().levels, Levels::new(-1, 0));
    }

    #[test]
    fn credentials_need_both_parts() {
        let cli = DashboardCli::try_parse_from([
            "check_foreman_dashboard",
            "-H",
            "foreman",
            "-m",
            "bad_hosts",
            "-u",
            "admin",
            "-p",
            "secret",
        ])
        .unwrap();
        assert_eq!(cli.connection.credentials(), Some(Credentials::new("admin", "secret")));

        let debug = format!("{cli:?}");
        assert!(!debug.contains("secret"));
    }
}
