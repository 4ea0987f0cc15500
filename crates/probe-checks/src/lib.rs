//! # Foreman probes
//!
//! Nagios-compatible plugins reporting on Puppet runs through Foreman.
//!
//! Three binaries share this library:
//! - `check_foreman_dashboard`: one dashboard counter against levels
//! - `check_puppet_nodes`: the size of a host list against levels
//! - `check_puppet`: age and outcome of one client's last report
//!
//! Each run performs a single GET, evaluates the reply and exits with the
//! plugin status code (0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN).
//!
//! ## Usage
//!
//! ```no_run
//! use probe_checks::checks::DashboardCheck;
//! use probe_checks::runner;
//! use probe_common::Levels;
//! use probe_foreman::{DashboardMode, Endpoint, ForemanClient};
//! use std::time::Duration;
//!
//! # async fn example() -> probe_common::ProbeResult<()> {
//! let check = DashboardCheck {
//!     endpoint: Endpoint::new("foreman.example.com", 80, false, "/"),
//!     mode: DashboardMode::OutOfSyncHosts,
//!     levels: Levels::new(5, 10),
//! };
//! let client = ForemanClient::new(Duration::from_secs(10), None)?;
//! let verdict = runner::run(&check, &client).await;
//! println!("{verdict}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod checks;
pub mod cli;
pub mod logging;
pub mod runner;
