//! # probe-foreman
//!
//! The Foreman side of the probes.
//!
//! This crate provides:
//! - Endpoint URL assembly (scheme, port upgrade, path prefix)
//! - Basic authentication credentials
//! - A single-request JSON client
//! - Typed views of the dashboard, host list and last report payloads

#![warn(missing_docs)]

pub mod client;
pub mod credentials;
pub mod endpoint;
pub mod report;

pub use client::ForemanClient;
pub use credentials::Credentials;
pub use endpoint::{ApiPath, Endpoint};
pub use report::{DashboardMode, DashboardReport, HostList, HostListMode, LastReport};
