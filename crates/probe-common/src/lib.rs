//! # probe-common
//!
//! Shared types for the Foreman monitoring probes.
//!
//! This crate provides the pieces every probe needs regardless of which
//! endpoint it queries:
//! - Monitoring status levels and their exit codes
//! - Warning/critical threshold classification
//! - Report timestamp parsing and elapsed-time rendering
//! - Common error types

#![warn(missing_docs)]

pub mod error;
pub mod levels;
pub mod status;
pub mod time;

pub use error::{ProbeError, ProbeResult};
pub use levels::Levels;
pub use status::{Status, Verdict};
pub use time::{format_elapsed, parse_report_timestamp};
