//! Monitoring status levels and verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Service state as understood by Nagios-compatible supervisors.
///
/// Variants are ordered by severity except for [`Status::Unknown`], which
/// sorts last to match its exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Everything within levels.
    Ok,
    /// Warning level reached.
    Warning,
    /// Critical level reached, or the service could not be reached.
    Critical,
    /// The check itself could not reach a conclusion.
    Unknown,
}

impl Status {
    /// Plugin exit code for this status.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// Label printed at the start of the plugin output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one probe: a status plus a human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Classified status.
    pub status: Status,
    /// Message shown to the operator.
    pub message: String,
}

impl Verdict {
    /// Create a verdict.
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Shorthand for a critical verdict.
    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Status::Critical, message)
    }

    /// Shorthand for an unknown verdict.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Status::Unknown, message)
    }

    /// Plugin exit code for this verdict.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.status, self.message)
    }
}
