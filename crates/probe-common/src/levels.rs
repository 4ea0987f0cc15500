//! Warning/critical threshold classification.
//!
//! Both levels are upper bounds and both are inclusive: a value equal to a
//! level has reached it. Critical is tested first, so when the two levels
//! are equal or inverted the more severe status wins.

use std::fmt;

use crate::status::Status;

/// A pair of upper levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels<T> {
    /// Values at or above this are at least WARNING.
    pub warning: T,
    /// Values at or above this are CRITICAL.
    pub critical: T,
}

impl<T: PartialOrd> Levels<T> {
    /// Create a new pair of levels. No ordering between them is enforced.
    pub const fn new(warning: T, critical: T) -> Self {
        Self { warning, critical }
    }

    /// Classify a value against the levels.
    pub fn classify(&self, value: &T) -> Status {
        if *value >= self.critical {
            Status::Critical
        } else if *value >= self.warning {
            Status::Warning
        } else {
            Status::Ok
        }
    }

    /// Convert both levels with the same function, e.g. minutes into a duration.
    pub fn map<U, F>(self, mut f: F) -> Levels<U>
    where
        F: FnMut(T) -> U,
    {
        Levels {
            warning: f(self.warning),
            critical: f(self.critical),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Levels<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.warning, self.critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_conventional_levels() {
        let levels = Levels::new(5, 10);
        assert_eq!(levels.classify(&0), Status::Ok);
        assert_eq!(levels.classify(&4), Status::Ok);
        assert_eq!(levels.classify(&5), Status::Warning);
        assert_eq!(levels.classify(&9), Status::Warning);
        assert_eq!(levels.classify(&10), Status::Critical);
        assert_eq!(levels.classify(&12), Status::Critical);
    }

    #[test]
    fn equal_levels_resolve_to_critical() {
        let levels = Levels::new(3, 3);
        assert_eq!(levels.classify(&3), Status::Critical);
        assert_eq!(levels.classify(&2), Status::Ok);
    }

    #[test]
    fn zero_and_negative_levels() {
        let levels = Levels::new(-1, 0);
        assert_eq!(levels.classify(&0), Status::Critical);
        assert_eq!(levels.classify(&-1), Status::Warning);
        assert_eq!(levels.classify(&-2), Status::Ok);
    }

    #[test]
    fn map_converts_units() {
        let minutes = Levels::new(30_i64, 60_i64);
        let seconds = minutes.map(|m| m * 60);
        assert_eq!(seconds, Levels::new(1800, 3600));
        assert_eq!(seconds.classify(&1800), Status::Warning);
    }

    #[test]
    fn display() {
        assert_eq!(Levels::new(5, 10).to_string(), "5/10");
    }
}
