//! Canonical booking intervals

use jiff::civil;
use thiserror::Error;

/// Interval construction failed because the end did not fall after the start.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("interval must end strictly after it starts")]
pub struct InvalidInterval;

/// A half-open `[start, end)` interval in the canonical UTC frame.
///
/// Two intervals conflict when they share any instant; touching endpoints do
/// not conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: civil::DateTime,
    end: civil::DateTime,
}

impl Interval {
    /// Create an interval from canonical start and end timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInterval`] unless `end` falls strictly after `start`.
    pub fn new(start: civil::DateTime, end: civil::DateTime) -> Result<Self, InvalidInterval> {
        if end > start {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval)
        }
    }

    /// Inclusive start of the interval.
    pub fn start(&self) -> civil::DateTime {
        self.start
    }

    /// Exclusive end of the interval.
    pub fn end(&self) -> civil::DateTime {
        self.end
    }

    /// Half-open overlap test: `s1 < e2 && s2 < e1`.
    ///
    /// Reflexive for any valid interval; false for intervals that merely
    /// touch at an endpoint.
    pub fn overlaps(&self, other: Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil;

    use testresult::TestResult;

    use super::{Interval, InvalidInterval};

    fn hour(h: i8) -> civil::DateTime {
        civil::date(2021, 9, 16).at(h, 0, 0, 0)
    }

    #[test]
    fn rejects_inverted_and_empty_intervals() {
        assert_eq!(Interval::new(hour(11), hour(10)), Err(InvalidInterval));
        assert_eq!(Interval::new(hour(10), hour(10)), Err(InvalidInterval));
    }

    #[test]
    fn every_interval_overlaps_itself() -> TestResult {
        let interval = Interval::new(hour(10), hour(11))?;

        assert!(interval.overlaps(interval));

        Ok(())
    }

    #[test]
    fn touching_endpoints_do_not_overlap() -> TestResult {
        let morning = Interval::new(hour(9), hour(11))?;
        let midday = Interval::new(hour(11), hour(13))?;

        assert!(!morning.overlaps(midday));
        assert!(!midday.overlaps(morning));

        Ok(())
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() -> TestResult {
        let morning = Interval::new(hour(9), hour(10))?;
        let afternoon = Interval::new(hour(14), hour(16))?;

        assert!(!morning.overlaps(afternoon));
        assert!(!afternoon.overlaps(morning));

        Ok(())
    }

    #[test]
    fn partial_and_contained_overlaps_are_detected() -> TestResult {
        let outer = Interval::new(hour(9), hour(13))?;
        let inner = Interval::new(hour(10), hour(11))?;
        let straddling = Interval::new(hour(12), hour(15))?;

        assert!(outer.overlaps(inner));
        assert!(inner.overlaps(outer));
        assert!(outer.overlaps(straddling));
        assert!(straddling.overlaps(outer));

        Ok(())
    }
}
