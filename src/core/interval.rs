use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Local, TimeDelta, TimeZone};

#[must_use]
#[derive(Clone)]
pub struct Interval<Tz: TimeZone = Local> {
    /// Inclusive.
    pub start: DateTime<Tz>,

    /// Exclusive.
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> Debug for Interval<Tz> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl<Tz: TimeZone> PartialEq for Interval<Tz> {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start) && (self.end == other.end)
    }
}

impl<Tz: TimeZone> Eq for Interval<Tz> {}

impl<Tz: TimeZone> Interval<Tz> {
    pub const fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end.clone() - self.start.clone()
    }

    #[must_use]
    pub fn contains(&self, other: &DateTime<Tz>) -> bool {
        (self.start <= *other) && (*other < self.end)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_contains() {
        let interval = Interval::new(
            Utc.with_ymd_and_hms(2026, 10, 17, 21, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 18, 7, 0, 0).unwrap(),
        );
        assert!(interval.contains(&interval.start));
        assert!(!interval.contains(&interval.end));
        assert!(interval.contains(&Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap()));
        assert_eq!(interval.duration(), TimeDelta::hours(10));
    }
}
