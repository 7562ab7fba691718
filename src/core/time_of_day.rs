use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use chrono::{DateTime, NaiveTime, TimeDelta, TimeZone, Timelike};

use crate::prelude::*;

/// Whole minutes since local midnight, always within `0..1440`.
#[must_use]
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    serde_with::SerializeDisplay,
    serde_with::DeserializeFromStr,
)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(0);

    /// Full hour, for compile-time constants.
    pub const fn from_hours(hour: u16) -> Self {
        assert!(hour < 24);
        Self(hour * 60)
    }

    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 { Some(Self(hour * 60 + minute)) } else { None }
    }

    /// Time of day of the instant, seconds truncated.
    #[expect(clippy::cast_possible_truncation)]
    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self((instant.hour() * 60 + instant.minute()) as u16)
    }

    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Iterate over every minute of the day.
    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..24 * 60).map(Self)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        Self::MIN + TimeDelta::minutes(i64::from(time.0))
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Debug for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Accepts the 24-hour `21:30` as well as the 12-hour `9 PM` and `9:30 pm`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let upper = s.to_ascii_uppercase();
        let (clock, meridiem) = if let Some(clock) = upper.strip_suffix("AM") {
            (clock.trim_end(), Some(false))
        } else if let Some(clock) = upper.strip_suffix("PM") {
            (clock.trim_end(), Some(true))
        } else {
            (upper.as_str(), None)
        };

        let (hour, minute) = match clock.split_once(':') {
            Some((hour, minute)) => (hour, minute),
            None if meridiem.is_some() => (clock, "0"),
            None => bail!("expected `HH:MM` or `H AM/PM`, got `{s}`"),
        };
        let hour: u16 = hour.trim().parse().with_context(|| format!("invalid hour in `{s}`"))?;
        let minute: u16 =
            minute.trim().parse().with_context(|| format!("invalid minute in `{s}`"))?;

        let hour = match meridiem {
            Some(is_pm) => {
                ensure!((1..=12).contains(&hour), "12-hour clock hour out of range in `{s}`");
                (hour % 12) + if is_pm { 12 } else { 0 }
            }
            None => hour,
        };
        Self::from_hm(hour, minute).with_context(|| format!("time of day out of range: `{s}`"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_of_instant() -> Result {
        let instant = Utc.with_ymd_and_hms(2026, 10, 17, 18, 30, 59).unwrap();
        assert_eq!(TimeOfDay::of(&instant).minutes(), 1110);

        let offset = FixedOffset::east_opt(-8 * 3600).context("bad offset")?;
        let instant = offset.with_ymd_and_hms(2026, 10, 17, 6, 5, 0).unwrap();
        assert_eq!(TimeOfDay::of(&instant), TimeOfDay::from_hm(6, 5).unwrap());
        Ok(())
    }

    #[test]
    fn test_bounds() {
        assert_eq!(TimeOfDay::from_hm(23, 59).unwrap().minutes(), 1439);
        assert!(TimeOfDay::from_hm(24, 0).is_none());
        assert!(TimeOfDay::from_hm(23, 60).is_none());
        assert_eq!(TimeOfDay::all().count(), 1440);
    }

    #[test]
    fn test_into_naive_time() {
        let time = NaiveTime::from(TimeOfDay::from_hm(21, 15).unwrap());
        assert_eq!(time, NaiveTime::from_hms_opt(21, 15, 0).unwrap());
        assert_eq!(NaiveTime::from(TimeOfDay::MIDNIGHT), NaiveTime::MIN);
    }

    #[test]
    fn test_parse_24_hour() -> Result {
        assert_eq!("21:00".parse::<TimeOfDay>()?, TimeOfDay::from_hours(21));
        assert_eq!(" 7:05 ".parse::<TimeOfDay>()?, TimeOfDay::from_hm(7, 5).unwrap());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
        assert!("21".parse::<TimeOfDay>().is_err());
        Ok(())
    }

    #[test]
    fn test_parse_12_hour() -> Result {
        assert_eq!("10 PM".parse::<TimeOfDay>()?, TimeOfDay::from_hours(22));
        assert_eq!("7 AM".parse::<TimeOfDay>()?, TimeOfDay::from_hours(7));
        assert_eq!("9:30 pm".parse::<TimeOfDay>()?, TimeOfDay::from_hm(21, 30).unwrap());
        assert_eq!("12 AM".parse::<TimeOfDay>()?, TimeOfDay::MIDNIGHT);
        assert_eq!("12 PM".parse::<TimeOfDay>()?, TimeOfDay::from_hours(12));
        assert!("13 PM".parse::<TimeOfDay>().is_err());
        assert!("0 AM".parse::<TimeOfDay>().is_err());
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeOfDay::from_hm(7, 5).unwrap().to_string(), "07:05");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn test_serde() -> Result {
        let time: TimeOfDay = serde_json::from_str(r#""10 PM""#)?;
        assert_eq!(time, TimeOfDay::from_hours(22));
        assert_eq!(serde_json::to_string(&time)?, r#""22:00""#);
        Ok(())
    }
}
