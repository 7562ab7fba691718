//! Fixed demand windows and everything derived from them.
//!
//! | Window        | State  |
//! |---------------|--------|
//! | 16:00 – 21:00 | Red    |
//! | 21:00 – 07:00 | Green  |
//! | 07:00 – 16:00 | Yellow |

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone};

use crate::{
    core::{
        demand_state::DemandState,
        interval::Interval,
        jurisdiction::{Jurisdiction, rate_adjustment},
        time_of_day::TimeOfDay,
    },
    quantity::rate::KilowattHourRate,
};

pub const RED_START: TimeOfDay = TimeOfDay::from_hours(16);
pub const RED_END: TimeOfDay = TimeOfDay::from_hours(21);
pub const GREEN_START: TimeOfDay = TimeOfDay::from_hours(21);
pub const GREEN_END: TimeOfDay = TimeOfDay::from_hours(7);

/// Demand state at the time of day. Red takes precedence, then the midnight-wrapping green.
pub const fn classify(time: TimeOfDay) -> DemandState {
    let minutes = time.minutes();
    if minutes >= RED_START.minutes() && minutes < RED_END.minutes() {
        DemandState::Red
    } else if minutes >= GREEN_START.minutes() || minutes < GREEN_END.minutes() {
        DemandState::Green
    } else {
        DemandState::Yellow
    }
}

pub fn classify_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> DemandState {
    classify(TimeOfDay::of(instant))
}

/// The next instant at which the demand state changes, rolling over to the next day when needed.
pub fn next_change<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let time = TimeOfDay::of(now);
    let today = now.date_naive();
    let timezone = now.timezone();
    match classify(time) {
        DemandState::Red => at(&timezone, today, RED_END),
        DemandState::Green if time >= GREEN_START => at(&timezone, tomorrow(today), GREEN_END),
        DemandState::Green => at(&timezone, today, GREEN_END),
        DemandState::Yellow => at(&timezone, today, RED_START),
    }
}

/// Current or upcoming green window.
///
/// Inside the morning part of the window, this returns what is left of it since midnight
/// rather than the following evening's window.
pub fn next_green_window<Tz: TimeZone>(now: &DateTime<Tz>) -> Interval<Tz> {
    let today = now.date_naive();
    let timezone = now.timezone();
    if TimeOfDay::of(now) < GREEN_END {
        Interval::new(at(&timezone, today, TimeOfDay::MIDNIGHT), at(&timezone, today, GREEN_END))
    } else {
        Interval::new(at(&timezone, today, GREEN_START), at(&timezone, tomorrow(today), GREEN_END))
    }
}

/// Rate adjustment of the state that follows the next change.
///
/// Looks one minute past the boundary so that the instant of the change itself is not counted.
pub fn next_rate_adjustment<Tz: TimeZone>(
    now: &DateTime<Tz>,
    jurisdiction: Option<Jurisdiction>,
) -> KilowattHourRate {
    let upcoming = next_change(now) + TimeDelta::minutes(1);
    rate_adjustment(classify_at(&upcoming), jurisdiction)
}

/// Split the calendar day into consecutive windows of the same demand state.
pub fn day_windows<Tz: TimeZone>(
    timezone: &Tz,
    date: NaiveDate,
) -> Vec<(Interval<Tz>, DemandState)> {
    let end_of_day = at(timezone, tomorrow(date), TimeOfDay::MIDNIGHT);
    let mut start = at(timezone, date, TimeOfDay::MIDNIGHT);
    let mut windows = Vec::with_capacity(4);
    while start < end_of_day {
        let state = classify_at(&start);
        let end = next_change(&start).min(end_of_day.clone());
        windows.push((Interval::new(start, end.clone()), state));
        start = end;
    }
    windows
}

/// Local instant at the date and time of day.
///
/// A time that falls into a DST gap is moved forward by the size of a typical gap.
fn at<Tz: TimeZone>(timezone: &Tz, date: NaiveDate, time: TimeOfDay) -> DateTime<Tz> {
    let naive = date.and_time(time.into());
    timezone
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| timezone.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest())
        .unwrap_or_else(|| timezone.from_utc_datetime(&naive))
}

fn tomorrow(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}
