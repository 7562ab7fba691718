use bon::bon;
use chrono::{DateTime, Local, TimeZone};

use crate::{
    core::{
        appliance::Appliances,
        demand_state::Status,
        interval::Interval,
        jurisdiction::{Jurisdiction, rate_adjustment},
        quiet_hours::QuietHours,
        recommendation::{estimate_savings, recommend},
        schedule::{classify_at, next_change, next_green_window, next_rate_adjustment},
        time_of_day::TimeOfDay,
    },
    quantity::rate::KilowattHourRate,
};

/// Everything the screen shows for a single moment.
#[must_use]
#[derive(Clone, Debug)]
pub struct Dashboard<Tz: TimeZone = Local> {
    pub now: DateTime<Tz>,
    pub status: Status,
    pub next_change: DateTime<Tz>,
    pub green_window: Interval<Tz>,
    pub recommendation: String,
    pub estimated_savings: &'static str,
    pub jurisdiction: Jurisdiction,
    pub current_rate: KilowattHourRate,
    pub next_rate: KilowattHourRate,

    /// Set when the moment falls into the household's quiet hours.
    pub active_quiet_hours: Option<QuietHours>,
}

#[bon]
impl<Tz: TimeZone> Dashboard<Tz> {
    #[builder]
    pub fn new(
        now: DateTime<Tz>,
        jurisdiction: Option<Jurisdiction>,
        #[builder(default)] appliances: Appliances,
        quiet_hours: Option<QuietHours>,
    ) -> Self {
        let status = classify_at(&now).status();
        let jurisdiction = jurisdiction.unwrap_or(Jurisdiction::BASELINE);
        let time = TimeOfDay::of(&now);
        Self {
            status,
            next_change: next_change(&now),
            green_window: next_green_window(&now),
            recommendation: recommend(status.state, &appliances),
            estimated_savings: estimate_savings(status.state),
            jurisdiction,
            current_rate: rate_adjustment(status.state, Some(jurisdiction)),
            next_rate: next_rate_adjustment(&now, Some(jurisdiction)),
            active_quiet_hours: quiet_hours.filter(|quiet_hours| quiet_hours.contains(time)),
            now,
        }
    }
}
