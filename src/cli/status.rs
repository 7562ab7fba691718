use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use clap::Parser;

use crate::{
    core::{
        appliance::{Appliance, Appliances},
        dashboard::Dashboard,
        jurisdiction::Jurisdiction,
    },
    prelude::*,
    profile::{ProfileStore, UserProfile},
    tables::build_dashboard_table,
};

/// One-off replacements for what the stored profile says.
#[derive(Clone, Parser)]
pub struct Overrides {
    #[clap(long = "province", env = "WATTPLY_PROVINCE")]
    pub jurisdiction: Option<Jurisdiction>,

    /// Appliances to plan for, instead of the ones in the profile.
    #[clap(long = "appliance", env = "WATTPLY_APPLIANCES", value_delimiter = ',', num_args = 1..)]
    pub appliances: Vec<Appliance>,
}

impl Overrides {
    #[must_use]
    pub fn jurisdiction(&self, profile: Option<&UserProfile>) -> Option<Jurisdiction> {
        self.jurisdiction.or_else(|| profile.map(|profile| profile.jurisdiction))
    }

    pub fn dashboard_at<Tz: TimeZone>(
        &self,
        now: DateTime<Tz>,
        profile: Option<&UserProfile>,
    ) -> Dashboard<Tz> {
        let appliances: Appliances = if self.appliances.is_empty() {
            profile.map(|profile| profile.appliances.clone()).unwrap_or_default()
        } else {
            self.appliances.iter().copied().collect()
        };
        Dashboard::builder()
            .now(now)
            .maybe_jurisdiction(self.jurisdiction(profile))
            .appliances(appliances)
            .maybe_quiet_hours(profile.and_then(UserProfile::active_quiet_hours))
            .build()
    }
}

#[derive(Parser)]
pub struct StatusArgs {
    /// Evaluate at this moment instead of now: RFC 3339, or local `YYYY-MM-DD HH:MM`.
    #[clap(long, env = "WATTPLY_AT", value_parser = parse_local_datetime)]
    pub at: Option<DateTime<Local>>,

    #[clap(flatten)]
    pub overrides: Overrides,
}

impl StatusArgs {
    #[instrument(skip_all)]
    pub fn run(&self, store: &ProfileStore) {
        let profile = store.read();
        if profile.is_none() {
            info!("no profile saved, run `wattply profile save` for tailored recommendations");
        }
        let now = self.at.unwrap_or_else(Local::now);
        let dashboard = self.overrides.dashboard_at(now, profile.as_ref());
        println!("{}", build_dashboard_table(&dashboard));
    }
}

pub fn parse_local_datetime(value: &str) -> Result<DateTime<Local>> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Local));
    }
    let naive = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .into_iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .with_context(|| format!("unrecognized date and time: `{value}`"))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .with_context(|| format!("`{value}` does not exist in the local time zone"))
}
