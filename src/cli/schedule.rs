use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{
    core::{jurisdiction::Jurisdiction, schedule::day_windows},
    prelude::*,
    profile::ProfileStore,
    tables::build_schedule_table,
};

#[derive(Parser)]
pub struct ScheduleArgs {
    /// Day to show, today by default.
    #[clap(long, env = "WATTPLY_DATE")]
    date: Option<NaiveDate>,

    #[clap(long = "province", env = "WATTPLY_PROVINCE")]
    jurisdiction: Option<Jurisdiction>,
}

impl ScheduleArgs {
    #[instrument(skip_all)]
    pub fn run(&self, store: &ProfileStore) {
        let jurisdiction = self
            .jurisdiction
            .or_else(|| store.read().map(|profile| profile.jurisdiction))
            .unwrap_or(Jurisdiction::BASELINE);
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        info!(%date, %jurisdiction, "building the schedule…");
        println!("{}", build_schedule_table(&day_windows(&Local, date), jurisdiction));
    }
}
