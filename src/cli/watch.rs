use std::time::Duration;

use chrono::Local;
use clap::Parser;
use tokio::{
    signal::ctrl_c,
    time::{MissedTickBehavior, interval},
};

use crate::{
    cli::Overrides,
    prelude::*,
    profile::ProfileStore,
    tables::build_dashboard_table,
};

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(long, env = "WATTPLY_WATCH_INTERVAL", default_value = "1min")]
    interval: humantime::Duration,

    #[clap(flatten)]
    overrides: Overrides,
}

impl WatchArgs {
    /// Re-render the dashboard on every tick until interrupted.
    #[instrument(skip_all, fields(interval = %self.interval))]
    pub async fn run(&self, store: &ProfileStore) -> Result {
        let period: Duration = self.interval.into();
        ensure!(!period.is_zero(), "the refresh interval must be positive");

        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    // The profile may have been changed in the meantime:
                    let profile = store.read();
                    let dashboard = self.overrides.dashboard_at(Local::now(), profile.as_ref());
                    println!("{}", build_dashboard_table(&dashboard));
                }
                result = ctrl_c() => {
                    result.context("failed to listen for the interrupt signal")?;
                    info!("interrupted");
                    return Ok(());
                }
            }
        }
    }
}
