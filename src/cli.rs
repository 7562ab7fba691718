mod profile;
mod schedule;
mod status;
mod tips;
mod watch;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::{
    profile::ProfileArgs,
    schedule::ScheduleArgs,
    status::{Overrides, StatusArgs},
    tips::TipsArgs,
    watch::WatchArgs,
};
use crate::profile::ProfileStore;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Where the household profile is stored.
    #[clap(
        long = "profile-path",
        env = "WATTPLY_PROFILE_PATH",
        default_value = "wattply.json",
        global = true
    )]
    pub profile_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn profile_store(&self) -> ProfileStore {
        ProfileStore::new(&self.profile_path)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the current demand state, the next change, and what to do about it.
    #[clap(name = "status")]
    Status(Box<StatusArgs>),

    /// Keep the status on screen, refreshing it periodically.
    #[clap(name = "watch")]
    Watch(Box<WatchArgs>),

    /// Show the demand windows of a day.
    #[clap(name = "schedule")]
    Schedule(ScheduleArgs),

    /// Show the estimated rate adjustments for every province.
    #[clap(name = "rates")]
    Rates,

    /// Show what to do and what to avoid in each kind of hours.
    #[clap(name = "tips")]
    Tips(TipsArgs),

    /// Manage the household profile.
    #[clap(name = "profile")]
    Profile(ProfileArgs),
}
