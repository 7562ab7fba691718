use clap::{Parser, Subcommand};

use crate::{
    core::{
        appliance::Appliance,
        jurisdiction::Jurisdiction,
        quiet_hours::QuietHours,
        time_of_day::TimeOfDay,
    },
    prelude::*,
    profile::{HomeType, ProfileStore, UserProfile},
    tables::build_profile_table,
};

#[derive(Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Print the saved profile.
    Show,

    /// Save the profile, replacing the previous one entirely.
    Save(Box<SaveProfileArgs>),

    /// Remove the saved profile.
    Clear,
}

impl ProfileArgs {
    pub fn run(&self, store: &ProfileStore) -> Result {
        match &self.command {
            ProfileCommand::Show => {
                match store.read() {
                    Some(profile) => println!("{}", build_profile_table(&profile)),
                    None => println!(
                        "No profile saved at `{}` yet, see `wattply profile save --help`.",
                        store.path().display(),
                    ),
                }
                Ok(())
            }
            ProfileCommand::Save(args) => {
                let profile = args.to_profile();
                store.write(&profile)?;
                println!("{}", build_profile_table(&profile));
                if let Some(notice) = profile.jurisdiction.notice() {
                    println!("{}\n{}", notice.title, notice.body);
                }
                Ok(())
            }
            ProfileCommand::Clear => store.clear(),
        }
    }
}

#[derive(Parser)]
pub struct SaveProfileArgs {
    #[clap(long = "province", env = "WATTPLY_PROVINCE", default_value = "bc")]
    jurisdiction: Jurisdiction,

    #[clap(long, env = "WATTPLY_HOME_TYPE", default_value = "condo")]
    home_type: HomeType,

    /// The household charges an electric vehicle.
    #[clap(long, env = "WATTPLY_EV_CHARGING")]
    ev_charging: bool,

    /// Do not keep quiet hours.
    #[clap(long, env = "WATTPLY_NO_QUIET_HOURS")]
    no_quiet_hours: bool,

    /// Start of the quiet hours, for example `10 PM` or `22:00`.
    #[clap(long, env = "WATTPLY_QUIET_START", default_value = "10 PM")]
    quiet_start: TimeOfDay,

    /// End of the quiet hours, for example `7 AM` or `07:00`.
    #[clap(long, env = "WATTPLY_QUIET_END", default_value = "7 AM")]
    quiet_end: TimeOfDay,

    /// Appliances to get recommendations for.
    #[clap(long = "appliance", env = "WATTPLY_APPLIANCES", value_delimiter = ',', num_args = 1..)]
    appliances: Vec<Appliance>,
}

impl SaveProfileArgs {
    fn to_profile(&self) -> UserProfile {
        UserProfile::builder()
            .jurisdiction(self.jurisdiction)
            .home_type(self.home_type)
            .has_ev_charging(self.ev_charging)
            .has_quiet_hours(!self.no_quiet_hours)
            .quiet_hours(QuietHours { start: self.quiet_start, end: self.quiet_end })
            .appliances(self.appliances.iter().copied().collect())
            .build()
    }
}
