use clap::Parser;
use enumset::EnumSet;

use crate::{
    core::{
        demand_state::DemandState,
        recommendation::{TIPS_SUMMARY, tips},
    },
    tables::build_tips_table,
};

#[derive(Parser)]
pub struct TipsArgs {
    /// Only show the tips for this state.
    #[clap(long, env = "WATTPLY_TIPS_STATE")]
    state: Option<DemandState>,
}

impl TipsArgs {
    fn states(&self) -> EnumSet<DemandState> {
        self.state.map_or_else(EnumSet::all, EnumSet::only)
    }

    pub fn run(&self) {
        println!("{TIPS_SUMMARY}");
        println!("{}", build_tips_table(self.states().iter().map(tips)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::{Args, Command},
        prelude::*,
    };

    fn parse_tips(args: &[&str]) -> Result<EnumSet<DemandState>> {
        let args =
            Args::try_parse_from(["wattply", "tips"].into_iter().chain(args.iter().copied()))?;
        match args.command {
            Command::Tips(args) => Ok(args.states()),
            _ => bail!("expected `tips`"),
        }
    }

    #[test]
    fn test_all_states_by_default() -> Result {
        assert_eq!(parse_tips(&[])?, EnumSet::all());
        Ok(())
    }

    #[test]
    fn test_single_state() -> Result {
        assert_eq!(parse_tips(&["--state", "red"])?, EnumSet::only(DemandState::Red));
        Ok(())
    }
}
