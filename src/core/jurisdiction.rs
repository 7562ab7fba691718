use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{core::demand_state::DemandState, quantity::rate::KilowattHourRate};

/// Regional pricing regime.
#[derive(Debug, Default, Hash, clap::ValueEnum, enumset::EnumSetType, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    /// British Columbia, the baseline.
    #[default]
    Bc,

    Ontario,

    Alberta,
}

impl Jurisdiction {
    pub const BASELINE: Self = Self::Bc;

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bc => "British Columbia",
            Self::Ontario => "Ontario",
            Self::Alberta => "Alberta",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Bc => "BC Hydro patterns (condo mode).",
            Self::Ontario => "Ontario residential patterns.",
            Self::Alberta => "Alberta residential patterns.",
        }
    }

    /// Heads-up shown once the profile is set up, if the region has one.
    pub const fn notice(self) -> Option<Notice> {
        match self {
            Self::Bc => Some(Notice {
                title: "In apartments and condos, time-based pricing may offer limited savings.",
                body: "Wattply focuses on avoiding peak demand and helping you make better timing \
                       decisions.",
            }),
            Self::Alberta => Some(Notice {
                title: "Electricity prices in Alberta can change often.",
                body: "Wattply helps you stay aware of high- and low-price periods.",
            }),
            Self::Ontario => None,
        }
    }

    pub const fn rate_adjustments(self) -> RateAdjustmentTable {
        match self {
            Self::Bc => RateAdjustmentTable {
                green: KilowattHourRate::new(-5, 2),
                yellow: KilowattHourRate::ZERO,
                red: KilowattHourRate::new(5, 2),
            },
            Self::Ontario | Self::Alberta => RateAdjustmentTable {
                green: KilowattHourRate::new(-3, 2),
                yellow: KilowattHourRate::ZERO,
                red: KilowattHourRate::new(3, 2),
            },
        }
    }
}

impl Display for Jurisdiction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub title: &'static str,
    pub body: &'static str,
}

/// Estimated price delta for each demand state.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RateAdjustmentTable {
    pub green: KilowattHourRate,
    pub yellow: KilowattHourRate,
    pub red: KilowattHourRate,
}

impl RateAdjustmentTable {
    #[must_use]
    pub const fn get(self, state: DemandState) -> KilowattHourRate {
        match state {
            DemandState::Green => self.green,
            DemandState::Yellow => self.yellow,
            DemandState::Red => self.red,
        }
    }
}

/// Rate adjustment for the state, falling back to the baseline jurisdiction when unset.
#[must_use]
pub const fn rate_adjustment(
    state: DemandState,
    jurisdiction: Option<Jurisdiction>,
) -> KilowattHourRate {
    let jurisdiction = match jurisdiction {
        Some(jurisdiction) => jurisdiction,
        None => Jurisdiction::BASELINE,
    };
    jurisdiction.rate_adjustments().get(state)
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_bc_rate_adjustments() {
        let bc = Some(Jurisdiction::Bc);
        assert_eq!(rate_adjustment(DemandState::Green, bc), KilowattHourRate(dec!(-0.05)));
        assert_eq!(rate_adjustment(DemandState::Red, bc), KilowattHourRate(dec!(0.05)));
        assert_eq!(rate_adjustment(DemandState::Yellow, bc), KilowattHourRate(dec!(0)));
    }

    #[test]
    fn test_ontario_and_alberta() {
        for jurisdiction in [Jurisdiction::Ontario, Jurisdiction::Alberta] {
            let table = jurisdiction.rate_adjustments();
            assert_eq!(table.green, KilowattHourRate(dec!(-0.03)));
            assert_eq!(table.yellow, KilowattHourRate::ZERO);
            assert_eq!(table.red, KilowattHourRate(dec!(0.03)));
        }
    }

    #[test]
    fn test_unset_falls_back_to_baseline() {
        for state in EnumSet::<DemandState>::all() {
            assert_eq!(
                rate_adjustment(state, None),
                rate_adjustment(state, Some(Jurisdiction::Bc)),
            );
        }
    }

    #[test]
    fn test_table_is_symmetric_around_yellow() {
        for jurisdiction in EnumSet::<Jurisdiction>::all() {
            let table = jurisdiction.rate_adjustments();
            assert!(table.green < table.yellow);
            assert!(table.yellow < table.red);
            assert_eq!(table.green, -table.red);
        }
    }

    #[test]
    fn test_serde_names() -> crate::prelude::Result {
        assert_eq!(serde_json::to_string(&Jurisdiction::Bc)?, r#""bc""#);
        assert_eq!(serde_json::from_str::<Jurisdiction>(r#""alberta""#)?, Jurisdiction::Alberta);
        Ok(())
    }

    #[test]
    fn test_notices() {
        assert_eq!(
            Jurisdiction::Bc.notice().map(|notice| notice.body),
            Some(
                "Wattply focuses on avoiding peak demand and helping you make better timing \
                 decisions."
            ),
        );
        assert!(Jurisdiction::Alberta.notice().is_some());
        assert!(Jurisdiction::Ontario.notice().is_none());
    }
}
