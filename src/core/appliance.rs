use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Appliance {
    Laundry,
    Dishwasher,
    ElectricStove,
    ElectricOven,
}

impl Appliance {
    /// Capitalized name for lists and tables.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Laundry => "Laundry",
            Self::Dishwasher => "Dishwasher",
            Self::ElectricStove => "Electric stove",
            Self::ElectricOven => "Electric oven",
        }
    }

    /// How the appliance reads in the middle of a sentence.
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Laundry => "laundry",
            Self::Dishwasher => "the dishwasher",
            Self::ElectricStove => "the electric stove",
            Self::ElectricOven => "the electric oven",
        }
    }
}

impl Display for Appliance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Selected appliances: no duplicates, first occurrence wins, insertion order kept.
#[must_use]
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, derive_more::Deref)]
#[serde(from = "Vec<Appliance>", into = "Vec<Appliance>")]
#[deref(forward)]
pub struct Appliances(Vec<Appliance>);

impl FromIterator<Appliance> for Appliances {
    fn from_iter<I: IntoIterator<Item = Appliance>>(iter: I) -> Self {
        Self(iter.into_iter().unique().collect())
    }
}

impl From<Vec<Appliance>> for Appliances {
    fn from(appliances: Vec<Appliance>) -> Self {
        appliances.into_iter().collect()
    }
}

impl From<Appliances> for Vec<Appliance> {
    fn from(appliances: Appliances) -> Self {
        appliances.0
    }
}

impl<'a> IntoIterator for &'a Appliances {
    type Item = &'a Appliance;
    type IntoIter = std::slice::Iter<'a, Appliance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_deduplicates_keeping_order() {
        let appliances: Appliances = [
            Appliance::Dishwasher,
            Appliance::Laundry,
            Appliance::Dishwasher,
            Appliance::ElectricOven,
            Appliance::Laundry,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            *appliances,
            [Appliance::Dishwasher, Appliance::Laundry, Appliance::ElectricOven]
        );
    }

    #[test]
    fn test_serde() -> Result {
        let appliances: Appliances =
            serde_json::from_str(r#"["electricStove","laundry","electricStove"]"#)?;
        assert_eq!(*appliances, [Appliance::ElectricStove, Appliance::Laundry]);
        assert_eq!(serde_json::to_string(&appliances)?, r#"["electricStove","laundry"]"#);
        Ok(())
    }

    #[test]
    fn test_phrases() {
        assert_eq!(Appliance::Laundry.phrase(), "laundry");
        assert_eq!(Appliance::Dishwasher.phrase(), "the dishwasher");
        assert_eq!(Appliance::ElectricStove.label(), "Electric stove");
    }
}
