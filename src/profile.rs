mod store;

use bon::Builder;
use serde::{Deserialize, Serialize};

pub use self::store::ProfileStore;
use crate::core::{appliance::Appliances, jurisdiction::Jurisdiction, quiet_hours::QuietHours};

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    clap::ValueEnum,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HomeType {
    /// Shared walls, smaller footprint.
    #[default]
    Condo,

    /// Detached or semi-detached home.
    House,
}

/// Household profile, saved once after setup and replaced as a whole on every change.
///
/// Field names follow the stored record. Absent fields fall back to the conservative defaults.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "province", default)]
    #[builder(default)]
    pub jurisdiction: Jurisdiction,

    #[serde(default)]
    #[builder(default)]
    pub home_type: HomeType,

    #[serde(rename = "hasEVCharging", default)]
    #[builder(default)]
    pub has_ev_charging: bool,

    #[serde(default = "default_has_quiet_hours")]
    #[builder(default = default_has_quiet_hours())]
    pub has_quiet_hours: bool,

    #[serde(default)]
    #[builder(default)]
    pub appliances: Appliances,

    #[serde(default)]
    #[builder(default)]
    pub quiet_hours: QuietHours,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl UserProfile {
    /// Quiet hours, if the household keeps them.
    pub fn active_quiet_hours(&self) -> Option<QuietHours> {
        self.has_quiet_hours.then_some(self.quiet_hours)
    }
}

const fn default_has_quiet_hours() -> bool {
    true
}
