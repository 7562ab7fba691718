use comfy_table::Color;

/// Qualitative grid-demand level.
#[derive(Debug, Hash, clap::ValueEnum, derive_more::Display, enumset::EnumSetType)]
pub enum DemandState {
    /// Low demand, good time for heavy loads.
    Green,

    /// Normal demand.
    Yellow,

    /// High demand, avoid heavy loads.
    Red,
}

impl DemandState {
    pub const fn color(self) -> Color {
        match self {
            Self::Green => Color::Green,
            Self::Yellow => Color::DarkYellow,
            Self::Red => Color::Red,
        }
    }

    pub const fn status(self) -> Status {
        describe(self)
    }
}

/// Presentation text bound to a demand state.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Status {
    pub state: DemandState,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const fn describe(state: DemandState) -> Status {
    match state {
        DemandState::Green => Status {
            state,
            title: "Lower-demand hours",
            detail: "Good time to run appliances.",
        },
        DemandState::Yellow => Status {
            state,
            title: "Normal demand",
            detail: "Run essentials, save heavy loads for green hours.",
        },
        DemandState::Red => Status {
            state,
            title: "High-demand hours",
            detail: "Avoid heavy appliances if you can.",
        },
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;

    #[test]
    fn test_describe() {
        let status = describe(DemandState::Green);
        assert_eq!(status.state, DemandState::Green);
        assert_eq!(status.title, "Lower-demand hours");
        assert_eq!(status.detail, "Good time to run appliances.");

        assert_eq!(describe(DemandState::Yellow).title, "Normal demand");
        assert_eq!(
            describe(DemandState::Yellow).detail,
            "Run essentials, save heavy loads for green hours.",
        );
        assert_eq!(describe(DemandState::Red).title, "High-demand hours");
        assert_eq!(describe(DemandState::Red).detail, "Avoid heavy appliances if you can.");
    }

    #[test]
    fn test_display() {
        assert_eq!(DemandState::Green.to_string(), "Green");
        assert_eq!(DemandState::Yellow.to_string(), "Yellow");
        assert_eq!(DemandState::Red.to_string(), "Red");
    }

    #[test]
    fn test_status_matches_state() {
        for state in EnumSet::<DemandState>::all() {
            assert_eq!(state.status().state, state);
        }
    }
}
