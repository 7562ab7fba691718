use itertools::Itertools;

use crate::core::{appliance::Appliance, demand_state::DemandState};

/// Join the appliance phrases into a list that reads naturally, with the Oxford comma.
#[must_use]
pub fn join_phrases(appliances: &[Appliance]) -> String {
    match appliances {
        [] => String::new(),
        [single] => single.phrase().to_owned(),
        [first, second] => format!("{} and {}", first.phrase(), second.phrase()),
        [init @ .., last] => {
            let init = init.iter().map(|appliance| appliance.phrase()).join(", ");
            format!("{init}, and {}", last.phrase())
        }
    }
}

/// Plain-language advice for the state, naming the selected appliances if there are any.
#[must_use]
pub fn recommend(state: DemandState, appliances: &[Appliance]) -> String {
    let list = join_phrases(appliances);
    match (state, list.is_empty()) {
        (DemandState::Green, true) => "Good time to run energy-heavy appliances.".to_owned(),
        (DemandState::Green, false) => format!("Good time to run {list}."),
        (DemandState::Red, true) => {
            "High demand right now. Avoid heavy appliances if you can.".to_owned()
        }
        (DemandState::Red, false) => format!("High demand right now. Avoid {list} if you can."),
        (DemandState::Yellow, true) => {
            "Normal demand. Run essentials; save heavy loads for green hours.".to_owned()
        }
        (DemandState::Yellow, false) => {
            format!("Normal demand. Run essentials; save {list} for green hours.")
        }
    }
}

/// Qualitative savings hint. There is no live pricing behind it, so it never quotes a number.
#[must_use]
pub const fn estimate_savings(state: DemandState) -> &'static str {
    match state {
        DemandState::Green => "Estimated savings: Higher if you run appliances now.",
        DemandState::Yellow => "Estimated savings: Moderate depending on your usage.",
        DemandState::Red => "Estimated savings: Low right now. Wait if you can.",
    }
}

pub const TIPS_SUMMARY: &str = "Simple rules you can follow without overthinking.";

/// Rules of thumb for a demand state.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Tip {
    pub state: DemandState,
    pub title: &'static str,
    pub subtitle: &'static str,

    /// Short label for the kind of hours.
    pub badge: &'static str,

    pub dos: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub example: &'static str,
}

pub const fn tips(state: DemandState) -> Tip {
    match state {
        DemandState::Green => Tip {
            state,
            title: "Green hours",
            subtitle: "Best time to run heavy appliances.",
            badge: "Best time",
            dos: &["Laundry / dryer", "Dishwasher", "EV charging (if you have it)"],
            avoid: &[
                "Nothing special—this is the best window",
                "Just don’t stack everything at once if it’s inconvenient",
            ],
            example: "If you see a green window coming up, queue your dishwasher or laundry to \
                      start then. Even a 30–60 minute shift can help.",
        },
        DemandState::Yellow => Tip {
            state,
            title: "Yellow hours",
            subtitle: "Normal demand—fine for essentials.",
            badge: "Normal",
            dos: &["Cooking, lights, normal use", "Small loads if needed"],
            avoid: &[
                "Back-to-back heavy cycles (dryer + dishwasher + EV)",
                "Preheating large appliances unnecessarily",
            ],
            example: "Use yellow for normal life. If a green window is soon, hold off on heavy \
                      loads and run them then.",
        },
        DemandState::Red => Tip {
            state,
            title: "Red hours",
            subtitle: "High demand—pause heavy loads if possible.",
            badge: "Avoid heavy loads",
            dos: &["Only essentials", "Wait for the next change if you can"],
            avoid: &["Laundry / dryer", "Dishwasher", "EV charging"],
            example: "If it’s red, treat it like a ‘delay heavy loads’ signal. The easiest win is \
                      simply waiting until the next green/yellow window.",
        },
    }
}
