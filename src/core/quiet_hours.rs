use serde::{Deserialize, Serialize};

use crate::core::time_of_day::TimeOfDay;

/// Daily interval in which noisy appliances should not be suggested.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct QuietHours {
    /// Inclusive.
    pub start: TimeOfDay,

    /// Exclusive, may be earlier than the start when the interval wraps midnight.
    pub end: TimeOfDay,
}

impl Default for QuietHours {
    fn default() -> Self {
        Self { start: TimeOfDay::from_hours(22), end: TimeOfDay::from_hours(7) }
    }
}

impl QuietHours {
    #[must_use]
    pub fn contains(self, time: TimeOfDay) -> bool {
        if self.start <= self.end {
            (self.start <= time) && (time < self.end)
        } else {
            (time >= self.start) || (time < self.end)
        }
    }
}
