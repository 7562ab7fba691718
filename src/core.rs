pub mod appliance;
pub mod dashboard;
pub mod demand_state;
pub mod interval;
pub mod jurisdiction;
pub mod quiet_hours;
pub mod recommendation;
pub mod schedule;
pub mod time_of_day;
