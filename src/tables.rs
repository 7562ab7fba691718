use chrono::{DateTime, TimeZone};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::Itertools;

use crate::{
    core::{
        dashboard::Dashboard,
        demand_state::DemandState,
        interval::Interval,
        jurisdiction::{Jurisdiction, rate_adjustment},
        recommendation::Tip,
    },
    profile::UserProfile,
    quantity::rate::KilowattHourRate,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn rate_cell(rate: KilowattHourRate) -> Cell {
    let color = if rate < KilowattHourRate::ZERO {
        Color::Green
    } else if rate > KilowattHourRate::ZERO {
        Color::Red
    } else {
        Color::Reset
    };
    Cell::new(rate).set_alignment(CellAlignment::Right).fg(color)
}

fn format_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%H:%M").to_string()
}

pub fn build_dashboard_table<Tz: TimeZone>(dashboard: &Dashboard<Tz>) -> Table
where
    Tz::Offset: std::fmt::Display,
{
    let state = dashboard.status.state;
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(dashboard.now.format("%a %b %d, %H:%M")).add_attribute(Attribute::Dim),
        Cell::new(dashboard.jurisdiction).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::new(state).fg(state.color()).add_attribute(Attribute::Bold),
        Cell::new(dashboard.status.title).fg(state.color()).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new(""), Cell::new(dashboard.status.detail)]);
    table.add_row(vec![
        Cell::new("Changes at"),
        Cell::new(format_time(&dashboard.next_change)),
    ]);
    table.add_row(vec![Cell::new("Right now"), Cell::new(&dashboard.recommendation)]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new(dashboard.estimated_savings).add_attribute(Attribute::Dim),
    ]);
    if let Some(quiet_hours) = dashboard.active_quiet_hours {
        table.add_row(vec![
            Cell::new("Quiet hours").fg(Color::Magenta),
            Cell::new(format!("Until {}, hold off on noisy appliances.", quiet_hours.end)),
        ]);
    }
    table.add_row(vec![Cell::new("Current rate"), rate_cell(dashboard.current_rate)]);
    table.add_row(vec![
        Cell::new(format!("Next rate at {}", format_time(&dashboard.next_change))),
        rate_cell(dashboard.next_rate),
    ]);
    let green_window = &dashboard.green_window;
    table.add_row(vec![
        Cell::new(if green_window.contains(&dashboard.now) {
            "Green window (now)"
        } else {
            "Next green window"
        })
        .fg(Color::Green),
        Cell::new(format!(
            "{} – {} ({} h)",
            format_time(&green_window.start),
            format_time(&green_window.end),
            green_window.duration().num_hours(),
        )),
    ]);
    table
}

#[must_use]
pub fn build_rates_table() -> Table {
    let mut table = new_table();
    let mut header = vec![Cell::new("Province")];
    header.extend(
        EnumSet::<DemandState>::all().iter().map(|state| Cell::new(state).fg(state.color())),
    );
    header.push(Cell::new("Notes"));
    table.set_header(header);
    for jurisdiction in EnumSet::<Jurisdiction>::all() {
        let mut row = vec![Cell::new(jurisdiction)];
        row.extend(
            EnumSet::<DemandState>::all()
                .iter()
                .map(|state| rate_cell(rate_adjustment(state, Some(jurisdiction)))),
        );
        row.push(Cell::new(jurisdiction.description()).add_attribute(Attribute::Dim));
        table.add_row(row);
    }
    table
}

pub fn build_schedule_table<Tz: TimeZone>(
    windows: &[(Interval<Tz>, DemandState)],
    jurisdiction: Jurisdiction,
) -> Table
where
    Tz::Offset: std::fmt::Display,
{
    let mut table = new_table();
    table.set_header(vec!["Start", "End", "State", "Demand", "Rate"]);
    for (interval, state) in windows {
        table.add_row(vec![
            Cell::new(format_time(&interval.start)),
            Cell::new(format_time(&interval.end)).add_attribute(Attribute::Dim),
            Cell::new(state).fg(state.color()),
            Cell::new(state.status().title),
            rate_cell(rate_adjustment(*state, Some(jurisdiction))),
        ]);
    }
    table
}

fn bullets(items: &[&str]) -> String {
    items.iter().map(|item| format!("• {item}")).join("\n")
}

#[must_use]
pub fn build_tips_table(tips: impl IntoIterator<Item = Tip>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Do", "Avoid", "Example"]);
    for tip in tips {
        let color = tip.state.color();
        table.add_row(vec![
            Cell::new(format!("{}\n{}\n\n{}", tip.title, tip.subtitle, tip.badge))
                .fg(color)
                .add_attribute(Attribute::Bold),
            Cell::new(bullets(tip.dos)),
            Cell::new(bullets(tip.avoid)),
            Cell::new(tip.example).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

#[must_use]
pub fn build_profile_table(profile: &UserProfile) -> Table {
    let mut table = new_table();
    table.add_row(vec![Cell::new("Province"), Cell::new(profile.jurisdiction)]);
    table.add_row(vec![Cell::new("Home"), Cell::new(profile.home_type)]);
    table.add_row(vec![
        Cell::new("EV charging"),
        Cell::new(if profile.has_ev_charging { "Yes" } else { "No" }),
    ]);
    table.add_row(vec![
        Cell::new("Appliances"),
        Cell::new(if profile.appliances.is_empty() {
            "None".to_owned()
        } else {
            profile.appliances.iter().join(", ")
        }),
    ]);
    table.add_row(vec![
        Cell::new("Quiet hours"),
        Cell::new(match profile.active_quiet_hours() {
            Some(quiet_hours) => format!("{} – {}", quiet_hours.start, quiet_hours.end),
            None => "Off".to_owned(),
        }),
    ]);
    table
}
