use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    api::{Consumption, ElectricityMeterPoint},
    quantity::rate::PencePerKilowattHour,
    tariff::{MINUTES_PER_DAY, TariffSchedule},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn rate_color(rate: PencePerKilowattHour, base_rate: PencePerKilowattHour) -> Color {
    if rate.0 >= base_rate.0 { Color::Red } else { Color::Green }
}

fn format_minute(minute: usize) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

#[must_use]
pub fn build_windows_table(schedule: &TariffSchedule) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Window", "Start", "End", "Unit rate"]);
    for window in schedule.windows() {
        table.add_row(vec![
            Cell::new(window.name()),
            Cell::new(window.start()),
            Cell::new(window.end()),
            Cell::new(window.unit_rate())
                .set_alignment(CellAlignment::Right)
                .fg(rate_color(window.unit_rate(), schedule.base_rate())),
        ]);
    }
    table
}

/// The compiled day as contiguous constant-rate segments — a textual view
/// of the 1440-minute curve.
#[must_use]
pub fn build_segments_table(schedule: &TariffSchedule) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Start", "End", "Unit rate"]);
    for (start, end, rate) in schedule.table().segments() {
        table.add_row(vec![
            Cell::new(format_minute(start)),
            Cell::new(format_minute(end % MINUTES_PER_DAY)),
            Cell::new(rate)
                .set_alignment(CellAlignment::Right)
                .fg(rate_color(rate, schedule.base_rate())),
        ]);
    }
    table
}

#[must_use]
pub fn build_meter_point_table(meter_point: &ElectricityMeterPoint) -> Table {
    let mut table = new_table();
    table.add_row(vec![Cell::new("MPAN"), Cell::new(&meter_point.mpan)]);
    table.add_row(vec![Cell::new("Grid supply point"), Cell::new(&meter_point.gsp)]);
    table.add_row(vec![Cell::new("Profile class"), Cell::new(meter_point.profile_class)]);
    table
}

#[must_use]
pub fn build_consumption_table(records: &[Consumption]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Interval start", "Interval end", "Consumption"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.interval_start.format("%Y-%m-%d %H:%M")),
            Cell::new(record.interval_end.format("%Y-%m-%d %H:%M")),
            Cell::new(record.consumption).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
