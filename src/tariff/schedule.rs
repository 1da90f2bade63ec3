use std::fmt::{Display, Formatter};

use crate::{
    quantity::{cost::Pence, rate::PencePerKilowattHour},
    tariff::{
        minute_table::MinuteTable,
        time::{InvalidTimeError, MinuteOfDay},
        window::RateWindow,
    },
};

/// A tariff: a base unit rate plus an ordered list of rate windows.
///
/// The minute table is compiled once at construction; the schedule is
/// immutable afterwards, so concurrent read-only lookups are safe.
pub struct TariffSchedule {
    name: String,
    base_rate: PencePerKilowattHour,
    /// Flat daily charge, carried as metadata only — never used in lookup.
    standing_charge: Pence,
    windows: Vec<RateWindow>,
    table: MinuteTable,
}

impl TariffSchedule {
    pub fn new(
        name: impl Into<String>,
        base_rate: PencePerKilowattHour,
        standing_charge: Pence,
        windows: Vec<RateWindow>,
    ) -> Self {
        let table = MinuteTable::compile(base_rate, &windows);
        Self { name: name.into(), base_rate, standing_charge, windows, table }
    }

    /// Effective unit rate at the given time of day. Never fails: the
    /// compiled table is total.
    pub const fn lookup(&self, time: MinuteOfDay) -> PencePerKilowattHour {
        self.table.get(time)
    }

    /// Effective unit rate at `hour:minute`, rejecting out-of-range input.
    pub fn lookup_at(
        &self,
        hour: u32,
        minute: u32,
    ) -> Result<PencePerKilowattHour, InvalidTimeError> {
        match MinuteOfDay::try_new(hour, minute) {
            Ok(time) => Ok(self.lookup(time)),
            Err(error) => Err(error),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn base_rate(&self) -> PencePerKilowattHour {
        self.base_rate
    }

    pub const fn standing_charge(&self) -> Pence {
        self.standing_charge
    }

    pub fn windows(&self) -> &[RateWindow] {
        &self.windows
    }

    pub const fn table(&self) -> &MinuteTable {
        &self.table
    }
}

impl Display for TariffSchedule {
    /// Multi-line description of the schedule in declaration order.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tariff: {}", self.name)?;
        writeln!(f, "Base unit rate: {}", self.base_rate)?;
        for window in &self.windows {
            writeln!(
                f,
                "{} ({} - {}): {}",
                window.name(),
                window.start(),
                window.end(),
                window.unit_rate(),
            )?;
        }
        write!(f, "Standing charge: {}", self.standing_charge)
    }
}
