use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    quantity::rate::PencePerKilowattHour,
    tariff::{
        time::{MINUTES_PER_DAY, MinuteOfDay},
        window::RateWindow,
    },
};

/// Dense lookup from every minute of the day to the effective unit rate.
///
/// Compiled once from a base rate and an ordered window list; every minute
/// resolves to exactly one rate, so queries never fail.
pub struct MinuteTable([PencePerKilowattHour; MINUTES_PER_DAY]);

impl MinuteTable {
    /// Fill the whole day with `base_rate`, then apply the windows in order.
    ///
    /// Later windows unconditionally overwrite earlier ones where they
    /// overlap — callers order the list to express precedence. An overnight
    /// window is applied as two separate fill passes, `[start, 24:00)` and
    /// `[00:00, end)`.
    pub fn compile(base_rate: PencePerKilowattHour, windows: &[RateWindow]) -> Self {
        let mut slots = [base_rate; MINUTES_PER_DAY];
        for window in windows {
            let start = window.start().index();
            let end = window.end().index();
            match start.cmp(&end) {
                Ordering::Equal => slots[start] = window.unit_rate(),
                Ordering::Less => slots[start..end].fill(window.unit_rate()),
                Ordering::Greater => {
                    slots[start..].fill(window.unit_rate());
                    slots[..end].fill(window.unit_rate());
                }
            }
        }
        Self(slots)
    }

    pub const fn get(&self, time: MinuteOfDay) -> PencePerKilowattHour {
        self.0[time.index()]
    }

    /// Contiguous constant-rate runs as `(start, end, rate)` with an
    /// exclusive `end` in minutes (`1440` closes the day).
    pub fn segments(&self) -> Vec<(usize, usize, PencePerKilowattHour)> {
        let chunks = self.0.iter().enumerate().chunk_by(|item| *item.1);
        let mut segments = Vec::new();
        for (rate, mut chunk) in &chunks {
            let Some((start, _)) = chunk.next() else {
                continue;
            };
            let end = chunk.last().map_or(start, |(minute, _)| minute) + 1;
            segments.push((start, end, rate));
        }
        segments
    }
}
