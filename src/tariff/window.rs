use thiserror::Error;

use crate::{
    quantity::rate::PencePerKilowattHour,
    tariff::time::{InvalidTimeError, MinuteOfDay},
};

/// A named time-of-day interval `[start, end)` with its own unit rate.
///
/// When `start > end` the window wraps past midnight and covers
/// `[start, 24:00) ∪ [00:00, end)`. When `start == end` the window denotes
/// that single minute — so `00:00`–`00:00` is one minute at midnight, not a
/// whole day.
#[derive(Clone, Debug)]
pub struct RateWindow {
    name: String,
    unit_rate: PencePerKilowattHour,
    start: MinuteOfDay,
    end: MinuteOfDay,
}

#[derive(Debug, Error, PartialEq)]
pub enum MalformedWindowError {
    #[error("rate window name must not be empty")]
    EmptyName,

    #[error("unit rate must not be negative, got {0}")]
    NegativeRate(PencePerKilowattHour),

    #[error(transparent)]
    OutOfRange(#[from] InvalidTimeError),
}

impl RateWindow {
    pub fn new(
        name: impl Into<String>,
        unit_rate: PencePerKilowattHour,
        start: MinuteOfDay,
        end: MinuteOfDay,
    ) -> Result<Self, MalformedWindowError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MalformedWindowError::EmptyName);
        }
        if unit_rate < PencePerKilowattHour::ZERO {
            return Err(MalformedWindowError::NegativeRate(unit_rate));
        }
        Ok(Self { name, unit_rate, start, end })
    }

    /// Build a window from raw minute-of-day bounds, rejecting anything
    /// outside `0..1440`.
    pub fn from_minutes(
        name: impl Into<String>,
        unit_rate: PencePerKilowattHour,
        start: u32,
        end: u32,
    ) -> Result<Self, MalformedWindowError> {
        Self::new(name, unit_rate, MinuteOfDay::from_minutes(start)?, MinuteOfDay::from_minutes(end)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn unit_rate(&self) -> PencePerKilowattHour {
        self.unit_rate
    }

    pub const fn start(&self) -> MinuteOfDay {
        self.start
    }

    pub const fn end(&self) -> MinuteOfDay {
        self.end
    }
}
