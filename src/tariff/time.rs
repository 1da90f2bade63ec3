use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

pub const MINUTES_PER_DAY: usize = 24 * 60;

/// A wall-clock time of day, normalized to whole minutes since midnight.
///
/// Always in `0..1440`. Parses from `HH:MM`; a trailing `:SS` component is
/// accepted and truncated.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct MinuteOfDay(u16);

#[derive(Debug, Eq, Error, PartialEq)]
pub enum InvalidTimeError {
    #[error("hour `{0}` is out of range")]
    Hour(u32),

    #[error("minute `{0}` is out of range")]
    Minute(u32),

    #[error("minute-of-day `{0}` does not fall within the day")]
    MinuteOfDay(u32),

    #[error("`{0}` is not a valid `HH:MM` time")]
    Format(String),
}

impl MinuteOfDay {
    pub const MIDNIGHT: Self = Self(0);

    pub const fn try_new(hour: u32, minute: u32) -> Result<Self, InvalidTimeError> {
        if hour >= 24 {
            return Err(InvalidTimeError::Hour(hour));
        }
        if minute >= 60 {
            return Err(InvalidTimeError::Minute(minute));
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    pub const fn from_minutes(minutes: u32) -> Result<Self, InvalidTimeError> {
        if minutes >= MINUTES_PER_DAY as u32 {
            return Err(InvalidTimeError::MinuteOfDay(minutes));
        }
        Ok(Self(minutes as u16))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for MinuteOfDay {
    type Err = InvalidTimeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut components = input.splitn(3, ':');
        // Seconds, if present, are ignored.
        let (Some(hour), Some(minute)) = (components.next(), components.next()) else {
            return Err(InvalidTimeError::Format(input.to_owned()));
        };
        let hour = hour.parse().map_err(|_| InvalidTimeError::Format(input.to_owned()))?;
        let minute = minute.parse().map_err(|_| InvalidTimeError::Format(input.to_owned()))?;
        Self::try_new(hour, minute)
    }
}

impl Display for MinuteOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Debug for MinuteOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok() -> crate::prelude::Result {
        assert_eq!("08:00".parse::<MinuteOfDay>()?.index(), 480);
        assert_eq!("00:00".parse::<MinuteOfDay>()?, MinuteOfDay::MIDNIGHT);
        assert_eq!("23:59".parse::<MinuteOfDay>()?.index(), 1439);
        Ok(())
    }

    #[test]
    fn test_parse_truncates_seconds() -> crate::prelude::Result {
        assert_eq!("06:30:45".parse::<MinuteOfDay>()?, MinuteOfDay::try_new(6, 30)?);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            "".parse::<MinuteOfDay>(),
            Err(InvalidTimeError::Format(String::new()))
        );
        assert_eq!("12".parse::<MinuteOfDay>(), Err(InvalidTimeError::Format("12".to_owned())));
        assert_eq!(
            "aa:bb".parse::<MinuteOfDay>(),
            Err(InvalidTimeError::Format("aa:bb".to_owned()))
        );
        assert_eq!("24:00".parse::<MinuteOfDay>(), Err(InvalidTimeError::Hour(24)));
        assert_eq!("12:60".parse::<MinuteOfDay>(), Err(InvalidTimeError::Minute(60)));
    }

    #[test]
    fn test_from_minutes() {
        assert_eq!(MinuteOfDay::from_minutes(0), Ok(MinuteOfDay::MIDNIGHT));
        assert_eq!(MinuteOfDay::from_minutes(1439).map(MinuteOfDay::index), Ok(1439));
        assert_eq!(MinuteOfDay::from_minutes(1440), Err(InvalidTimeError::MinuteOfDay(1440)));
    }

    #[test]
    fn test_display() -> crate::prelude::Result {
        assert_eq!(MinuteOfDay::try_new(6, 5)?.to_string(), "06:05");
        Ok(())
    }
}
