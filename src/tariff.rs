mod minute_table;
mod schedule;
mod time;
mod window;

pub use self::{
    minute_table::MinuteTable,
    schedule::TariffSchedule,
    time::{InvalidTimeError, MINUTES_PER_DAY, MinuteOfDay},
    window::{MalformedWindowError, RateWindow},
};
