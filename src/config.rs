//! Tariff definitions file (TOML).

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    prelude::*,
    quantity::{cost::Pence, rate::PencePerKilowattHour},
    tariff::{MinuteOfDay, RateWindow, TariffSchedule},
};

#[derive(Deserialize)]
struct TariffsFile {
    #[serde(default)]
    tariffs: Vec<TariffEntry>,
}

#[derive(Deserialize)]
struct TariffEntry {
    name: String,

    base_rate: PencePerKilowattHour,

    #[serde(default)]
    standing_charge: Pence,

    #[serde(default)]
    windows: Vec<WindowEntry>,
}

#[serde_as]
#[derive(Deserialize)]
struct WindowEntry {
    name: String,

    unit_rate: PencePerKilowattHour,

    #[serde_as(as = "DisplayFromStr")]
    start: MinuteOfDay,

    #[serde_as(as = "DisplayFromStr")]
    end: MinuteOfDay,
}

impl TariffEntry {
    fn build(self) -> Result<TariffSchedule> {
        let windows = self
            .windows
            .into_iter()
            .map(|window| {
                RateWindow::new(window.name.clone(), window.unit_rate, window.start, window.end)
                    .with_context(|| format!("invalid window `{}`", window.name))
            })
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("invalid tariff `{}`", self.name))?;
        Ok(TariffSchedule::new(self.name, self.base_rate, self.standing_charge, windows))
    }
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path) -> Result<Vec<TariffSchedule>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    parse(&text).with_context(|| format!("failed to load `{}`", path.display()))
}

fn parse(text: &str) -> Result<Vec<TariffSchedule>> {
    let file: TariffsFile = toml::from_str(text).context("failed to parse the TOML")?;
    file.tariffs.into_iter().map(TariffEntry::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO: &str = r#"
        [[tariffs]]
        name = "Go"
        base_rate = 30.5
        standing_charge = 47.0

        [[tariffs.windows]]
        name = "off-peak"
        unit_rate = 8.5
        start = "00:30"
        end = "05:30"
    "#;

    #[test]
    fn test_parse_ok() -> Result {
        let schedules = parse(GO)?;
        assert_eq!(schedules.len(), 1);
        let schedule = &schedules[0];
        assert_eq!(schedule.name(), "Go");
        assert_eq!(schedule.standing_charge(), Pence(47.0));
        assert_eq!(schedule.lookup_at(3, 0)?, PencePerKilowattHour(8.5));
        assert_eq!(schedule.lookup_at(12, 0)?, PencePerKilowattHour(30.5));
        Ok(())
    }

    #[test]
    fn test_parse_defaults() -> Result {
        let schedules = parse("[[tariffs]]\nname = \"Flat\"\nbase_rate = 25.0\n")?;
        assert_eq!(schedules[0].standing_charge(), Pence::ZERO);
        assert_eq!(schedules[0].windows().len(), 0);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_out_of_range_time() {
        let text = GO.replace("\"05:30\"", "\"24:30\"");
        assert!(parse(&text).is_err());
    }

    #[test]
    fn test_parse_rejects_empty_window_name() {
        let text = GO.replace("\"off-peak\"", "\"\"");
        assert!(parse(&text).is_err());
    }
}
