mod api;
mod cli;
mod config;
mod prelude;
mod quantity;
mod render;
mod tariff;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    api::Octopus,
    cli::{ApiCommand, Args, Command},
    prelude::*,
    quantity::energy::KilowattHours,
    tariff::TariffSchedule,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();

    match Args::parse().command {
        Command::Lookup(args) => {
            let schedules = config::load(&args.tariffs.tariffs_file)?;
            for schedule in &select(schedules, args.tariffs.tariff.as_deref())? {
                let rate = schedule.lookup(args.time);
                info!(tariff = schedule.name(), time = %args.time, %rate, "Resolved");
                println!("{}: {rate}", schedule.name());
            }
            Ok(())
        }

        Command::Show(args) => {
            let schedules = config::load(&args.tariffs.tariffs_file)?;
            for schedule in &select(schedules, args.tariffs.tariff.as_deref())? {
                println!("{schedule}");
                if !schedule.windows().is_empty() {
                    println!("{}", render::build_windows_table(schedule));
                }
                println!("{}", render::build_segments_table(schedule));
            }
            Ok(())
        }

        Command::Api(ApiCommand::MeterPoint(args)) => {
            let api = Octopus::try_new(&args.api.api_key, args.api.base_url)?;
            let meter_point = api.get_electricity_meter_point(&args.mpan)?;
            println!("{}", render::build_meter_point_table(&meter_point));
            Ok(())
        }

        Command::Api(ApiCommand::Consumption(args)) => {
            let api = Octopus::try_new(&args.api.api_key, args.api.base_url.clone())?;
            let records = api.get_electricity_consumption(&args.mpan, &args.serial, &args.query())?;
            let total: KilowattHours = records.iter().map(|record| record.consumption).sum();
            info!(n_records = records.len(), %total, "Fetched");
            println!("{}", render::build_consumption_table(&records));
            Ok(())
        }
    }
}

fn select(schedules: Vec<TariffSchedule>, name: Option<&str>) -> Result<Vec<TariffSchedule>> {
    match name {
        None => {
            ensure!(!schedules.is_empty(), "no tariffs are configured");
            Ok(schedules)
        }
        Some(name) => {
            let selected: Vec<_> =
                schedules.into_iter().filter(|schedule| schedule.name() == name).collect();
            ensure!(!selected.is_empty(), "no tariff named `{name}` is configured");
            Ok(selected)
        }
    }
}
