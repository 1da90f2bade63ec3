use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{
    api::{ConsumptionQuery, DEFAULT_BASE_URL, GroupBy, OrderBy},
    tariff::MinuteOfDay,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve the effective unit rate at a time of day.
    Lookup(LookupArgs),

    /// Describe the configured tariffs.
    Show(ShowArgs),

    /// Query the Octopus Energy API.
    #[clap(subcommand)]
    Api(ApiCommand),
}

#[derive(Parser)]
pub struct TariffsArgs {
    /// Tariff definitions file.
    #[clap(long = "tariffs-file", env = "TARIFFS_FILE", default_value = "tariffs.toml")]
    pub tariffs_file: PathBuf,

    /// Only consider the named tariff.
    #[clap(long = "tariff")]
    pub tariff: Option<String>,
}

#[derive(Parser)]
pub struct LookupArgs {
    #[clap(flatten)]
    pub tariffs: TariffsArgs,

    /// Time of day as `HH:MM` (seconds, if given, are ignored).
    pub time: MinuteOfDay,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[clap(flatten)]
    pub tariffs: TariffsArgs,
}

#[derive(Subcommand)]
pub enum ApiCommand {
    /// Fetch the registration details of an electricity meter point.
    MeterPoint(MeterPointArgs),

    /// Fetch consumption readings for an electricity meter.
    Consumption(ConsumptionArgs),
}

#[derive(Parser)]
pub struct ApiArgs {
    /// Octopus Energy API key, must start with `sk_`.
    #[clap(long = "api-key", env = "OCTOPUS_API_KEY")]
    pub api_key: String,

    /// API base URL.
    #[clap(long = "base-url", env = "OCTOPUS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[derive(Parser)]
pub struct MeterPointArgs {
    #[clap(flatten)]
    pub api: ApiArgs,

    /// Meter point administration number.
    pub mpan: String,
}

#[derive(Parser)]
pub struct ConsumptionArgs {
    #[clap(flatten)]
    pub api: ApiArgs,

    /// Meter point administration number.
    pub mpan: String,

    /// Meter serial number.
    pub serial: String,

    #[clap(long)]
    pub group_by: Option<GroupBy>,

    #[clap(long)]
    pub order_by: Option<OrderBy>,

    #[clap(long, default_value = "1000")]
    pub page_size: u32,

    /// Start of the reporting period (inclusive), `YYYY-MM-DD`.
    #[clap(long)]
    pub period_from: Option<NaiveDate>,

    /// End of the reporting period (exclusive), `YYYY-MM-DD`.
    #[clap(long)]
    pub period_to: Option<NaiveDate>,
}

impl ConsumptionArgs {
    #[must_use]
    pub const fn query(&self) -> ConsumptionQuery {
        ConsumptionQuery {
            group_by: self.group_by,
            order_by: self.order_by,
            page_size: self.page_size,
            period_from: self.period_from,
            period_to: self.period_to,
        }
    }
}
