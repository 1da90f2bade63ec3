//! [Octopus Energy API](https://developer.octopus.energy/rest/) client.

use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_with::skip_serializing_none;
use thiserror::Error;
use ureq::Agent;

use crate::{prelude::*, quantity::energy::KilowattHours};

pub const DEFAULT_BASE_URL: &str = "https://api.octopus.energy/";

pub struct Api {
    client: Agent,
    base_url: String,
    authorization: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("the API key must start with `sk_`")]
    Authentication,

    #[error("the API responded with HTTP {status}")]
    Http { status: u16 },

    #[error("failed to reach the API")]
    Transport(#[source] ureq::Error),

    #[error("pagination cursor `{0}` is not under the API base URL")]
    Cursor(String),

    #[error("failed to serialize the query parameters")]
    Query(#[source] serde_qs::Error),
}

impl From<ureq::Error> for ApiError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::StatusCode(status) => Self::Http { status },
            error => Self::Transport(error),
        }
    }
}

impl Api {
    /// Open an authenticated session.
    ///
    /// The key is validated here, at construction — not on the first
    /// request. Requests authenticate with HTTP Basic auth, the key as the
    /// username and an empty password.
    pub fn try_new(api_key: &str, base_url: impl Into<String>) -> Result<Self, ApiError> {
        if !api_key.starts_with("sk_") {
            return Err(ApiError::Authentication);
        }
        let client =
            Agent::config_builder().timeout_global(Some(Duration::from_secs(10))).build().into();
        Ok(Self {
            client,
            base_url: base_url.into(),
            authorization: format!("Basic {}", STANDARD.encode(format!("{api_key}:"))),
        })
    }

    #[instrument(skip_all, fields(mpan = mpan))]
    pub fn get_electricity_meter_point(
        &self,
        mpan: &str,
    ) -> Result<ElectricityMeterPoint, ApiError> {
        info!("Fetching the meter point…");
        self.get(&format!("v1/electricity-meter-points/{mpan}"))
    }

    #[instrument(skip_all, fields(mpan = mpan, serial = serial))]
    pub fn get_electricity_consumption(
        &self,
        mpan: &str,
        serial: &str,
        query: &ConsumptionQuery,
    ) -> Result<Vec<Consumption>, ApiError> {
        info!("Fetching the consumption…");
        let query = serde_qs::to_string(query).map_err(ApiError::Query)?;
        self.get_all(&format!(
            "v1/electricity-meter-points/{mpan}/meters/{serial}/consumption?{query}"
        ))
    }

    fn get<R: DeserializeOwned>(&self, path_and_query: &str) -> Result<R, ApiError> {
        let mut response = self
            .client
            .get(format!("{}{path_and_query}", self.base_url))
            .header("Authorization", self.authorization.as_str())
            .call()?;
        response.body_mut().read_json().map_err(ApiError::from)
    }

    fn get_all<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<Vec<T>, ApiError> {
        paginate(&self.base_url, path_and_query, |path| self.get(path))
    }
}

#[derive(Deserialize)]
struct Page<T> {
    results: Vec<T>,

    /// Full URL of the next page, absent on the last one.
    next: Option<String>,
}

/// Walk the pages by following the `next` cursor until it is absent,
/// concatenating `results` in server order.
///
/// The cursor is a full URL; its path replaces the request path, so it must
/// sit under the configured base URL. A failed fetch aborts the walk and
/// discards the records gathered so far.
fn paginate<T, F>(base_url: &str, path_and_query: &str, mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(&str) -> Result<Page<T>, ApiError>,
{
    let mut records = Vec::new();
    let mut path = path_and_query.to_owned();
    loop {
        let page = fetch(&path)?;
        records.extend(page.results);
        match page.next {
            Some(next) => match next.strip_prefix(base_url) {
                Some(stripped) => path = stripped.to_owned(),
                None => return Err(ApiError::Cursor(next)),
            },
            None => return Ok(records),
        }
    }
}

/// Electricity meter point registration details.
#[derive(Debug, Deserialize)]
pub struct ElectricityMeterPoint {
    /// Grid supply point group identifier.
    pub gsp: String,

    pub mpan: String,

    pub profile_class: u32,
}

/// A consumption reading for one interval (half-hourly unless grouped).
#[derive(Debug, Deserialize)]
pub struct Consumption {
    pub consumption: KilowattHours,

    pub interval_start: DateTime<Utc>,

    pub interval_end: DateTime<Utc>,
}

#[skip_serializing_none]
#[derive(Serialize)]
pub struct ConsumptionQuery {
    pub group_by: Option<GroupBy>,

    pub order_by: Option<OrderBy>,

    pub page_size: u32,

    pub period_from: Option<NaiveDate>,

    pub period_to: Option<NaiveDate>,
}

impl Default for ConsumptionQuery {
    fn default() -> Self {
        Self { group_by: None, order_by: None, page_size: 1000, period_from: None, period_to: None }
    }
}

#[derive(Copy, Clone, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Hour,
    Day,
    Week,
    Month,
    Quarter,
}

#[derive(Copy, Clone, Serialize, clap::ValueEnum)]
pub enum OrderBy {
    #[serde(rename = "period")]
    Period,

    #[serde(rename = "-period")]
    PeriodDescending,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(results: &[u32], next: Option<&str>) -> Page<u32> {
        Page { results: results.to_vec(), next: next.map(str::to_owned) }
    }

    #[test]
    fn test_paginate_follows_cursor() -> crate::prelude::Result {
        let mut n_requests = 0;
        let records = paginate(DEFAULT_BASE_URL, "v1/things?page_size=2", |path| {
            n_requests += 1;
            Ok(match path {
                "v1/things?page_size=2" => {
                    page(&[1, 2], Some("https://api.octopus.energy/v1/things?page=2"))
                }
                "v1/things?page=2" => {
                    page(&[3, 4], Some("https://api.octopus.energy/v1/things?page=3"))
                }
                "v1/things?page=3" => page(&[5, 6], None),
                _ => panic!("unexpected path `{path}`"),
            })
        })?;
        assert_eq!(records, [1, 2, 3, 4, 5, 6]);
        assert_eq!(n_requests, 3);
        Ok(())
    }

    #[test]
    fn test_paginate_single_page() -> crate::prelude::Result {
        let records = paginate(DEFAULT_BASE_URL, "v1/things", |_| Ok(page(&[1, 2], None)))?;
        assert_eq!(records, [1, 2]);
        Ok(())
    }

    #[test]
    fn test_paginate_stops_on_first_failure() {
        let mut n_requests = 0;
        let result = paginate(DEFAULT_BASE_URL, "v1/things", |path| {
            n_requests += 1;
            if path == "v1/things" {
                Ok(page(&[1, 2], Some("https://api.octopus.energy/v1/things?page=2")))
            } else {
                Err(ApiError::Http { status: 503 })
            }
        });
        assert!(matches!(result, Err(ApiError::Http { status: 503 })));
        assert_eq!(n_requests, 2);
    }

    #[test]
    fn test_paginate_rejects_foreign_cursor() {
        let result = paginate(DEFAULT_BASE_URL, "v1/things", |_| {
            Ok(page(&[1], Some("https://elsewhere.example.com/v1/things?page=2")))
        });
        assert!(matches!(result, Err(ApiError::Cursor(_))));
    }

    #[test]
    fn test_try_new_rejects_malformed_key() {
        assert!(matches!(
            Api::try_new("not-a-key", DEFAULT_BASE_URL),
            Err(ApiError::Authentication)
        ));
        assert!(Api::try_new("sk_live_123", DEFAULT_BASE_URL).is_ok());
    }

    #[test]
    fn test_status_code_maps_to_http_error() {
        let error = ApiError::from(ureq::Error::StatusCode(404));
        assert!(matches!(error, ApiError::Http { status: 404 }));
    }

    #[test]
    fn test_consumption_query_string() -> crate::prelude::Result {
        let query = ConsumptionQuery {
            group_by: Some(GroupBy::Day),
            order_by: Some(OrderBy::PeriodDescending),
            period_from: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            ..ConsumptionQuery::default()
        };
        assert_eq!(
            serde_qs::to_string(&query)?,
            "group_by=day&order_by=-period&page_size=1000&period_from=2024-01-01"
        );
        Ok(())
    }

    #[test]
    fn test_consumption_query_skips_none() -> crate::prelude::Result {
        assert_eq!(serde_qs::to_string(&ConsumptionQuery::default())?, "page_size=1000");
        Ok(())
    }

    #[test]
    fn test_deserialize_consumption_page() -> crate::prelude::Result {
        let text = r#"{
            "count": 2,
            "next": "https://api.octopus.energy/v1/electricity-meter-points/1/meters/2/consumption?page=2",
            "previous": null,
            "results": [
                {
                    "consumption": 0.063,
                    "interval_start": "2018-05-19T00:30:00+01:00",
                    "interval_end": "2018-05-19T01:00:00+01:00"
                },
                {
                    "consumption": 0.071,
                    "interval_start": "2018-05-19T01:00:00+01:00",
                    "interval_end": "2018-05-19T01:30:00+01:00"
                }
            ]
        }"#;
        let page: Page<Consumption> = serde_json::from_str(text)?;
        assert!(page.next.is_some());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].consumption, KilowattHours(0.063));
        assert_eq!(page.results[0].interval_end, page.results[1].interval_start);
        Ok(())
    }
}
