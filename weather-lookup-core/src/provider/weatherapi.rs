use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    QueryError,
    model::{Condition, CurrentConditions, Location, WeatherResult},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com";

/// WeatherAPI.com `current.json` client.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherResult, QueryError> {
        let url = format!("{}/v1/current.json", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .map_err(|e| QueryError::new(format!("Failed to reach WeatherAPI.com: {e}")))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            QueryError::new(format!("Failed to read WeatherAPI.com response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<WaErrorResponse>(&body) {
                Ok(parsed) => QueryError::new(parsed.error.message),
                Err(_) => QueryError::new(format!(
                    "WeatherAPI.com request failed with status {}: {}",
                    status,
                    truncate_body(&body),
                )),
            });
        }

        let parsed: WaResponse = serde_json::from_str(&body).map_err(|e| {
            QueryError::new(format!("Failed to parse WeatherAPI.com response: {e}"))
        })?;

        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    region: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    temp_f: f64,
    condition: WaCondition,
    humidity: u8,
    pressure_mb: f64,
    vis_km: f64,
    last_updated_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WaErrorResponse {
    error: WaError,
}

impl From<WaResponse> for WeatherResult {
    fn from(res: WaResponse) -> Self {
        let WaResponse { location, current } = res;

        WeatherResult {
            location: Location {
                name: location.name,
                region: location.region,
                country: location.country,
            },
            current: CurrentConditions {
                temp_c: current.temp_c,
                temp_f: current.temp_f,
                condition: Condition {
                    text: current.condition.text,
                    icon: current.condition.icon,
                },
                humidity: current.humidity,
                pressure_mb: current.pressure_mb,
                vis_km: current.vis_km,
                last_updated: current.last_updated_epoch.and_then(unix_to_utc),
            },
        }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<WeatherResult, QueryError> {
        tracing::debug!(city, "Querying WeatherAPI.com");
        self.fetch_current(city).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
