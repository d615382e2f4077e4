use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::unit::TemperatureUnit;

/// Where the provider resolved the query to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
}

/// Condition label plus an icon reference (URL as given by the provider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub humidity: u8,
    pub pressure_mb: f64,
    pub vis_km: f64,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Current conditions for one queried location.
///
/// Both temperature readings come from the provider; nothing here converts
/// between units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub location: Location,
    pub current: CurrentConditions,
}

impl WeatherResult {
    /// Temperature reading for the given unit.
    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.current.temp_c,
            TemperatureUnit::Fahrenheit => self.current.temp_f,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_result(name: &str) -> WeatherResult {
    WeatherResult {
        location: Location {
            name: name.to_string(),
            region: "City of London, Greater London".to_string(),
            country: "United Kingdom".to_string(),
        },
        current: CurrentConditions {
            temp_c: 14.0,
            temp_f: 57.2,
            condition: Condition {
                text: "Partly cloudy".to_string(),
                icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
            },
            humidity: 72,
            pressure_mb: 1014.0,
            vis_km: 10.0,
            last_updated: None,
        },
    }
}
