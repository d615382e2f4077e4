use chrono::{DateTime, Utc};

use crate::{TemperatureUnit, WeatherResult};

/// What the weather panel shows for one result at one unit.
///
/// Built at render time from the stored result and the current unit, so
/// switching units never touches the result itself.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    pub heading: String,
    pub temperature: f64,
    pub unit: TemperatureUnit,
    pub condition: String,
    pub icon: String,
    pub humidity: u8,
    pub pressure_mb: f64,
    pub vis_km: f64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl WeatherPanel {
    pub fn new(result: &WeatherResult, unit: TemperatureUnit) -> Self {
        let loc = &result.location;
        let current = &result.current;

        Self {
            heading: format!("{}, {}, {}", loc.name, loc.region, loc.country),
            temperature: result.temperature(unit),
            unit,
            condition: current.condition.text.clone(),
            icon: current.condition.icon.clone(),
            humidity: current.humidity,
            pressure_mb: current.pressure_mb,
            vis_km: current.vis_km,
            last_updated: current.last_updated,
        }
    }

    /// e.g. `14 °C`
    pub fn temperature_label(&self) -> String {
        format!("{} {}", self.temperature, self.unit.symbol())
    }

    /// e.g. `Humidity: 72 % | Pressure: 1014 mb | Visibility: 10 km`
    pub fn details_line(&self) -> String {
        format!(
            "Humidity: {} % | Pressure: {} mb | Visibility: {} km",
            self.humidity, self.pressure_mb, self.vis_km
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_result;

    #[test]
    fn panel_reads_selected_unit() {
        let result = sample_result("London");

        let c = WeatherPanel::new(&result, TemperatureUnit::Celsius);
        let f = WeatherPanel::new(&result, TemperatureUnit::Fahrenheit);

        assert_eq!(c.temperature_label(), "14 °C");
        assert_eq!(f.temperature_label(), "57.2 °F");
        assert_eq!(c.heading, "London, City of London, Greater London, United Kingdom");
        assert_eq!(c.details_line(), f.details_line());
    }

    #[test]
    fn details_line_format() {
        let panel = WeatherPanel::new(&sample_result("London"), TemperatureUnit::Celsius);
        assert_eq!(
            panel.details_line(),
            "Humidity: 72 % | Pressure: 1014 mb | Visibility: 10 km"
        );
    }
}
