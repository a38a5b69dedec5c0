use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw weather fields the derived metrics are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_ms: f64,
}

impl WeatherReading {
    pub fn new(temperature_c: f64, humidity_percent: f64, wind_speed_ms: f64) -> Self {
        Self {
            temperature_c,
            humidity_percent,
            wind_speed_ms,
        }
    }

    pub fn wind_speed_kmh(&self) -> f64 {
        ms_to_kmh(self.wind_speed_ms)
    }
}

/// Pollutant concentrations in µg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutionReading {
    pub pm25: f64,
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
}

impl PollutionReading {
    pub fn new(pm25: f64) -> Self {
        Self {
            pm25,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything the current-weather endpoint tells us about a city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub country: Option<String>,
    pub coordinates: Coordinates,
    pub reading: WeatherReading,
    pub pressure_hpa: f64,
    pub visibility_km: f64,
    /// Title-cased provider description, e.g. "Scattered Clouds"
    pub condition: String,
    pub icon_code: String,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
}

pub fn ms_to_kmh(ms: f64) -> f64 {
    ms * 3.6
}

pub fn metres_to_km(m: f64) -> f64 {
    m / 1000.0
}

/// Capitalizes the first letter of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_conversions() {
        assert!((ms_to_kmh(10.0) - 36.0).abs() < 1e-9);
        assert!((ms_to_kmh(0.0)).abs() < 1e-9);
        assert!((metres_to_km(10_000.0) - 10.0).abs() < 1e-9);
        assert!((metres_to_km(2_500.0) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn title_case_descriptions() {
        assert_eq!(title_case("scattered clouds"), "Scattered Clouds");
        assert_eq!(title_case("haze"), "Haze");
        assert_eq!(title_case("LIGHT RAIN"), "Light Rain");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn reading_wind_in_kmh() {
        let reading = WeatherReading::new(20.0, 50.0, 5.0);
        assert!((reading.wind_speed_kmh() - 18.0).abs() < 1e-9);
    }
}
