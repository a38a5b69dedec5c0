use crate::config::OpenWeatherMapConfig;
use crate::error::{Result, UrbanPulseError};
use crate::models::{
    metres_to_km, title_case, Coordinates, CurrentConditions, PollutionReading, WeatherReading,
};
use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Reported visibility when the provider omits it (metres)
const DEFAULT_VISIBILITY_M: f64 = 10_000.0;

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
}

// OpenWeatherMap API response structures
#[derive(Debug, Deserialize)]
pub(crate) struct OwmWeatherResponse {
    coord: OwmCoord,
    #[serde(default)]
    weather: Vec<OwmWeather>,
    main: OwmMain,
    #[serde(default)]
    visibility: Option<f64>,
    wind: OwmWind,
    #[serde(default)]
    sys: Option<OwmSys>,
}

#[derive(Debug, Deserialize)]
struct OwmCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmSys {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    sunrise: Option<i64>,
    #[serde(default)]
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwmAirResponse {
    list: Vec<OwmAirItem>,
}

#[derive(Debug, Deserialize)]
struct OwmAirItem {
    components: OwmComponents,
}

#[derive(Debug, Deserialize)]
struct OwmComponents {
    pm2_5: f64,
    #[serde(default)]
    co: f64,
    #[serde(default)]
    no2: f64,
    #[serde(default)]
    o3: f64,
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch current weather for a city by name (metric units).
    pub async fn fetch_weather(&self, city: &str) -> Result<CurrentConditions> {
        let url = self.endpoint(
            "weather",
            &[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ],
        )?;

        let response: OwmWeatherResponse = self.get_json(url).await?;
        Ok(convert_weather(city, response))
    }

    /// Fetch current pollutant concentrations at a coordinate.
    pub async fn fetch_pollution(&self, coordinates: Coordinates) -> Result<PollutionReading> {
        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();
        let url = self.endpoint(
            "air_pollution",
            &[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.config.api_key.as_str()),
            ],
        )?;

        let response: OwmAirResponse = self.get_json(url).await?;
        convert_pollution(response)
    }

    /// Weather first, then air quality at the coordinates it reports.
    pub async fn fetch_city(&self, city: &str) -> Result<(CurrentConditions, PollutionReading)> {
        let conditions = self.fetch_weather(city).await?;
        let pollution = self.fetch_pollution(conditions.coordinates).await?;
        tracing::debug!(
            city,
            temp = conditions.reading.temperature_c,
            pm25 = pollution.pm25,
            "Fetched city data"
        );
        Ok((conditions, pollution))
    }

    /// Test connection to OpenWeatherMap API
    pub async fn test_connection(&self, city: &str) -> Result<bool> {
        let url = self.endpoint(
            "weather",
            &[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ],
        )?;

        let response =
            self.client.get(url).send().await.map_err(|e| {
                UrbanPulseError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
            })?;

        Ok(response.status().is_success())
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse_with_params(&format!("{}/{}", base, path), params).map_err(|e| {
            UrbanPulseError::Config(format!("Invalid OpenWeatherMap base URL: {}", e))
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response =
            self.client.get(url).send().await.map_err(|e| {
                UrbanPulseError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(UrbanPulseError::DataSourceUnavailable(format!(
                "OpenWeatherMap returned {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            UrbanPulseError::DataSourceUnavailable(format!(
                "Failed to parse OpenWeatherMap response: {}",
                e
            ))
        })
    }
}

fn timestamp(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
}

pub(crate) fn convert_weather(city: &str, response: OwmWeatherResponse) -> CurrentConditions {
    let (condition, icon_code) = response
        .weather
        .first()
        .map(|w| (title_case(&w.description), w.icon.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), String::new()));

    let sys = response.sys.as_ref();

    CurrentConditions {
        city: city.to_string(),
        country: sys.and_then(|s| s.country.clone()),
        coordinates: Coordinates {
            latitude: response.coord.lat,
            longitude: response.coord.lon,
        },
        reading: WeatherReading::new(
            response.main.temp,
            response.main.humidity,
            response.wind.speed,
        ),
        pressure_hpa: response.main.pressure,
        visibility_km: metres_to_km(response.visibility.unwrap_or(DEFAULT_VISIBILITY_M)),
        condition,
        icon_code,
        sunrise: timestamp(sys.and_then(|s| s.sunrise)),
        sunset: timestamp(sys.and_then(|s| s.sunset)),
    }
}

pub(crate) fn convert_pollution(response: OwmAirResponse) -> Result<PollutionReading> {
    let item = response.list.first().ok_or_else(|| {
        UrbanPulseError::InvalidData("OpenWeatherMap air pollution list is empty".into())
    })?;

    let c = &item.components;
    Ok(PollutionReading {
        pm25: c.pm2_5,
        co: c.co,
        no2: c.no2,
        o3: c.o3,
    })
}
