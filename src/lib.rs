//! UrbanPulse: derived weather metrics for cities.
//!
//! Converts PM2.5 to AQI, classifies air quality, computes feels-like
//! temperature and a comfort score, and turns those into advisories. The
//! terminal dashboard and OpenWeatherMap client are built on top.

pub mod app;
pub mod cli;
pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod ui;

pub use config::Config;
pub use error::{Result, UrbanPulseError};
pub use logic::{
    classify, comfort_score, convert_pm25, feels_like, pm25_to_aqi, recommend, AqiCategory,
    AqiConversion, AqiResultKind, CityComparison, CitySnapshot, RulesEngine,
};
pub use models::{PollutionReading, Recommendation, WeatherReading};
