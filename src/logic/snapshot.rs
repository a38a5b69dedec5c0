use super::aqi::{classify, convert_pm25, is_alert, AqiCategory, AqiConversion};
use super::calculations::{
    comfort_emoji, feels_like, visibility_factor, wind_factor, ComfortBreakdown, FeelsLikeRegime,
};
use super::rules::{RuleInputs, RulesEngine};
use crate::error::Result;
use crate::models::{ColorToken, CurrentConditions, PollutionReading, Recommendation};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Every derived value for one city at one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct CitySnapshot {
    pub conditions: CurrentConditions,
    pub pollution: PollutionReading,
    pub aqi: AqiConversion,
    pub category: AqiCategory,
    pub feels_like_c: f64,
    pub feels_like_regime: FeelsLikeRegime,
    pub comfort: ComfortBreakdown,
    pub comfort_score: f64,
    pub recommendations: Vec<Recommendation>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutantBar {
    pub label: &'static str,
    pub value: f64,
    pub color: ColorToken,
}

impl CitySnapshot {
    pub fn build(
        conditions: CurrentConditions,
        pollution: PollutionReading,
        engine: &RulesEngine,
        fetched_at: DateTime<Utc>,
    ) -> Result<Self> {
        let reading = conditions.reading;
        let aqi = convert_pm25(pollution.pm25);
        if aqi.is_saturated() {
            tracing::debug!(
                city = %conditions.city,
                pm25 = pollution.pm25,
                "PM2.5 outside breakpoint table, AQI saturated"
            );
        }

        let feels_like_c = feels_like(
            reading.temperature_c,
            reading.humidity_percent,
            reading.wind_speed_ms,
        )?;
        let comfort = ComfortBreakdown::new(reading.temperature_c, reading.humidity_percent, aqi.value);
        let comfort_score = comfort.score();

        let recommendations = engine.evaluate(&RuleInputs {
            temperature_c: reading.temperature_c,
            aqi: aqi.value,
            humidity_percent: reading.humidity_percent,
            wind_speed_ms: reading.wind_speed_ms,
            comfort_score,
        });

        Ok(Self {
            category: classify(aqi.value),
            feels_like_regime: FeelsLikeRegime::for_temperature(reading.temperature_c),
            conditions,
            pollution,
            aqi,
            feels_like_c,
            comfort,
            comfort_score,
            recommendations,
            fetched_at,
        })
    }

    pub fn city(&self) -> &str {
        &self.conditions.city
    }

    pub fn aqi_value(&self) -> u16 {
        self.aqi.value
    }

    pub fn air_quality_alert(&self) -> bool {
        is_alert(self.aqi.value)
    }

    pub fn comfort_emoji(&self) -> &'static str {
        comfort_emoji(self.comfort_score)
    }

    /// Axes of the comfort radar, each on a 0-100 scale.
    pub fn comfort_factors(&self) -> [(&'static str, f64); 5] {
        [
            ("Temperature", self.comfort.temperature),
            ("Humidity", self.comfort.humidity),
            ("Air Quality", self.comfort.air_quality),
            ("Wind", wind_factor(self.conditions.reading.wind_speed_ms)),
            ("Visibility", visibility_factor(self.conditions.visibility_km)),
        ]
    }

    /// Pollutant composition; CO is scaled down 100x to share an axis.
    pub fn pollutant_bars(&self) -> [PollutantBar; 4] {
        [
            PollutantBar {
                label: "PM2.5",
                value: self.pollution.pm25,
                color: ColorToken::RED,
            },
            PollutantBar {
                label: "CO/100",
                value: self.pollution.co / 100.0,
                color: ColorToken::AMBER,
            },
            PollutantBar {
                label: "NO₂",
                value: self.pollution.no2,
                color: ColorToken::VIOLET,
            },
            PollutantBar {
                label: "O₃",
                value: self.pollution.o3,
                color: ColorToken::CYAN,
            },
        ]
    }
}
