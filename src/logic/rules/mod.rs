pub mod air_quality;
pub mod engine;
pub mod humidity;
pub mod perfect_weather;
pub mod temperature;
pub mod wind;

pub use engine::RulesEngine;

use crate::models::Recommendation;

/// Current values every advisory rule sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInputs {
    pub temperature_c: f64,
    pub aqi: u16,
    pub humidity_percent: f64,
    pub wind_speed_ms: f64,
    pub comfort_score: f64,
}

/// Trait for advisory rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return a recommendation if conditions are met
    fn evaluate(&self, inputs: &RuleInputs) -> Option<Recommendation>;
}

/// Evaluate the standard rule set in declaration order.
pub fn recommend(
    temperature_c: f64,
    aqi: u16,
    humidity_percent: f64,
    wind_speed_ms: f64,
    comfort_score: f64,
) -> Vec<Recommendation> {
    RulesEngine::new().evaluate(&RuleInputs {
        temperature_c,
        aqi,
        humidity_percent,
        wind_speed_ms,
        comfort_score,
    })
}
