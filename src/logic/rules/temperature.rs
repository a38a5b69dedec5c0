use super::{Rule, RuleInputs};
use crate::models::{AdvisoryKind, Recommendation};

pub const HIGH_TEMPERATURE_C: f64 = 35.0;
pub const COLD_TEMPERATURE_C: f64 = 15.0;

/// Temperature advisory - heat and cold are mutually exclusive
///
/// Conditions:
/// - Temperature >35°C: high temperature alert
/// - Otherwise temperature <15°C: cold weather advisory
pub struct TemperatureRule;

impl Rule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Temperature Extremes"
    }

    fn evaluate(&self, inputs: &RuleInputs) -> Option<Recommendation> {
        let temp = inputs.temperature_c;

        let rec = if temp > HIGH_TEMPERATURE_C {
            Recommendation::new(
                "high_temperature",
                AdvisoryKind::HighTemperature,
                "High Temperature Alert",
                "Stay hydrated and avoid direct sun exposure between 11 AM - 4 PM",
            )
        } else if temp < COLD_TEMPERATURE_C {
            Recommendation::new(
                "cold_weather",
                AdvisoryKind::ColdWeather,
                "Cold Weather",
                "Wear warm clothing and stay protected from wind chill",
            )
        } else {
            return None;
        };

        Some(rec.with_data_point("Temperature", format!("{:.1}°C", temp), "OpenWeatherMap"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(temperature_c: f64) -> RuleInputs {
        RuleInputs {
            temperature_c,
            aqi: 0,
            humidity_percent: 50.0,
            wind_speed_ms: 0.0,
            comfort_score: 50.0,
        }
    }

    #[test]
    fn heat_alert_above_35() {
        let rec = TemperatureRule.evaluate(&inputs(35.5)).unwrap();
        assert_eq!(rec.kind, AdvisoryKind::HighTemperature);
        assert_eq!(rec.color.as_str(), "#ef4444");
        assert_eq!(rec.data_points[0].value, "35.5°C");
    }

    #[test]
    fn cold_advisory_below_15() {
        let rec = TemperatureRule.evaluate(&inputs(14.0)).unwrap();
        assert_eq!(rec.kind, AdvisoryKind::ColdWeather);
        assert_eq!(rec.color.as_str(), "#3b82f6");
    }

    #[test]
    fn silent_between_thresholds() {
        assert!(TemperatureRule.evaluate(&inputs(15.0)).is_none());
        assert!(TemperatureRule.evaluate(&inputs(25.0)).is_none());
        assert!(TemperatureRule.evaluate(&inputs(35.0)).is_none());
    }
}
