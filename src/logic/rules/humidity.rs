use super::{Rule, RuleInputs};
use crate::models::{AdvisoryKind, Recommendation};

pub const HIGH_HUMIDITY_PERCENT: f64 = 70.0;

/// High humidity advisory
///
/// Conditions:
/// - Relative humidity >70%
pub struct HumidityRule;

impl Rule for HumidityRule {
    fn id(&self) -> &'static str {
        "humidity"
    }

    fn name(&self) -> &'static str {
        "High Humidity"
    }

    fn evaluate(&self, inputs: &RuleInputs) -> Option<Recommendation> {
        let humid = inputs.humidity_percent > HIGH_HUMIDITY_PERCENT;
        humid.then(|| {
            Recommendation::new(
                "high_humidity",
                AdvisoryKind::HighHumidity,
                "High Humidity",
                "Use dehumidifiers indoors and stay in air-conditioned spaces",
            )
            .with_data_point(
                "Humidity",
                format!("{:.0}%", inputs.humidity_percent),
                "OpenWeatherMap",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(humidity_percent: f64) -> RuleInputs {
        RuleInputs {
            temperature_c: 20.0,
            aqi: 0,
            humidity_percent,
            wind_speed_ms: 0.0,
            comfort_score: 50.0,
        }
    }

    #[test]
    fn fires_above_70() {
        let rec = HumidityRule.evaluate(&inputs(71.0)).unwrap();
        assert_eq!(rec.kind, AdvisoryKind::HighHumidity);
        assert_eq!(rec.color.as_str(), "#06b6d4");
        assert_eq!(rec.data_points[0].value, "71%");
    }

    #[test]
    fn silent_at_70() {
        assert!(HumidityRule.evaluate(&inputs(70.0)).is_none());
    }

    #[test]
    fn silent_on_nan_humidity() {
        assert!(HumidityRule.evaluate(&inputs(f64::NAN)).is_none());
    }
}
