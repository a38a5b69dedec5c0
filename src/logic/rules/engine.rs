use super::{
    air_quality::AirQualityRule, humidity::HumidityRule, perfect_weather::PerfectWeatherRule,
    temperature::TemperatureRule, wind::WindRule, Rule, RuleInputs,
};
use crate::models::{AdvisoryKind, Recommendation};

pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    /// Rules run in this order and their output keeps it.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(TemperatureRule),
            Box::new(AirQualityRule),
            Box::new(HumidityRule),
            Box::new(WindRule),
            Box::new(PerfectWeatherRule),
        ];

        Self { rules }
    }

    /// Every matching rule contributes one advisory. When nothing matches the
    /// result is a single "normal conditions" advisory, never empty.
    pub fn evaluate(&self, inputs: &RuleInputs) -> Vec<Recommendation> {
        let recommendations: Vec<Recommendation> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(inputs))
            .collect();

        if recommendations.is_empty() {
            tracing::trace!("no advisory rule matched, using fallback");
            vec![normal_conditions()]
        } else {
            recommendations
        }
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn normal_conditions() -> Recommendation {
    Recommendation::new(
        "normal_conditions",
        AdvisoryKind::Normal,
        "Normal Conditions",
        "Weather conditions are moderate. Enjoy your day!",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::recommend;

    fn ids(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn hot_day_only_fires_temperature() {
        let recs = recommend(40.0, 0, 30.0, 0.0, 50.0);
        assert_eq!(ids(&recs), vec!["high_temperature"]);
        assert_eq!(recs[0].title, "High Temperature Alert");
    }

    #[test]
    fn mild_day_falls_back_to_normal() {
        let recs = recommend(20.0, 0, 30.0, 0.0, 50.0);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, "normal_conditions");
        assert_eq!(recs[0].kind, AdvisoryKind::Normal);
        assert_eq!(recs[0].color.as_str(), "#10b981");
    }

    #[test]
    fn all_rules_fire_in_declaration_order() {
        // comfort score is passed in, not recomputed
        let recs = recommend(40.0, 150, 85.0, 12.0, 90.0);
        assert_eq!(
            ids(&recs),
            vec![
                "high_temperature",
                "poor_air_quality",
                "high_humidity",
                "windy_conditions",
                "perfect_weather",
            ]
        );
    }

    #[test]
    fn cold_and_polluted() {
        let recs = recommend(5.0, 180, 50.0, 3.0, 30.0);
        assert_eq!(ids(&recs), vec!["cold_weather", "poor_air_quality"]);
    }

    #[test]
    fn temperature_rules_are_exclusive() {
        for temp in [-30.0, 0.0, 14.9, 35.1, 50.0] {
            let recs = recommend(temp, 0, 50.0, 0.0, 0.0);
            let temperature_recs = recs
                .iter()
                .filter(|r| {
                    matches!(
                        r.kind,
                        AdvisoryKind::HighTemperature | AdvisoryKind::ColdWeather
                    )
                })
                .count();
            assert_eq!(temperature_recs, 1, "temp {}", temp);
        }
    }

    #[test]
    fn thresholds_are_strict() {
        let recs = recommend(35.0, 100, 70.0, 10.0, 80.0);
        assert_eq!(ids(&recs), vec!["normal_conditions"]);

        let recs = recommend(15.0, 0, 50.0, 0.0, 0.0);
        assert_eq!(ids(&recs), vec!["normal_conditions"]);
    }

    #[test]
    fn fallback_never_accompanies_other_advisories() {
        let recs = recommend(20.0, 0, 30.0, 0.0, 81.0);
        assert_eq!(ids(&recs), vec!["perfect_weather"]);
    }

    #[test]
    fn lists_rules_in_order() {
        let engine = RulesEngine::default();
        let rules = engine.list_rules();
        assert_eq!(rules.len(), 5);
        assert_eq!(rules[0].0, "temperature");
        assert_eq!(rules[4].0, "perfect_weather");
    }

    #[test]
    fn evaluation_is_idempotent() {
        let a = recommend(36.0, 120, 75.0, 11.0, 40.0);
        let b = recommend(36.0, 120, 75.0, 11.0, 40.0);
        assert_eq!(a, b);
    }
}
