use super::{Rule, RuleInputs};
use crate::models::{AdvisoryKind, Recommendation};

pub const PERFECT_COMFORT_SCORE: f64 = 80.0;

/// Favorable weather advisory
///
/// Conditions:
/// - Comfort score >80
pub struct PerfectWeatherRule;

impl Rule for PerfectWeatherRule {
    fn id(&self) -> &'static str {
        "perfect_weather"
    }

    fn name(&self) -> &'static str {
        "Perfect Weather"
    }

    fn evaluate(&self, inputs: &RuleInputs) -> Option<Recommendation> {
        // NaN scores never qualify
        let qualifies = inputs.comfort_score > PERFECT_COMFORT_SCORE;
        qualifies.then(|| {
            Recommendation::new(
                "perfect_weather",
                AdvisoryKind::PerfectWeather,
                "Perfect Weather",
                "Great day for outdoor activities and exercise!",
            )
            .with_data_point(
                "Comfort Score",
                format!("{:.1}", inputs.comfort_score),
                "Calculated",
            )
        })
    }
}
