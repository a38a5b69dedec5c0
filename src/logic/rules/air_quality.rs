use super::{Rule, RuleInputs};
use crate::logic::aqi::{classify, ALERT_THRESHOLD};
use crate::models::{AdvisoryKind, Recommendation};

/// Poor air quality advisory
///
/// Conditions:
/// - AQI >100 (Poor or Very Poor)
pub struct AirQualityRule;

impl Rule for AirQualityRule {
    fn id(&self) -> &'static str {
        "air_quality"
    }

    fn name(&self) -> &'static str {
        "Poor Air Quality"
    }

    fn evaluate(&self, inputs: &RuleInputs) -> Option<Recommendation> {
        if inputs.aqi <= ALERT_THRESHOLD {
            return None;
        }

        Some(
            Recommendation::new(
                "poor_air_quality",
                AdvisoryKind::PoorAirQuality,
                "Poor Air Quality",
                "Wear an N95 mask outdoors and use air purifiers indoors",
            )
            .with_data_point("AQI", inputs.aqi, "PM2.5")
            .with_data_point("Category", classify(inputs.aqi), "PM2.5"),
        )
    }
}
