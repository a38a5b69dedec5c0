use super::{Rule, RuleInputs};
use crate::models::{ms_to_kmh, AdvisoryKind, Recommendation};

pub const WINDY_MS: f64 = 10.0;

/// Windy conditions advisory
///
/// Conditions:
/// - Wind speed >10 m/s (36 km/h)
pub struct WindRule;

impl Rule for WindRule {
    fn id(&self) -> &'static str {
        "wind"
    }

    fn name(&self) -> &'static str {
        "Windy Conditions"
    }

    fn evaluate(&self, inputs: &RuleInputs) -> Option<Recommendation> {
        let wind = inputs.wind_speed_ms;
        (wind > WINDY_MS).then(|| {
            Recommendation::new(
                "windy_conditions",
                AdvisoryKind::Windy,
                "Windy Conditions",
                "Secure loose objects and avoid high-rise areas",
            )
            .with_data_point(
                "Wind",
                format!("{:.1} m/s ({:.1} km/h)", wind, ms_to_kmh(wind)),
                "OpenWeatherMap",
            )
        })
    }
}
