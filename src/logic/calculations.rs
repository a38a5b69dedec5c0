use crate::error::{Result, UrbanPulseError};
use serde::{Deserialize, Serialize};

/// Above this the heat index applies (°C)
pub const HEAT_INDEX_THRESHOLD_C: f64 = 27.0;
/// Below this wind chill applies (°C)
pub const WIND_CHILL_THRESHOLD_C: f64 = 10.0;

pub const OPTIMAL_TEMP_C: f64 = 25.0;
pub const OPTIMAL_HUMIDITY: f64 = 50.0;

/// Round the stored value to one decimal place.
///
/// Goes through the exact decimal expansion, so 20.05 (stored just above)
/// rounds up and 21.15 (stored just below) rounds down; exact ties go to even.
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeelsLikeRegime {
    HeatIndex,
    WindChill,
    Ambient,
}

impl FeelsLikeRegime {
    pub fn for_temperature(temp_c: f64) -> Self {
        if temp_c > HEAT_INDEX_THRESHOLD_C {
            FeelsLikeRegime::HeatIndex
        } else if temp_c < WIND_CHILL_THRESHOLD_C {
            FeelsLikeRegime::WindChill
        } else {
            FeelsLikeRegime::Ambient
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeelsLikeRegime::HeatIndex => "Heat index",
            FeelsLikeRegime::WindChill => "Wind chill",
            FeelsLikeRegime::Ambient => "Ambient",
        }
    }
}

/// Simplified heat index from the saturation vapour pressure approximation.
pub fn heat_index(temp_c: f64, humidity: f64) -> f64 {
    let vapour = 6.11 * (5417.753 * (1.0 / 273.16 - 1.0 / (273.15 + temp_c))).exp();
    temp_c + 0.5555 * (vapour * (humidity / 100.0) - 10.0)
}

/// Canadian wind chill index with wind in m/s.
pub fn wind_chill(temp_c: f64, wind_ms: f64) -> f64 {
    let w = wind_ms.powf(0.16);
    13.12 + 0.6215 * temp_c - 11.37 * w + 0.3965 * temp_c * w
}

/// Feels-like temperature (°C, one decimal).
///
/// Heat index above 27°C, wind chill below 10°C, the raw temperature in
/// between. Wind must be a finite, non-negative speed; temperature and
/// humidity must be finite.
pub fn feels_like(temp_c: f64, humidity: f64, wind_ms: f64) -> Result<f64> {
    if !temp_c.is_finite() || !humidity.is_finite() {
        return Err(UrbanPulseError::InvalidInput(format!(
            "temperature and humidity must be finite (got {}°C, {}%)",
            temp_c, humidity
        )));
    }
    if !wind_ms.is_finite() || wind_ms < 0.0 {
        return Err(UrbanPulseError::InvalidInput(format!(
            "wind speed must be a non-negative number (got {} m/s)",
            wind_ms
        )));
    }

    let value = match FeelsLikeRegime::for_temperature(temp_c) {
        FeelsLikeRegime::HeatIndex => heat_index(temp_c, humidity),
        FeelsLikeRegime::WindChill => wind_chill(temp_c, wind_ms),
        FeelsLikeRegime::Ambient => temp_c,
    };

    Ok(round1(value))
}

/// The three sub-scores behind the comfort score, each floored at 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortBreakdown {
    pub temperature: f64,
    pub humidity: f64,
    pub air_quality: f64,
}

impl ComfortBreakdown {
    pub fn new(temp_c: f64, humidity: f64, aqi: u16) -> Self {
        Self {
            temperature: temperature_score(temp_c),
            humidity: humidity_score(humidity),
            air_quality: air_quality_score(aqi),
        }
    }

    /// Equal-weight mean of the sub-scores, one decimal.
    pub fn score(&self) -> f64 {
        round1((self.temperature + self.humidity + self.air_quality) / 3.0)
    }
}

/// Peaks at 25°C, reaches 0 about 33.3°C away.
pub fn temperature_score(temp_c: f64) -> f64 {
    (100.0 - (temp_c - OPTIMAL_TEMP_C).abs() * 3.0).max(0.0)
}

/// Peaks at 50%, reaches 0 about 66.7 points away.
pub fn humidity_score(humidity: f64) -> f64 {
    (100.0 - (humidity - OPTIMAL_HUMIDITY).abs() * 1.5).max(0.0)
}

/// Reaches 0 at AQI 125.
pub fn air_quality_score(aqi: u16) -> f64 {
    (100.0 - f64::from(aqi) * 0.8).max(0.0)
}

/// Comfort score (nominally 0-100, one decimal).
///
/// Sub-scores are floored at 0 but not capped at 100.
pub fn comfort_score(temp_c: f64, humidity: f64, aqi: u16) -> f64 {
    ComfortBreakdown::new(temp_c, humidity, aqi).score()
}

pub fn comfort_emoji(score: f64) -> &'static str {
    if score >= 80.0 {
        "🌟"
    } else if score >= 60.0 {
        "👍"
    } else if score >= 40.0 {
        "😐"
    } else {
        "😰"
    }
}

/// Wind axis of the comfort radar (20 points per m/s, capped at 100).
pub fn wind_factor(wind_ms: f64) -> f64 {
    (wind_ms * 20.0).min(100.0)
}

/// Visibility axis of the comfort radar (10 points per km, capped at 100).
pub fn visibility_factor(visibility_km: f64) -> f64 {
    (visibility_km * 10.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feels_like_heat_index_regime() {
        let expected = round1(heat_index(30.0, 50.0));
        assert_eq!(feels_like(30.0, 50.0, 5.0).unwrap(), expected);
        assert!((expected - 36.5).abs() < 1e-9);
        // humid and hot
        assert!((feels_like(35.0, 80.0, 2.0).unwrap() - 55.3).abs() < 1e-9);
        // dry heat can feel cooler than ambient
        assert!((feels_like(28.0, 0.0, 0.0).unwrap() - 22.4).abs() < 1e-9);
    }

    #[test]
    fn feels_like_wind_chill_regime() {
        let expected = round1(wind_chill(5.0, 10.0));
        assert_eq!(feels_like(5.0, 50.0, 10.0).unwrap(), expected);
        assert!((expected - 2.7).abs() < 1e-9);
        assert!((feels_like(-10.0, 50.0, 20.0).unwrap() - (-17.9)).abs() < 1e-9);
    }

    #[test]
    fn feels_like_calm_wind_is_defined() {
        assert!((feels_like(5.0, 50.0, 0.0).unwrap() - 16.2).abs() < 1e-9);
    }

    #[test]
    fn feels_like_ambient_regime() {
        assert_eq!(feels_like(20.0, 50.0, 5.0).unwrap(), 20.0);
        assert_eq!(feels_like(10.0, 90.0, 15.0).unwrap(), 10.0);
        assert_eq!(feels_like(27.0, 90.0, 15.0).unwrap(), 27.0);
        assert_eq!(feels_like(21.04, 50.0, 5.0).unwrap(), 21.0);
    }

    #[test]
    fn one_decimal_rounding_uses_stored_value() {
        assert_eq!(feels_like(20.05, 50.0, 5.0).unwrap(), 20.1);
        assert_eq!(feels_like(21.15, 50.0, 5.0).unwrap(), 21.1);
        assert_eq!(feels_like(12.65, 50.0, 5.0).unwrap(), 12.7);
        // exactly representable tie
        assert_eq!(feels_like(21.25, 50.0, 5.0).unwrap(), 21.2);
        assert!(round1(f64::NAN).is_nan());
    }

    #[test]
    fn feels_like_regime_boundaries() {
        assert_eq!(
            FeelsLikeRegime::for_temperature(27.0),
            FeelsLikeRegime::Ambient
        );
        assert_eq!(
            FeelsLikeRegime::for_temperature(27.01),
            FeelsLikeRegime::HeatIndex
        );
        assert_eq!(
            FeelsLikeRegime::for_temperature(10.0),
            FeelsLikeRegime::Ambient
        );
        assert_eq!(
            FeelsLikeRegime::for_temperature(9.99),
            FeelsLikeRegime::WindChill
        );
    }

    #[test]
    fn feels_like_rejects_invalid_wind() {
        assert!(matches!(
            feels_like(5.0, 50.0, -1.0),
            Err(UrbanPulseError::InvalidInput(_))
        ));
        assert!(matches!(
            feels_like(20.0, 50.0, f64::NAN),
            Err(UrbanPulseError::InvalidInput(_))
        ));
        assert!(feels_like(f64::NAN, 50.0, 1.0).is_err());
    }

    #[test]
    fn comfort_score_at_optimum() {
        assert_eq!(comfort_score(25.0, 50.0, 0), 100.0);
    }

    #[test]
    fn comfort_score_with_unhealthy_air() {
        assert_eq!(comfort_score(25.0, 50.0, 125), 66.7);
        assert_eq!(comfort_score(25.0, 50.0, 500), 66.7);
    }

    #[test]
    fn comfort_sub_scores_floor_at_zero() {
        let breakdown = ComfortBreakdown::new(-20.0, 0.0, 300);
        assert_eq!(breakdown.temperature, 0.0);
        assert_eq!(breakdown.humidity, 25.0);
        assert_eq!(breakdown.air_quality, 0.0);
        assert_eq!(breakdown.score(), 8.3);
    }

    #[test]
    fn comfort_score_mixed_inputs() {
        // 100 - 5*3 = 85, 100 - 20*1.5 = 70, 100 - 40 = 60
        let breakdown = ComfortBreakdown::new(30.0, 70.0, 50);
        assert_eq!(breakdown.temperature, 85.0);
        assert_eq!(breakdown.humidity, 70.0);
        assert_eq!(breakdown.air_quality, 60.0);
        assert_eq!(breakdown.score(), 71.7);
    }

    #[test]
    fn comfort_emoji_thresholds() {
        assert_eq!(comfort_emoji(80.0), "🌟");
        assert_eq!(comfort_emoji(79.9), "👍");
        assert_eq!(comfort_emoji(60.0), "👍");
        assert_eq!(comfort_emoji(40.0), "😐");
        assert_eq!(comfort_emoji(39.9), "😰");
    }

    #[test]
    fn radar_factors_cap_at_100() {
        assert_eq!(wind_factor(2.5), 50.0);
        assert_eq!(wind_factor(12.0), 100.0);
        assert_eq!(visibility_factor(10.0), 100.0);
        assert_eq!(visibility_factor(3.5), 35.0);
    }

    #[test]
    fn calculations_are_idempotent() {
        let a = feels_like(31.3, 64.0, 3.1).unwrap();
        let b = feels_like(31.3, 64.0, 3.1).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        let c = comfort_score(18.2, 77.0, 143);
        let d = comfort_score(18.2, 77.0, 143);
        assert_eq!(c.to_bits(), d.to_bits());
    }
}
