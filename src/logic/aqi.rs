use crate::models::ColorToken;
use serde::{Deserialize, Serialize};

/// AQI values above this trigger the air quality alert banner.
pub const ALERT_THRESHOLD: u16 = 100;

/// Returned when a concentration falls outside every band.
pub const SATURATED_AQI: u16 = 500;

/// One row of the EPA PM2.5 breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub conc_low: f64,
    pub conc_high: f64,
    pub aqi_low: u16,
    pub aqi_high: u16,
}

impl Band {
    const fn new(conc_low: f64, conc_high: f64, aqi_low: u16, aqi_high: u16) -> Self {
        Self {
            conc_low,
            conc_high,
            aqi_low,
            aqi_high,
        }
    }

    // AQI = ((AQIhigh - AQIlow) / (Chigh - Clow)) * (C - Clow) + AQIlow
    fn interpolate(&self, pm25: f64) -> u16 {
        let slope = f64::from(self.aqi_high - self.aqi_low) / (self.conc_high - self.conc_low);
        let aqi = slope * (pm25 - self.conc_low) + f64::from(self.aqi_low);
        aqi.round_ties_even() as u16
    }
}

/// PM2.5 breakpoints in ascending order (µg/m³ → AQI).
pub const PM25_BANDS: [Band; 7] = [
    Band::new(0.0, 12.0, 0, 50),
    Band::new(12.1, 35.4, 51, 100),
    Band::new(35.5, 55.4, 101, 150),
    Band::new(55.5, 150.4, 151, 200),
    Band::new(150.5, 250.4, 201, 300),
    Band::new(250.5, 350.4, 301, 400),
    Band::new(350.5, 500.4, 401, 500),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AqiResultKind {
    Interpolated,
    /// No band matched; the value is pinned at 500.
    Saturated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiConversion {
    pub value: u16,
    pub kind: AqiResultKind,
}

impl AqiConversion {
    pub fn is_saturated(&self) -> bool {
        self.kind == AqiResultKind::Saturated
    }
}

/// Convert a PM2.5 concentration to an AQI value, reporting how it was obtained.
///
/// Bands are scanned in ascending order and the first band whose upper bound
/// is not exceeded wins. Concentrations in the 0.1-wide gaps between published
/// bands (e.g. 12.05) belong to the next band and take its lowest AQI, so the
/// result never decreases as `pm25` grows. Negative, NaN and above-table
/// concentrations saturate at [`SATURATED_AQI`].
pub fn convert_pm25(pm25: f64) -> AqiConversion {
    if pm25 >= PM25_BANDS[0].conc_low {
        for band in PM25_BANDS.iter() {
            if pm25 <= band.conc_high {
                return AqiConversion {
                    value: band.interpolate(pm25.max(band.conc_low)),
                    kind: AqiResultKind::Interpolated,
                };
            }
        }
    }

    AqiConversion {
        value: SATURATED_AQI,
        kind: AqiResultKind::Saturated,
    }
}

/// Convert a PM2.5 concentration (µg/m³) to a US EPA style AQI in [0, 500].
pub fn pm25_to_aqi(pm25: f64) -> u16 {
    convert_pm25(pm25).value
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl AqiCategory {
    pub fn from_aqi(aqi: u16) -> Self {
        match aqi {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=200 => AqiCategory::Poor,
            _ => AqiCategory::VeryPoor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
        }
    }

    pub fn color_token(&self) -> ColorToken {
        match self {
            AqiCategory::Good => ColorToken::EMERALD,
            AqiCategory::Moderate => ColorToken::YELLOW,
            AqiCategory::Poor => ColorToken::ORANGE,
            AqiCategory::VeryPoor => ColorToken::RED,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            AqiCategory::Good => "😊",
            AqiCategory::Moderate => "😐",
            AqiCategory::Poor => "😷",
            AqiCategory::VeryPoor => "🚨",
        }
    }

    pub fn health_advice(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Safe for all outdoor activities",
            AqiCategory::Moderate => "Sensitive groups should limit prolonged outdoor exertion",
            AqiCategory::Poor => "Everyone should reduce outdoor exertion",
            AqiCategory::VeryPoor => "Avoid all outdoor activities",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        self.color_token().color()
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Threshold lookup from AQI value to category.
pub fn classify(aqi: u16) -> AqiCategory {
    AqiCategory::from_aqi(aqi)
}

pub fn is_alert(aqi: u16) -> bool {
    aqi > ALERT_THRESHOLD
}
