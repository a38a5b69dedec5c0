//! Simulated trend series for the dashboard.
//!
//! Nothing here is a forecast. The series are jittered or sinusoidal
//! decorations around the current readings, and every random draw goes
//! through the caller's RNG so a seeded generator reproduces them exactly.

use crate::models::{BestTimeWindow, DailyOutlook, HourlyPoint, TrendSet};
use chrono::{Duration, NaiveDate};
use rand::{Rng, RngExt};
use std::f64::consts::PI;

pub const OUTLOOK_DAYS: i64 = 7;
/// Guide line drawn on the comfort-by-hour chart.
pub const GOOD_COMFORT_LINE: f64 = 70.0;

/// 7-day high/low outlook: high = temp + U[-3, 5), low = high - U[3, 8).
pub fn seven_day_outlook<R: Rng + ?Sized>(
    temp_c: f64,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<DailyOutlook> {
    (0..OUTLOOK_DAYS)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let high_c = temp_c + f64::from(rng.random_range(-3i32..5));
            let low_c = high_c - f64::from(rng.random_range(3i32..8));
            DailyOutlook {
                date,
                label: date.format("%a %d").to_string(),
                high_c,
                low_c,
            }
        })
        .collect()
}

/// Temperature every three hours following a ±5°C sine over the day.
pub fn hourly_temperature_pattern(temp_c: f64) -> Vec<HourlyPoint> {
    (0..24)
        .step_by(3)
        .map(|hour| HourlyPoint {
            hour,
            value: temp_c + (f64::from(hour) / 24.0 * 2.0 * PI).sin() * 5.0,
        })
        .collect()
}

/// 24 hourly AQI values jittered by U[-15, 20) around the current AQI.
pub fn aqi_trend<R: Rng + ?Sized>(aqi: u16, rng: &mut R) -> Vec<HourlyPoint> {
    (0..24)
        .map(|hour| {
            let jitter: i32 = rng.random_range(-15..20);
            HourlyPoint {
                hour,
                // AQI has no negative values
                value: f64::from((i32::from(aqi) + jitter).max(0)),
            }
        })
        .collect()
}

/// Comfort score swinging ±15 around the current score, peaking in the evening.
pub fn comfort_by_hour(score: f64) -> Vec<HourlyPoint> {
    (0..24)
        .map(|hour| HourlyPoint {
            hour,
            value: score + ((f64::from(hour) - 12.0) / 24.0 * 2.0 * PI).sin() * 15.0,
        })
        .collect()
}

/// First hour with the highest comfort, as a two-hour window wrapping at midnight.
pub fn best_time_window(comfort: &[HourlyPoint]) -> Option<BestTimeWindow> {
    let mut best: Option<&HourlyPoint> = None;
    for point in comfort {
        match best {
            Some(b) if point.value <= b.value => {}
            _ => best = Some(point),
        }
    }

    best.map(|p| BestTimeWindow {
        start_hour: p.hour,
        end_hour: (p.hour + 2) % 24,
        peak_score: p.value,
    })
}

pub fn build_trends<R: Rng + ?Sized>(
    temp_c: f64,
    aqi: u16,
    comfort_score: f64,
    today: NaiveDate,
    rng: &mut R,
) -> TrendSet {
    let comfort = comfort_by_hour(comfort_score);
    let best_time = best_time_window(&comfort);

    TrendSet {
        outlook: seven_day_outlook(temp_c, today, rng),
        hourly_temperature: hourly_temperature_pattern(temp_c),
        aqi_trend: aqi_trend(aqi, rng),
        comfort_by_hour: comfort,
        best_time,
    }
}
