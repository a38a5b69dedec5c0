//! Integration tests for the urbanpulse library surface

use chrono::{NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use urbanpulse::logic::{build_trends, CityComparison, CitySnapshot};
use urbanpulse::models::{Coordinates, CurrentConditions, PollutionReading, WeatherReading};
use urbanpulse::{
    classify, comfort_score, convert_pm25, feels_like, pm25_to_aqi, recommend, AqiCategory,
    AqiResultKind, RulesEngine, UrbanPulseError,
};

fn conditions(city: &str, temp: f64, humidity: f64, wind: f64) -> CurrentConditions {
    CurrentConditions {
        city: city.to_string(),
        country: Some("IN".to_string()),
        coordinates: Coordinates {
            latitude: 28.61,
            longitude: 77.21,
        },
        reading: WeatherReading::new(temp, humidity, wind),
        pressure_hpa: 1012.0,
        visibility_km: 6.0,
        condition: "Clear Sky".to_string(),
        icon_code: "01d".to_string(),
        sunrise: None,
        sunset: None,
    }
}

#[test]
fn aqi_anchor_points() {
    assert_eq!(pm25_to_aqi(0.0), 0);
    assert_eq!(pm25_to_aqi(12.0), 50);
    assert_eq!(pm25_to_aqi(35.4), 100);
    assert_eq!(pm25_to_aqi(500.5), 500);
}

#[test]
fn aqi_is_monotonic_in_first_band() {
    let mut last = 0;
    for i in 0..=120 {
        let aqi = pm25_to_aqi(f64::from(i) / 10.0);
        assert!(aqi >= last, "AQI dropped at {}", f64::from(i) / 10.0);
        last = aqi;
    }
}

#[test]
fn aqi_saturates_out_of_table_values() {
    let negative = convert_pm25(-3.0);
    assert_eq!(negative.value, 500);
    assert_eq!(negative.kind, AqiResultKind::Saturated);

    let nan = convert_pm25(f64::NAN);
    assert_eq!(nan.value, 500);
    assert!(nan.is_saturated());

    assert_eq!(convert_pm25(40.0).kind, AqiResultKind::Interpolated);
}

#[test]
fn gap_values_take_next_band_floor() {
    assert_eq!(pm25_to_aqi(12.05), 51);
    assert_eq!(pm25_to_aqi(35.45), 101);
}

#[test]
fn classifier_boundaries() {
    assert_eq!(classify(50), AqiCategory::Good);
    assert_eq!(classify(51), AqiCategory::Moderate);
    assert_eq!(classify(100), AqiCategory::Moderate);
    assert_eq!(classify(101), AqiCategory::Poor);
    assert_eq!(classify(200), AqiCategory::Poor);
    assert_eq!(classify(201), AqiCategory::VeryPoor);
    assert_eq!(classify(201).label(), "Very Poor");
}

#[test]
fn feels_like_regimes() {
    assert_eq!(feels_like(30.0, 50.0, 5.0).unwrap(), 36.5);
    assert_eq!(feels_like(5.0, 50.0, 10.0).unwrap(), 2.7);
    assert_eq!(feels_like(20.0, 50.0, 5.0).unwrap(), 20.0);
}

#[test]
fn feels_like_rejects_invalid_wind() {
    assert!(matches!(
        feels_like(20.0, 50.0, -1.0),
        Err(UrbanPulseError::InvalidInput(_))
    ));
    assert!(matches!(
        feels_like(f64::NAN, 50.0, 1.0),
        Err(UrbanPulseError::InvalidInput(_))
    ));
}

#[test]
fn comfort_score_examples() {
    assert_eq!(comfort_score(25.0, 50.0, 0), 100.0);
    assert_eq!(comfort_score(25.0, 50.0, 125), 66.7);
}

#[test]
fn hot_day_yields_only_heat_advisory() {
    let recs = recommend(40.0, 0, 30.0, 0.0, 50.0);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "High Temperature Alert");
}

#[test]
fn mild_day_falls_back_to_normal() {
    let recs = recommend(20.0, 0, 30.0, 0.0, 50.0);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "Normal Conditions");
    assert_eq!(
        recs[0].description,
        "Weather conditions are moderate. Enjoy your day!"
    );
}

#[test]
fn advisories_keep_rule_order() {
    let ids: Vec<_> = recommend(38.0, 150, 80.0, 12.0, 10.0)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(
        ids,
        vec![
            "high_temperature",
            "poor_air_quality",
            "high_humidity",
            "windy_conditions"
        ]
    );
}

#[test]
fn core_functions_are_idempotent() {
    assert_eq!(pm25_to_aqi(55.5), pm25_to_aqi(55.5));
    assert_eq!(
        feels_like(31.0, 60.0, 3.0).unwrap(),
        feels_like(31.0, 60.0, 3.0).unwrap()
    );
    assert_eq!(comfort_score(18.0, 65.0, 80), comfort_score(18.0, 65.0, 80));
    assert_eq!(
        recommend(12.0, 120, 75.0, 11.0, 30.0),
        recommend(12.0, 120, 75.0, 11.0, 30.0)
    );
}

#[test]
fn snapshot_pipeline_end_to_end() {
    let engine = RulesEngine::new();
    let snapshot = CitySnapshot::build(
        conditions("Delhi", 25.0, 50.0, 0.0),
        PollutionReading::new(0.0),
        &engine,
        Utc::now(),
    )
    .unwrap();

    assert_eq!(snapshot.aqi_value(), 0);
    assert_eq!(snapshot.category, AqiCategory::Good);
    assert_eq!(snapshot.comfort_score, 100.0);
    assert_eq!(snapshot.feels_like_c, 25.0);
    assert!(!snapshot.air_quality_alert());
    assert_eq!(snapshot.recommendations[0].id, "perfect_weather");
}

#[test]
fn comparison_tie_goes_to_compare_city() {
    let engine = RulesEngine::new();
    let a = CitySnapshot::build(
        conditions("Delhi", 25.0, 50.0, 1.0),
        PollutionReading::new(5.0),
        &engine,
        Utc::now(),
    )
    .unwrap();
    let b = CitySnapshot::build(
        conditions("Mumbai", 25.0, 50.0, 1.0),
        PollutionReading::new(5.0),
        &engine,
        Utc::now(),
    )
    .unwrap();

    let comparison = CityComparison::new(&a, &b);
    assert_eq!(comparison.winner, "Mumbai");
    assert!(!comparison.primary_wins());
}

#[test]
fn seeded_trends_are_deterministic() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let first = build_trends(28.0, 90, 65.0, today, &mut StdRng::seed_from_u64(99));
    let second = build_trends(28.0, 90, 65.0, today, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
    assert_eq!(first.outlook.len(), 7);
    assert_eq!(first.hourly_temperature.len(), 8);
    assert_eq!(first.aqi_trend.len(), 24);
}
