use super::snapshot::CitySnapshot;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub metric: &'static str,
    pub primary: f64,
    pub other: f64,
}

/// Side-by-side view of two cities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityComparison {
    pub primary_city: String,
    pub other_city: String,
    pub rows: Vec<ComparisonRow>,
    pub winner: String,
}

impl CityComparison {
    pub fn new(primary: &CitySnapshot, other: &CitySnapshot) -> Self {
        let metrics = |s: &CitySnapshot| {
            let r = s.conditions.reading;
            [
                ("Temperature (°C)", r.temperature_c),
                ("Humidity (%)", r.humidity_percent),
                ("Wind Speed (m/s)", r.wind_speed_ms),
                ("AQI (PM2.5)", f64::from(s.aqi_value())),
                ("Comfort Score", s.comfort_score),
            ]
        };

        let rows = metrics(primary)
            .into_iter()
            .zip(metrics(other))
            .map(|((metric, a), (_, b))| ComparisonRow {
                metric,
                primary: a,
                other: b,
            })
            .collect();

        Self {
            primary_city: primary.city().to_string(),
            other_city: other.city().to_string(),
            rows,
            winner: comparison_winner(primary, other).to_string(),
        }
    }

    pub fn primary_wins(&self) -> bool {
        self.winner == self.primary_city
    }
}

/// The primary city wins only with a strictly higher comfort score.
pub fn comparison_winner<'a>(primary: &'a CitySnapshot, other: &'a CitySnapshot) -> &'a str {
    if primary.comfort_score > other.comfort_score {
        primary.city()
    } else {
        other.city()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::RulesEngine;
    use crate::models::{Coordinates, CurrentConditions, PollutionReading, WeatherReading};
    use chrono::Utc;

    fn snapshot(city: &str, temp: f64, humidity: f64, pm25: f64) -> CitySnapshot {
        let conditions = CurrentConditions {
            city: city.to_string(),
            country: None,
            coordinates: Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            },
            reading: WeatherReading::new(temp, humidity, 3.0),
            pressure_hpa: 1010.0,
            visibility_km: 10.0,
            condition: "Clear Sky".to_string(),
            icon_code: "01d".to_string(),
            sunrise: None,
            sunset: None,
        };
        CitySnapshot::build(
            conditions,
            PollutionReading::new(pm25),
            &RulesEngine::new(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn higher_comfort_wins() {
        let bangalore = snapshot("Bangalore", 24.0, 55.0, 8.0);
        let delhi = snapshot("Delhi", 38.0, 20.0, 120.0);

        let cmp = CityComparison::new(&bangalore, &delhi);
        assert_eq!(cmp.winner, "Bangalore");
        assert!(cmp.primary_wins());

        let reversed = CityComparison::new(&delhi, &bangalore);
        assert_eq!(reversed.winner, "Bangalore");
        assert!(!reversed.primary_wins());
    }

    #[test]
    fn tie_goes_to_other_city() {
        let a = snapshot("Pune", 25.0, 50.0, 5.0);
        let b = snapshot("Chennai", 25.0, 50.0, 5.0);
        assert_eq!(comparison_winner(&a, &b), "Chennai");
    }

    #[test]
    fn rows_pair_metrics() {
        let a = snapshot("Pune", 25.0, 50.0, 12.0);
        let b = snapshot("Kolkata", 31.0, 80.0, 35.4);
        let cmp = CityComparison::new(&a, &b);

        assert_eq!(cmp.rows.len(), 5);
        assert_eq!(cmp.rows[0].metric, "Temperature (°C)");
        assert_eq!(cmp.rows[0].primary, 25.0);
        assert_eq!(cmp.rows[0].other, 31.0);
        assert_eq!(cmp.rows[3].primary, 50.0);
        assert_eq!(cmp.rows[3].other, 100.0);
    }
}
