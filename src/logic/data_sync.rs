use super::rules::RulesEngine;
use super::snapshot::CitySnapshot;
use crate::config::Config;
use crate::datasources::OpenWeatherMapClient;
use crate::error::Result;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct DataSyncService {
    client: OpenWeatherMapClient,
    engine: RulesEngine,
    snapshots: Arc<RwLock<HashMap<String, CitySnapshot>>>,
}

impl DataSyncService {
    pub fn new(config: &Config) -> Result<Self> {
        let client = OpenWeatherMapClient::new(config.openweathermap.clone())?;
        tracing::info!(
            base_url = %config.openweathermap.base_url,
            cities = config.cities.len(),
            "OpenWeatherMap client configured"
        );

        Ok(Self {
            client,
            engine: RulesEngine::new(),
            snapshots: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Fetch one city and derive its snapshot.
    pub async fn fetch_snapshot(&self, city: &str) -> Result<CitySnapshot> {
        let (conditions, pollution) = self.client.fetch_city(city).await?;
        let snapshot = CitySnapshot::build(conditions, pollution, &self.engine, Utc::now())?;
        self.store(city, snapshot.clone()).await;
        Ok(snapshot)
    }

    async fn store(&self, city: &str, snapshot: CitySnapshot) {
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(city.to_string(), snapshot);
    }

    /// Refresh the primary city and, when set, the comparison city.
    ///
    /// A failure on the primary city is an error; a failure on the
    /// comparison city is logged and yields `None`.
    pub async fn refresh(
        &self,
        primary: &str,
        compare: Option<&str>,
    ) -> Result<(CitySnapshot, Option<CitySnapshot>)> {
        let primary_snapshot = self.fetch_snapshot(primary).await?;

        let compare_snapshot = match compare {
            Some(city) if city != primary => match self.fetch_snapshot(city).await {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    tracing::warn!(city, "Failed to fetch comparison city: {}", e);
                    None
                }
            },
            _ => None,
        };

        tracing::debug!(
            primary,
            aqi = primary_snapshot.aqi_value(),
            comfort = primary_snapshot.comfort_score,
            "City data refreshed"
        );

        Ok((primary_snapshot, compare_snapshot))
    }

    /// Last successful snapshots for a refresh pair.
    ///
    /// `None` unless the primary city has been fetched before.
    pub async fn last_good(
        &self,
        primary: &str,
        compare: Option<&str>,
    ) -> Option<(CitySnapshot, Option<CitySnapshot>)> {
        let snapshots = self.snapshots.read().await;
        let primary_snapshot = snapshots.get(primary)?.clone();
        let compare_snapshot = compare
            .filter(|city| *city != primary)
            .and_then(|city| snapshots.get(city).cloned());
        Some((primary_snapshot, compare_snapshot))
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    pub async fn check_connections(&self, city: &str) -> ConnectionStatus {
        let openweathermap = match self.client.test_connection(city).await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::warn!("OpenWeatherMap connection check failed: {}", e);
                false
            }
        };

        ConnectionStatus { openweathermap }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionStatus {
    pub openweathermap: bool,
}

impl ConnectionStatus {
    pub fn all_connected(&self) -> bool {
        self.openweathermap
    }

    pub fn describe(&self) -> String {
        if self.openweathermap {
            "OpenWeatherMap: OK".to_string()
        } else {
            "OpenWeatherMap: OFFLINE".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, CurrentConditions, PollutionReading, WeatherReading};

    fn service() -> DataSyncService {
        DataSyncService::new(&Config::with_api_key("test_key")).unwrap()
    }

    fn snapshot(city: &str) -> CitySnapshot {
        let conditions = CurrentConditions {
            city: city.to_string(),
            country: None,
            coordinates: Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            },
            reading: WeatherReading::new(24.0, 55.0, 3.0),
            pressure_hpa: 1010.0,
            visibility_km: 10.0,
            condition: "Clear Sky".to_string(),
            icon_code: "01d".to_string(),
            sunrise: None,
            sunset: None,
        };
        CitySnapshot::build(
            conditions,
            PollutionReading::new(8.0),
            &RulesEngine::new(),
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn cache_starts_empty() {
        let service = service();
        assert!(service.last_good("Delhi", None).await.is_none());
        assert_eq!(service.engine().list_rules().len(), 5);
    }

    #[tokio::test]
    async fn last_good_returns_stored_pair() {
        let service = service();
        service.store("Delhi", snapshot("Delhi")).await;
        service.store("Mumbai", snapshot("Mumbai")).await;

        let (primary, compare) = service.last_good("Delhi", Some("Mumbai")).await.unwrap();
        assert_eq!(primary.city(), "Delhi");
        assert_eq!(compare.unwrap().city(), "Mumbai");

        // compare never fetched
        let (_, compare) = service.last_good("Delhi", Some("Pune")).await.unwrap();
        assert!(compare.is_none());

        // primary never fetched
        assert!(service.last_good("Pune", Some("Delhi")).await.is_none());
    }

    #[test]
    fn connection_status_description() {
        let offline = ConnectionStatus::default();
        assert!(!offline.all_connected());
        assert_eq!(offline.describe(), "OpenWeatherMap: OFFLINE");

        let online = ConnectionStatus {
            openweathermap: true,
        };
        assert_eq!(online.describe(), "OpenWeatherMap: OK");
    }
}
