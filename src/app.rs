use crate::config::Config;
use crate::error::{Result, UrbanPulseError};
use crate::logic::{build_trends, CityComparison, CitySnapshot};
use crate::models::{Recommendation, TrendSet};
use chrono::{Local, NaiveDate};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Trends,
    AirQuality,
    Comparison,
    Recommendations,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Dashboard),
            '2' => Some(Screen::Trends),
            '3' => Some(Screen::AirQuality),
            '4' => Some(Screen::Comparison),
            '5' => Some(Screen::Recommendations),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Trends => "Trends",
            Screen::AirQuality => "Air Quality",
            Screen::Comparison => "Comparison",
            Screen::Recommendations => "Recommendations",
        }
    }
}

pub struct RecommendationsState {
    pub selected_index: usize,
}

impl RecommendationsState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,

    // City selection
    pub city_index: usize,
    pub compare_index: Option<usize>,

    // Data
    pub snapshot: Option<CitySnapshot>,
    pub compare_snapshot: Option<CitySnapshot>,
    pub trends: Option<TrendSet>,

    pub recommendations_state: RecommendationsState,

    // UI state
    pub status_message: Option<String>,
    pub refreshing: bool,
    pub needs_refresh: bool,
}

impl App {
    /// Resolve the starting cities from CLI overrides, then config.
    pub fn new(config: Config, city: Option<&str>, compare: Option<&str>) -> Result<Self> {
        let primary = city.unwrap_or_else(|| config.primary_city());
        let city_index = Self::index_of(&config, primary)?;

        let compare_index = match compare.or(config.compare_city.as_deref()) {
            Some(name) => {
                let idx = Self::index_of(&config, name)?;
                (idx != city_index).then_some(idx)
            }
            None => None,
        };

        Ok(Self {
            screen: Screen::Dashboard,
            should_quit: false,
            config,
            city_index,
            compare_index,
            snapshot: None,
            compare_snapshot: None,
            trends: None,
            recommendations_state: RecommendationsState::new(),
            status_message: None,
            refreshing: false,
            needs_refresh: true,
        })
    }

    fn index_of(config: &Config, city: &str) -> Result<usize> {
        config
            .cities
            .iter()
            .position(|c| c.eq_ignore_ascii_case(city))
            .ok_or_else(|| {
                UrbanPulseError::Config(format!(
                    "City '{}' is not in the configured list ({})",
                    city,
                    config.cities.join(", ")
                ))
            })
    }

    pub fn current_city(&self) -> &str {
        &self.config.cities[self.city_index]
    }

    pub fn compare_city(&self) -> Option<&str> {
        self.compare_index.map(|i| self.config.cities[i].as_str())
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
        self.set_status("Refreshing data...");
    }

    pub fn next_city(&mut self) {
        let count = self.config.cities.len();
        self.select_city((self.city_index + 1) % count);
    }

    pub fn prev_city(&mut self) {
        let count = self.config.cities.len();
        self.select_city((self.city_index + count - 1) % count);
    }

    fn select_city(&mut self, index: usize) {
        if index == self.city_index {
            return;
        }
        self.city_index = index;
        if self.compare_index == Some(index) {
            self.compare_index = None;
            self.compare_snapshot = None;
        }
        self.recommendations_state = RecommendationsState::new();
        self.request_refresh();
    }

    /// Cycle none -> each other city -> none.
    pub fn cycle_compare(&mut self) {
        let count = self.config.cities.len();
        let start = self.compare_index.map_or(0, |i| i + 1);
        self.compare_index = (start..count).find(|&i| i != self.city_index);
        self.compare_snapshot = None;
        if self.compare_index.is_some() {
            self.request_refresh();
        } else {
            self.set_status("Comparison cleared");
        }
    }

    /// Install freshly fetched snapshots and regenerate the simulated series.
    pub fn update_snapshots<R: Rng + ?Sized>(
        &mut self,
        primary: CitySnapshot,
        compare: Option<CitySnapshot>,
        today: NaiveDate,
        rng: &mut R,
    ) {
        let reading = primary.conditions.reading;
        self.trends = Some(build_trends(
            reading.temperature_c,
            primary.aqi_value(),
            primary.comfort_score,
            today,
            rng,
        ));
        self.snapshot = Some(primary);
        self.compare_snapshot = compare;

        let count = self.recommendations().len();
        if self.recommendations_state.selected_index >= count {
            self.recommendations_state.selected_index = count.saturating_sub(1);
        }
    }

    pub fn apply_refresh(&mut self, primary: CitySnapshot, compare: Option<CitySnapshot>) {
        let today = Local::now().date_naive();
        self.update_snapshots(primary, compare, today, &mut rand::rng());
    }

    /// Drop snapshots that belong to cities no longer selected.
    pub fn discard_stale(&mut self) {
        let current = self.current_city();
        if self
            .snapshot
            .as_ref()
            .is_some_and(|s| !s.city().eq_ignore_ascii_case(current))
        {
            self.snapshot = None;
            self.trends = None;
            self.recommendations_state = RecommendationsState::new();
        }

        let compare = self.compare_city();
        if self
            .compare_snapshot
            .as_ref()
            .is_some_and(|s| compare.is_none_or(|c| !s.city().eq_ignore_ascii_case(c)))
        {
            self.compare_snapshot = None;
        }
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        self.snapshot
            .as_ref()
            .map(|s| s.recommendations.as_slice())
            .unwrap_or(&[])
    }

    pub fn comparison(&self) -> Option<CityComparison> {
        match (&self.snapshot, &self.compare_snapshot) {
            (Some(a), Some(b)) => Some(CityComparison::new(a, b)),
            _ => None,
        }
    }
}
