use chrono::NaiveDate;
use serde::Serialize;

/// One simulated day of the 7-day outlook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOutlook {
    pub date: NaiveDate,
    /// Short label such as "Mon 07"
    pub label: String,
    pub high_c: f64,
    pub low_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyPoint {
    pub hour: u32,
    pub value: f64,
}

impl HourlyPoint {
    pub fn label(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

/// Suggested two-hour window to go outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestTimeWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub peak_score: f64,
}

impl std::fmt::Display for BestTimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00 - {:02}:00", self.start_hour, self.end_hour)
    }
}

/// All cosmetic series shown on the trends and air quality screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSet {
    pub outlook: Vec<DailyOutlook>,
    pub hourly_temperature: Vec<HourlyPoint>,
    pub aqi_trend: Vec<HourlyPoint>,
    pub comfort_by_hour: Vec<HourlyPoint>,
    pub best_time: Option<BestTimeWindow>,
}
