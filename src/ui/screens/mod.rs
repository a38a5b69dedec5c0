pub mod air_quality;
pub mod comparison;
pub mod dashboard;
pub mod recommendations;
pub mod trends;

pub use air_quality::AirQualityScreen;
pub use comparison::ComparisonScreen;
pub use dashboard::DashboardScreen;
pub use recommendations::RecommendationsScreen;
pub use trends::TrendsScreen;
