pub mod aqi;
pub mod calculations;
pub mod comparison;
pub mod data_sync;
pub mod rules;
pub mod snapshot;
pub mod trends;

pub use aqi::{classify, convert_pm25, pm25_to_aqi, AqiCategory, AqiConversion, AqiResultKind};
pub use calculations::{comfort_score, feels_like, ComfortBreakdown, FeelsLikeRegime};
pub use comparison::CityComparison;
pub use data_sync::{ConnectionStatus, DataSyncService};
pub use rules::{recommend, RulesEngine};
pub use snapshot::{CitySnapshot, PollutantBar};
pub use trends::build_trends;
