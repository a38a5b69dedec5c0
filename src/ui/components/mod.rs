pub mod bars;
pub mod gauge;
pub mod status;

pub use bars::{BarEntry, BarListWidget};
pub use gauge::{aqi_gauge, humidity_gauge, temperature_gauge, visibility_gauge, wind_gauge};
pub use status::StatusBar;
