pub mod color;
pub mod recommendation;
pub mod trend;
pub mod weather;

pub use color::*;
pub use recommendation::*;
pub use trend::*;
pub use weather::*;
