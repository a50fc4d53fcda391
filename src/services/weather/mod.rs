pub mod http;
pub mod source;
pub mod types;

pub use http::HttpWeatherSource;
pub use source::{WeatherError, WeatherResult, WeatherSource, parse_record};
pub use types::WeatherRecord;
