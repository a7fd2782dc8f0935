//! The three concrete observers: each one derives a single display value
//! from the latest [`WeatherReading`][crate::WeatherReading] it was handed.

pub use current::CurrentConditionsObserver;
pub use forecast::{Forecast, ForecastObserver};
pub use statistics::StatisticsObserver;

mod current;
mod forecast;
mod statistics;
