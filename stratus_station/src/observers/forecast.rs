use std::cell::Cell;
use std::fmt;

use crate::observer::Observer;
use crate::reading::WeatherReading;

/// The two possible forecast outcomes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Forecast {
    Rain,
    Clear,
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Forecast::Rain => write!(f, "Lluvia"),
            Forecast::Clear => write!(f, "Libre"),
        }
    }
}

/// Applies the coarse rain rule on each notification: high humidity together
/// with above-unity pressure means rain, anything else means clear skies.
/// The rule is memoryless, every notification recomputes it from scratch.
#[derive(Default)]
pub struct ForecastObserver {
    forecast: Cell<Option<Forecast>>,
}

impl ForecastObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The outcome of the most recent notification,
    /// or `None` if none has arrived yet.
    pub fn forecast(&self) -> Option<Forecast> {
        self.forecast.get()
    }
}

impl Observer<WeatherReading> for ForecastObserver {
    fn emit(&self, reading: WeatherReading) {
        let forecast = if reading.humidity > 0.95 && reading.pressure > 1.0 {
            Forecast::Rain
        } else {
            Forecast::Clear
        };

        self.forecast.set(Some(forecast));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast_for(humidity: f64, pressure: f64) -> Forecast {
        let observer = ForecastObserver::new();
        observer.emit(WeatherReading {
            humidity,
            temperature: 0.0,
            pressure,
        });

        observer.forecast().unwrap()
    }

    #[test]
    fn no_forecast_before_the_first_notification() {
        let observer = ForecastObserver::new();
        assert_eq!(observer.forecast(), None);
    }

    #[test]
    fn low_humidity_means_clear() {
        assert_eq!(forecast_for(0.90, 2.0), Forecast::Clear);
    }

    #[test]
    fn high_humidity_and_high_pressure_mean_rain() {
        assert_eq!(forecast_for(0.99, 2.0), Forecast::Rain);
    }

    #[test]
    fn high_humidity_with_low_pressure_means_clear() {
        assert_eq!(forecast_for(0.99, 0.5), Forecast::Clear);
    }

    #[test]
    fn pressure_must_be_strictly_above_one() {
        assert_eq!(forecast_for(0.96, 1.0), Forecast::Clear);
    }

    #[test]
    fn forecast_renders_the_reference_strings() {
        assert_eq!(Forecast::Rain.to_string(), "Lluvia");
        assert_eq!(Forecast::Clear.to_string(), "Libre");
    }
}
