use std::cell::RefCell;

use crate::observer::Observer;
use crate::reading::WeatherReading;

/// Derives the "current conditions" composite, a pressure-dominated weighted
/// sum of the three readings, and keeps its textual rendering.
#[derive(Default)]
pub struct CurrentConditionsObserver {
    current: RefCell<String>,
}

impl CurrentConditionsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }
}

impl Observer<WeatherReading> for CurrentConditionsObserver {
    fn emit(&self, reading: WeatherReading) {
        let composite = reading.pressure * 0.8
            + reading.humidity * 0.1
            + reading.temperature * 0.1;

        *self.current.borrow_mut() = composite.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_empty_before_the_first_notification() {
        let observer = CurrentConditionsObserver::new();
        assert_eq!(observer.current(), "");
    }

    #[test]
    fn composite_weighs_pressure_eight_to_one() {
        let reading = WeatherReading {
            humidity: 0.90,
            temperature: 10.0,
            pressure: 2.0,
        };

        let observer = CurrentConditionsObserver::new();
        observer.emit(reading);

        let expected = reading.pressure * 0.8
            + reading.humidity * 0.1
            + reading.temperature * 0.1;
        let stored: f64 = observer.current().parse().unwrap();

        assert!((stored - expected).abs() < 1e-9);
    }

    #[test]
    fn each_notification_recomputes_from_scratch() {
        let observer = CurrentConditionsObserver::new();
        observer.emit(WeatherReading {
            humidity: 0.0,
            temperature: 0.0,
            pressure: 1.0,
        });
        observer.emit(WeatherReading {
            humidity: 0.0,
            temperature: 0.0,
            pressure: 0.0,
        });

        assert_eq!(observer.current(), "0");
    }
}
