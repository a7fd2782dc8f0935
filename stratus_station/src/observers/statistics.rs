use std::cell::RefCell;

use crate::observer::Observer;
use crate::reading::WeatherReading;

/// Keeps a formatted snapshot of all three readings, one per line, taken at
/// the most recent notification. Empty until the first notification arrives.
#[derive(Default)]
pub struct StatisticsObserver {
    statistics: RefCell<String>,
}

impl StatisticsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statistics(&self) -> String {
        self.statistics.borrow().clone()
    }
}

impl Observer<WeatherReading> for StatisticsObserver {
    fn emit(&self, reading: WeatherReading) {
        *self.statistics.borrow_mut() = format!(
            "Hum:{}\nTemp:{}\nPres:{}",
            reading.humidity, reading.temperature, reading.pressure
        );
    }
}
