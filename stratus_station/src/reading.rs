use std::fmt;

use serde::Deserialize;

/// A snapshot of all three station readings, taken after a write.
///
/// This is the event value observers receive: they never see the station
/// itself, only the state it had at the moment of notification.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeatherReading {
    pub humidity: f64,
    pub temperature: f64,
    pub pressure: f64,
}

/// Names one of the station's three readings.
#[derive(Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ReadingKind {
    Humidity,
    Temperature,
    Pressure,
}

impl fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingKind::Humidity => write!(f, "humidity"),
            ReadingKind::Temperature => write!(f, "temperature"),
            ReadingKind::Pressure => write!(f, "pressure"),
        }
    }
}
