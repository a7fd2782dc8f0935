use std::rc::Rc;

use crate::observer::{Observable, Observer};
use crate::reading::{ReadingKind, WeatherReading};

/// The concrete subject: holds the three environmental readings and fans a
/// fresh [`WeatherReading`] snapshot out to its observers after every write.
///
/// Every setter notifies unconditionally, even when the new value equals the
/// old one. Observers are notified in registration order.
pub struct WeatherStation {
    humidity: f64,
    temperature: f64,
    pressure: f64,
    observers: Vec<Rc<dyn Observer<WeatherReading>>>,
}

impl WeatherStation {
    /// Creates a station with all readings at zero and no observers.
    pub fn new() -> Self {
        Self {
            humidity: 0.0,
            temperature: 0.0,
            pressure: 0.0,
            observers: Vec::new(),
        }
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// The current state of all three readings.
    pub fn reading(&self) -> WeatherReading {
        WeatherReading {
            humidity: self.humidity,
            temperature: self.temperature,
            pressure: self.pressure,
        }
    }

    pub fn set_humidity(&mut self, humidity: f64) {
        self.humidity = humidity;
        self.notify_observers(self.reading());
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
        self.notify_observers(self.reading());
    }

    pub fn set_pressure(&mut self, pressure: f64) {
        self.pressure = pressure;
        self.notify_observers(self.reading());
    }

    /// Sets the reading selected by `kind`, then notifies, exactly like the
    /// corresponding dedicated setter.
    pub fn set_reading(&mut self, kind: ReadingKind, value: f64) {
        match kind {
            ReadingKind::Humidity => self.set_humidity(value),
            ReadingKind::Temperature => self.set_temperature(value),
            ReadingKind::Pressure => self.set_pressure(value),
        }
    }
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new()
    }
}

impl Observable<WeatherReading> for WeatherStation {
    fn register_observer(&mut self, observer: Rc<dyn Observer<WeatherReading>>) {
        self.observers.push(observer);
    }

    fn remove_observer(&mut self, observer: &Rc<dyn Observer<WeatherReading>>) {
        self.observers
            .retain(|registered| !Rc::ptr_eq(registered, observer));
    }

    fn notify_observers(&self, event: WeatherReading) {
        for observer in &self.observers {
            observer.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Counts how many notifications it has received.
    struct CountingObserver {
        notifications: Cell<usize>,
    }

    impl CountingObserver {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                notifications: Cell::new(0),
            })
        }
    }

    impl Observer<WeatherReading> for CountingObserver {
        fn emit(&self, _event: WeatherReading) {
            self.notifications.set(self.notifications.get() + 1);
        }
    }

    /// Remembers the last snapshot it was handed.
    struct LastReadingObserver {
        last: Cell<Option<WeatherReading>>,
    }

    impl LastReadingObserver {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                last: Cell::new(None),
            })
        }
    }

    impl Observer<WeatherReading> for LastReadingObserver {
        fn emit(&self, event: WeatherReading) {
            self.last.set(Some(event));
        }
    }

    #[test]
    fn every_registered_observer_is_notified_once_per_event() {
        let mut station = WeatherStation::new();

        let observers: Vec<Rc<CountingObserver>> =
            (0..3).map(|_| CountingObserver::new()).collect();
        for observer in &observers {
            station.register_observer(observer.clone());
        }

        station.set_humidity(0.42);

        for observer in &observers {
            assert_eq!(observer.notifications.get(), 1);
        }
    }

    #[test]
    fn duplicate_registration_is_notified_once_per_registration() {
        let mut station = WeatherStation::new();

        let observer = CountingObserver::new();
        station.register_observer(observer.clone());
        station.register_observer(observer.clone());

        station.set_pressure(1.0);

        assert_eq!(observer.notifications.get(), 2);
    }

    #[test]
    fn removal_removes_every_occurrence() {
        let mut station = WeatherStation::new();

        let removed = CountingObserver::new();
        let kept = CountingObserver::new();

        let removed_handle: Rc<dyn Observer<WeatherReading>> = removed.clone();
        station.register_observer(Rc::clone(&removed_handle));
        station.register_observer(kept.clone());
        station.register_observer(Rc::clone(&removed_handle));

        station.remove_observer(&removed_handle);
        station.set_temperature(21.0);

        assert_eq!(removed.notifications.get(), 0);
        assert_eq!(kept.notifications.get(), 1);
    }

    #[test]
    fn removing_an_unregistered_observer_is_a_no_op() {
        let mut station = WeatherStation::new();

        let registered = CountingObserver::new();
        let stranger: Rc<dyn Observer<WeatherReading>> = CountingObserver::new();

        station.register_observer(registered.clone());
        station.remove_observer(&stranger);

        station.set_humidity(0.5);
        assert_eq!(registered.notifications.get(), 1);
    }

    #[test]
    fn notifying_with_no_observers_does_nothing() {
        let mut station = WeatherStation::new();
        station.set_humidity(0.1);
        assert_eq!(station.humidity(), 0.1);
    }

    #[test]
    fn observers_see_the_post_write_state() {
        let mut station = WeatherStation::new();

        let observer = LastReadingObserver::new();
        station.register_observer(observer.clone());

        station.set_humidity(0.8);
        station.set_pressure(1.5);

        let last = observer.last.get().unwrap();
        assert_eq!(last.humidity, 0.8);
        assert_eq!(last.pressure, 1.5);
        assert_eq!(last.temperature, 0.0);
    }

    #[test]
    fn set_reading_dispatches_to_the_matching_setter() {
        let mut station = WeatherStation::new();

        station.set_reading(ReadingKind::Humidity, 0.7);
        station.set_reading(ReadingKind::Temperature, 19.0);
        station.set_reading(ReadingKind::Pressure, 1.2);

        assert_eq!(station.humidity(), 0.7);
        assert_eq!(station.temperature(), 19.0);
        assert_eq!(station.pressure(), 1.2);
    }
}
