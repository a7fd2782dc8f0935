use std::fmt;
use std::rc::Rc;

use crate::observer::Observer;
use crate::observers::{
    CurrentConditionsObserver,
    ForecastObserver,
    StatisticsObserver,
};
use crate::reading::WeatherReading;

/// Aggregates one observer of each kind and renders their derived state on
/// demand.
///
/// The device owns its three observers for its whole lifetime; they are
/// created once, in [`DisplayDevice::new`], and never replaced. Everything
/// handed out by [`observer_list`][DisplayDevice::observer_list] is an alias
/// of those same instances.
pub struct DisplayDevice {
    statistics: Rc<StatisticsObserver>,
    current: Rc<CurrentConditionsObserver>,
    forecast: Rc<ForecastObserver>,
}

impl DisplayDevice {
    pub fn new() -> Self {
        Self {
            statistics: Rc::new(StatisticsObserver::new()),
            current: Rc::new(CurrentConditionsObserver::new()),
            forecast: Rc::new(ForecastObserver::new()),
        }
    }

    /// The device's three observers, in fixed order: statistics, current
    /// conditions, forecast.
    ///
    /// Every call aliases the same three underlying instances, so a list
    /// obtained earlier and registered with a station can later be removed
    /// through a list obtained from a fresh call.
    pub fn observer_list(&self) -> Vec<Rc<dyn Observer<WeatherReading>>> {
        vec![
            Rc::clone(&self.statistics) as Rc<dyn Observer<WeatherReading>>,
            Rc::clone(&self.current) as Rc<dyn Observer<WeatherReading>>,
            Rc::clone(&self.forecast) as Rc<dyn Observer<WeatherReading>>,
        ]
    }

    /// Collects the observers' current derived values into a report.
    pub fn report(&self) -> DisplayReport {
        DisplayReport {
            statistics: self.statistics.statistics(),
            current: self.current.current(),
            forecast: self
                .forecast
                .forecast()
                .map(|forecast| forecast.to_string())
                .unwrap_or_default(),
        }
    }
}

impl Default for DisplayDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// The three derived strings of a [`DisplayDevice`] at one point in time.
///
/// Rendering through `Display` produces the three labelled sections; the
/// caller decides where that text goes.
pub struct DisplayReport {
    pub statistics: String,
    pub current: String,
    pub forecast: String,
}

impl fmt::Display for DisplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STATISTICS:")?;
        writeln!(f, "{}", self.statistics)?;
        writeln!(f, "CURRENT:")?;
        writeln!(f, "{}", self.current)?;
        writeln!(f, "FORECAST:")?;
        write!(f, "{}", self.forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_list_has_the_three_kinds_in_fixed_order() {
        let device = DisplayDevice::new();
        let list = device.observer_list();

        assert_eq!(list.len(), 3);
        assert!(Rc::ptr_eq(
            &list[0],
            &(Rc::clone(&device.statistics) as Rc<dyn Observer<WeatherReading>>),
        ));
        assert!(Rc::ptr_eq(
            &list[1],
            &(Rc::clone(&device.current) as Rc<dyn Observer<WeatherReading>>),
        ));
        assert!(Rc::ptr_eq(
            &list[2],
            &(Rc::clone(&device.forecast) as Rc<dyn Observer<WeatherReading>>),
        ));
    }

    #[test]
    fn observer_list_aliases_the_same_instances_across_calls() {
        let device = DisplayDevice::new();

        let first = device.observer_list();
        let second = device.observer_list();

        for (a, b) in first.iter().zip(second.iter()) {
            assert!(Rc::ptr_eq(a, b));
        }
    }

    #[test]
    fn report_is_blank_before_any_notification() {
        let device = DisplayDevice::new();
        let report = device.report();

        assert_eq!(report.statistics, "");
        assert_eq!(report.current, "");
        assert_eq!(report.forecast, "");
    }

    #[test]
    fn report_renders_the_three_labelled_sections_in_order() {
        let device = DisplayDevice::new();
        for observer in device.observer_list() {
            observer.emit(WeatherReading {
                humidity: 0.99,
                temperature: 10.0,
                pressure: 2.0,
            });
        }

        let rendered = device.report().to_string();

        let statistics_at = rendered.find("STATISTICS:").unwrap();
        let current_at = rendered.find("CURRENT:").unwrap();
        let forecast_at = rendered.find("FORECAST:").unwrap();

        assert!(statistics_at < current_at);
        assert!(current_at < forecast_at);
        assert!(rendered.ends_with("Lluvia"));
    }
}
