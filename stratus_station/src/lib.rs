//! Core of the `stratus` weather-station demonstrator: the observable
//! station, the observers that derive display values from its readings and
//! the display device that aggregates them.

pub use display::*;
pub use observer::*;
pub use observers::*;
pub use reading::*;
pub use station::*;

mod display;
mod observer;
mod observers;
mod reading;
mod station;
