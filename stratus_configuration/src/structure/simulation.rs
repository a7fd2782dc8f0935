use serde::Deserialize;
use stratus_station::ReadingKind;

use crate::error::ConfigurationError;
use crate::traits::ResolvableConfiguration;

#[derive(Clone, Debug)]
pub struct SimulationConfiguration {
    /// How many display devices to create and attach to the station
    /// before the first step runs. Always at least one.
    pub device_count: usize,

    /// The scripted steps, executed in file order.
    pub steps: Vec<SimulationStep>,
}

/// One scripted action of the demonstration, tagged by `action` in TOML.
/// Device indices are 1-based, as written in the configuration file.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum SimulationStep {
    /// Store a new value for one reading on the station (and thereby
    /// notify every attached observer).
    Set { reading: ReadingKind, value: f64 },

    /// Unregister the device's observers from the station.
    Detach { device: usize },

    /// (Re)register the device's observers with the station.
    Attach { device: usize },

    /// Render the device's current report.
    Show { device: usize },
}

impl SimulationStep {
    fn device_reference(&self) -> Option<usize> {
        match self {
            SimulationStep::Set { .. } => None,
            SimulationStep::Detach { device }
            | SimulationStep::Attach { device }
            | SimulationStep::Show { device } => Some(*device),
        }
    }
}

#[derive(Deserialize, Clone)]
pub(crate) struct UnresolvedSimulationConfiguration {
    device_count: usize,
    steps: Vec<SimulationStep>,
}

impl ResolvableConfiguration for UnresolvedSimulationConfiguration {
    type Resolved = SimulationConfiguration;

    fn resolve(self) -> miette::Result<Self::Resolved> {
        if self.device_count == 0 {
            return Err(ConfigurationError::InvalidDeviceCount {
                device_count: self.device_count,
            }
            .into());
        }

        for (step_index, step) in self.steps.iter().enumerate() {
            if let Some(device) = step.device_reference() {
                if device == 0 || device > self.device_count {
                    return Err(ConfigurationError::InvalidDeviceIndex {
                        step_index: step_index + 1,
                        device,
                        device_count: self.device_count,
                    }
                    .into());
                }
            }
        }

        Ok(SimulationConfiguration {
            device_count: self.device_count,
            steps: self.steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(document: &str) -> UnresolvedSimulationConfiguration {
        toml::from_str(document).unwrap()
    }

    #[test]
    fn parses_the_reference_script() {
        let unresolved = parse(
            r#"
            device_count = 2

            [[steps]]
            action = "set"
            reading = "humidity"
            value = 0.90

            [[steps]]
            action = "detach"
            device = 1

            [[steps]]
            action = "show"
            device = 2
            "#,
        );

        let simulation = unresolved.resolve().unwrap();

        assert_eq!(simulation.device_count, 2);
        assert_eq!(
            simulation.steps,
            vec![
                SimulationStep::Set {
                    reading: ReadingKind::Humidity,
                    value: 0.90,
                },
                SimulationStep::Detach { device: 1 },
                SimulationStep::Show { device: 2 },
            ],
        );
    }

    #[test]
    fn rejects_a_device_index_past_the_device_count() {
        let unresolved = parse(
            r#"
            device_count = 1

            [[steps]]
            action = "show"
            device = 2
            "#,
        );

        let error = unresolved.resolve().unwrap_err();
        assert!(error.to_string().contains("device 2"));
    }

    #[test]
    fn rejects_a_zero_device_index() {
        let unresolved = parse(
            r#"
            device_count = 3

            [[steps]]
            action = "attach"
            device = 0
            "#,
        );

        assert!(unresolved.resolve().is_err());
    }

    #[test]
    fn rejects_zero_devices() {
        let unresolved = parse("device_count = 0\nsteps = []");
        assert!(unresolved.resolve().is_err());
    }
}
