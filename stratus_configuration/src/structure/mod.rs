//! Module containing the entire configuration structure for
//! the main stratus configuration.

pub mod logging;
pub mod simulation;
pub mod ui;

use std::fs;
use std::path::PathBuf;

use miette::{miette, Context, Result};
use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::logging::{LoggingConfiguration, UnresolvedLoggingConfiguration};
use crate::simulation::{
    SimulationConfiguration,
    UnresolvedSimulationConfiguration,
};
use crate::traits::{
    ResolvableConfiguration,
    ResolvableWithContextConfiguration,
};
use crate::ui::{UiConfiguration, UnresolvedUiConfiguration};
use crate::utilities::get_default_configuration_file_path;

/// This struct contains the entire `stratus` configuration,
/// from console preferences to the scripted simulation steps.
#[derive(Clone)]
pub struct Configuration {
    pub ui: UiConfiguration,

    pub logging: LoggingConfiguration,

    pub simulation: SimulationConfiguration,

    pub configuration_file_path: PathBuf,
}

#[derive(Deserialize, Clone)]
struct UnresolvedConfiguration {
    ui: UnresolvedUiConfiguration,

    logging: UnresolvedLoggingConfiguration,

    simulation: UnresolvedSimulationConfiguration,
}

impl Configuration {
    pub fn load_from_path<S: Into<PathBuf>>(
        configuration_filepath: S,
    ) -> Result<Configuration> {
        let configuration_filepath = configuration_filepath.into();

        // Read the configuration file into memory.
        let configuration_string = fs::read_to_string(&configuration_filepath)
            .map_err(|error| ConfigurationError::FileLoadError {
                file_path: configuration_filepath.clone(),
                error,
            })?;

        // Parse the string into the unresolved configuration structure,
        // then resolve (and validate) it.
        let unresolved_configuration: UnresolvedConfiguration =
            toml::from_str(&configuration_string).map_err(|error| {
                ConfigurationError::FileFormatError {
                    file_path: configuration_filepath.clone(),
                    error: Box::new(error),
                }
            })?;

        let resolved_configuration =
            unresolved_configuration.resolve(configuration_filepath)?;

        Ok(resolved_configuration)
    }

    pub fn load_default_path() -> Result<Configuration> {
        Configuration::load_from_path(
            get_default_configuration_file_path().wrap_err_with(|| {
                miette!("Could not get default configuration file path.")
            })?,
        )
    }
}

impl ResolvableWithContextConfiguration for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = PathBuf;

    fn resolve(
        self,
        configuration_file_path: PathBuf,
    ) -> Result<Self::Resolved> {
        let ui = self.ui.resolve()?;
        let logging = self.logging.resolve()?;
        let simulation = self.simulation.resolve()?;

        Ok(Configuration {
            ui,
            logging,
            simulation,
            configuration_file_path,
        })
    }
}
