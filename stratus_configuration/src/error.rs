use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigurationError {
    #[error("Failed to load configuration file {file_path:?}.")]
    FileLoadError {
        file_path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error(
        "Failed to parse configuration file \
        {file_path:?} as TOML: {error}."
    )]
    FileFormatError {
        file_path: PathBuf,
        error: Box<toml::de::Error>,
    },

    #[error(
        "Invalid simulation.device_count: {device_count} \
        (at least one display device is required)."
    )]
    InvalidDeviceCount { device_count: usize },

    #[error(
        "Simulation step {step_index} references device {device}, \
        but only devices 1 to {device_count} exist."
    )]
    InvalidDeviceIndex {
        step_index: usize,
        device: usize,
        device_count: usize,
    },
}
