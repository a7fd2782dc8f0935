use std::env::args;
use std::path::{Path, PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};

/// True if `directory` looks like cargo's `./target/debug` output directory
/// of a project (its grandparent carries a `Cargo.toml`).
fn is_cargo_debug_output_directory(directory: &Path) -> bool {
    let is_debug = directory
        .file_name()
        .map(|name| name.eq("debug"))
        .unwrap_or(false);
    if !is_debug {
        return false;
    }

    let Some(target_directory) = directory.parent() else {
        return false;
    };
    let is_target = target_directory
        .file_name()
        .map(|name| name.eq("target"))
        .unwrap_or(false);
    if !is_target {
        return false;
    }

    match target_directory.parent() {
        Some(project_directory) => {
            project_directory.join("Cargo.toml").exists()
        }
        None => false,
    }
}

/// The directory the running executable resides in, derived from the first
/// command line argument.
///
/// Contains one development escape hatch: when running from cargo's
/// `./target/debug` directory of a project, the project root is returned
/// instead, so the default configuration in `./data` stays reachable.
pub fn get_running_executable_directory() -> Result<PathBuf> {
    let executable_path = args()
        .next()
        .ok_or_else(|| miette!("Could not get first commandline argument!"))?;

    let executable_directory = dunce::canonicalize(executable_path)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!("Could not canonicalize running executable path.")
        })?
        .parent()
        .ok_or_else(|| miette!("Could not get executable's directory."))?
        .to_path_buf();

    if is_cargo_debug_output_directory(&executable_directory) {
        // parent() cannot fail here, is_cargo_debug_output_directory
        // already walked two levels up.
        let project_directory = executable_directory
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| miette!("Could not get project directory."))?;

        return Ok(project_directory.to_path_buf());
    }

    Ok(executable_directory)
}

/// Returns the default configuration filepath: `./data/configuration.toml`
/// relative to the executable (see [`get_running_executable_directory`] for
/// the cargo development escape).
pub fn get_default_configuration_file_path() -> Result<String> {
    let mut configuration_filepath = get_running_executable_directory()
        .wrap_err_with(|| miette!("Could not get the executable directory."))?;
    configuration_filepath.push("./data/configuration.toml");

    if !configuration_filepath.exists() {
        return Err(miette!(
            "Could not find configuration.toml in data directory."
        ));
    }

    let configuration_filepath = dunce::canonicalize(configuration_filepath)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!("Could not canonicalize the configuration.toml file path.")
        })?;

    Ok(configuration_filepath.to_string_lossy().to_string())
}
