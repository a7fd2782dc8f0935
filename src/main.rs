use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::{miette, Context, Result};
use stratus_configuration::Configuration;

use crate::console_backends::{
    BareConsoleBackend,
    LogToFileBackend,
    TerminalBackend,
};
use crate::globals::VERBOSE;

mod commands;
mod console;
mod console_backends;
mod globals;

pub const STRATUS_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Subcommand)]
enum CLICommand {
    #[command(
        name = "run",
        visible_aliases(["simulate"]),
        about = "Run the scripted weather-station simulation: one station, \
                 the configured number of display devices, and the steps \
                 from the configuration file."
    )]
    Run(RunArgs),

    #[command(
        name = "show-config",
        about = "Loads, validates and prints the current configuration."
    )]
    ShowConfig,
}

#[derive(Args)]
struct RunArgs {
    #[arg(
        long = "random",
        value_name = "STEPS",
        help = "Replace the scripted readings with the given number of \
                randomly generated ones (each device is shown once at the \
                end). Useful for eyeballing the observers with fresh data."
    )]
    random: Option<usize>,

    #[arg(
        long = "log-to-file",
        help = "Path to the log file. If this is unset, no logs are saved."
    )]
    log_to_file: Option<PathBuf>,
}

#[derive(Parser)]
#[command(
    name = "stratus",
    about = "An observable weather-station demonstrator.",
    long_about = "Stratus wires a simulated weather station to a set of \
                  display devices. Each device observes the station's \
                  readings (humidity, temperature, pressure) and derives \
                  running statistics, a current-conditions composite and a \
                  coarse rain forecast, which it renders on demand. The \
                  sequence of readings is scripted in the configuration \
                  file.",
    version
)]
struct CLIArgs {
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        help = "Optionally a path to your configuration file. Without this \
                option, stratus tries to load ./data/configuration.toml \
                (relative to the binary), but understandably this might not \
                always be the most convenient location."
    )]
    config: Option<String>,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Increase the verbosity of output."
    )]
    verbose: bool,

    #[command(subcommand)]
    command: CLICommand,
}

/// Load and return the configuration, given the command line arguments
/// (`-c`/`--config` can override the load path).
fn get_configuration(args: &CLIArgs) -> Result<Configuration> {
    match &args.config {
        Some(path) => Configuration::load_from_path(path.clone()),
        None => Configuration::load_default_path(),
    }
}

/// Initializes the required terminal backend and executes the given CLI command.
fn run_requested_cli_command(
    args: CLIArgs,
    config: &Configuration,
) -> Result<()> {
    match args.command {
        CLICommand::Run(run_args) => {
            let mut terminal = BareConsoleBackend::new();

            if let Some(log_file_path) = run_args
                .log_to_file
                .or_else(|| config.logging.default_log_output_path.clone())
            {
                terminal
                    .enable_saving_logs_to_file(log_file_path)
                    .wrap_err_with(|| {
                        miette!("Failed to enable logging to disk.")
                    })?;
            }

            terminal.setup().wrap_err_with(|| {
                miette!("Failed to set up terminal backend.")
            })?;

            commands::cmd_run_simulation(config, &mut terminal, run_args.random);

            terminal.destroy().wrap_err_with(|| {
                miette!("Failed to destroy terminal backend.")
            })?;

            Ok(())
        }
        CLICommand::ShowConfig => {
            commands::cmd_show_config(config);

            Ok(())
        }
    }
}

/// Entry function for `stratus`.
///
/// Parses CLI arguments, loads the configuration file and starts executing the requested command.
fn main() -> Result<()> {
    let args = CLIArgs::parse();
    VERBOSE.set(args.verbose);

    let configuration = get_configuration(&args)
        .wrap_err_with(|| miette!("Could not load configuration."))?;

    run_requested_cli_command(args, &configuration)
}
