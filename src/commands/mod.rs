mod run;
mod show_config;

pub use run::cmd_run_simulation;
pub use show_config::cmd_show_config;
