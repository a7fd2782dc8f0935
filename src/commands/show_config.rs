use lazy_static::lazy_static;
use owo_colors::Style;
use stratus_configuration::simulation::SimulationStep;
use stratus_configuration::Configuration;

use crate::console as c;

lazy_static! {
    static ref HEADER_STYLE: Style = Style::new().cyan().bold();
    static ref SUBHEADER_STYLE: Style = Style::new().cyan().italic();
}

pub fn cmd_show_config(config: &Configuration) {
    let width = Some(config.ui.line_width);

    let (header_style, subheader_style, line_style) = if config.ui.use_colours
    {
        (Some(*HEADER_STYLE), Some(*SUBHEADER_STYLE), None)
    } else {
        let plain = Style::new();
        (Some(plain), Some(plain), Some(plain))
    };

    c::horizontal_line(width, line_style);
    c::horizontal_line_with_text(
        "Configuration",
        header_style,
        width,
        line_style,
    );
    c::horizontal_line(width, line_style);
    c::new_line();

    println!(
        "  loaded from = {}",
        config.configuration_file_path.display(),
    );
    c::new_line();

    // Ui
    c::horizontal_line_with_text("ui", subheader_style, width, line_style);
    println!("  line_width = {}", config.ui.line_width);
    println!("  use_colours = {}", config.ui.use_colours);
    c::new_line();

    // Logging
    c::horizontal_line_with_text(
        "logging",
        subheader_style,
        width,
        line_style,
    );
    match &config.logging.default_log_output_path {
        Some(path) => {
            println!("  default_log_output_path = {}", path.display())
        }
        None => println!("  default_log_output_path = (unset)"),
    }
    c::new_line();

    // Simulation
    c::horizontal_line_with_text(
        "simulation",
        subheader_style,
        width,
        line_style,
    );
    println!("  device_count = {}", config.simulation.device_count);
    println!(
        "There are {} scripted steps:",
        config.simulation.steps.len(),
    );

    for step in &config.simulation.steps {
        match step {
            SimulationStep::Set { reading, value } => {
                println!("  set {reading} = {value}")
            }
            SimulationStep::Detach { device } => {
                println!("  detach device {device}")
            }
            SimulationStep::Attach { device } => {
                println!("  attach device {device}")
            }
            SimulationStep::Show { device } => {
                println!("  show device {device}")
            }
        }
    }
    c::new_line();
}
