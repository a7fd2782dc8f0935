use lazy_static::lazy_static;
use owo_colors::{OwoColorize, Style};
use rand::Rng;
use stratus_configuration::simulation::SimulationStep;
use stratus_configuration::Configuration;
use stratus_station::{
    DisplayDevice,
    Observable,
    ReadingKind,
    WeatherStation,
};

use crate::console_backends::LogBackend;
use crate::globals::is_verbose_enabled;

lazy_static! {
    static ref DEVICE_HEADER_STYLE: Style = Style::new().cyan().bold();
    static ref STEP_STYLE: Style = Style::new().bright_black();
}

fn maybe_styled(content: String, style: Style, use_colours: bool) -> String {
    if use_colours {
        content.style(style).to_string()
    } else {
        content
    }
}

/// Produces a random script: `step_count` reading writes in plausible
/// ranges, followed by one `show` per device.
fn generate_random_steps(
    step_count: usize,
    device_count: usize,
) -> Vec<SimulationStep> {
    let mut rng = rand::thread_rng();

    let mut steps = Vec::with_capacity(step_count + device_count);
    for _ in 0..step_count {
        let step = match rng.gen_range(0..3) {
            0 => SimulationStep::Set {
                reading: ReadingKind::Humidity,
                value: rng.gen_range(0.0..1.0),
            },
            1 => SimulationStep::Set {
                reading: ReadingKind::Temperature,
                value: rng.gen_range(-10.0..35.0),
            },
            _ => SimulationStep::Set {
                reading: ReadingKind::Pressure,
                value: rng.gen_range(0.5..2.0),
            },
        };

        steps.push(step);
    }

    for device in 1..=device_count {
        steps.push(SimulationStep::Show { device });
    }

    steps
}

/// Wires one weather station to the configured number of display devices,
/// then executes the scripted steps (or, with `random_step_count` set, a
/// randomly generated script) in order.
pub fn cmd_run_simulation<B: LogBackend>(
    config: &Configuration,
    terminal: &mut B,
    random_step_count: Option<usize>,
) {
    let mut station = WeatherStation::new();

    let devices: Vec<DisplayDevice> = (0..config.simulation.device_count)
        .map(|_| DisplayDevice::new())
        .collect();
    for device in &devices {
        station.register_observers(&device.observer_list());
    }

    let steps = match random_step_count {
        Some(step_count) => generate_random_steps(step_count, devices.len()),
        None => config.simulation.steps.clone(),
    };

    for step in steps {
        run_step(config, terminal, &mut station, &devices, step);
    }
}

fn run_step<B: LogBackend>(
    config: &Configuration,
    terminal: &mut B,
    station: &mut WeatherStation,
    devices: &[DisplayDevice],
    step: SimulationStep,
) {
    let use_colours = config.ui.use_colours;

    match step {
        SimulationStep::Set { reading, value } => {
            if is_verbose_enabled() {
                terminal.log_println(maybe_styled(
                    format!("Setting {reading} to {value}."),
                    *STEP_STYLE,
                    use_colours,
                ));
            }

            station.set_reading(reading, value);
        }
        SimulationStep::Detach { device } => {
            if is_verbose_enabled() {
                terminal.log_println(maybe_styled(
                    format!("Detaching device {device}."),
                    *STEP_STYLE,
                    use_colours,
                ));
            }

            // Device indices are 1-based and validated at configuration load.
            station.remove_observers(&devices[device - 1].observer_list());
        }
        SimulationStep::Attach { device } => {
            if is_verbose_enabled() {
                terminal.log_println(maybe_styled(
                    format!("Attaching device {device}."),
                    *STEP_STYLE,
                    use_colours,
                ));
            }

            station.register_observers(&devices[device - 1].observer_list());
        }
        SimulationStep::Show { device } => {
            terminal.log_println(maybe_styled(
                format!("DEVICE {device}"),
                *DEVICE_HEADER_STYLE,
                use_colours,
            ));
            terminal.log_println(devices[device - 1].report());
            terminal.log_newline();
        }
    }
}
