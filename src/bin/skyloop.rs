use bevy::{
    app::ScheduleRunnerPlugin, gilrs::GilrsPlugin, input::InputPlugin, log::LogPlugin, prelude::*,
};
use std::{env, process::ExitCode, time::Duration};

use skyloop::{plugins::SkyloopPlugin, resources::SimulationConfig};

fn main() -> ExitCode {
    let config = match env::args().nth(1) {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration from {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SimulationConfig::default(),
    };

    let exit = App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
            LogPlugin::default(),
            InputPlugin,
            GilrsPlugin,
            SkyloopPlugin::new(config),
        ))
        .run();

    if exit.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
