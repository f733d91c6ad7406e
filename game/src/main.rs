use std::error::Error;

use aim_trainer::app::{AimTrainerApp, app_config};
use aim_trainer::settings::SettingsStore;
use engine::app::run_game;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = SettingsStore::from_env().load_or_default();
    let config = app_config(&settings);
    run_game(config, AimTrainerApp::new(settings))?;
    Ok(())
}
