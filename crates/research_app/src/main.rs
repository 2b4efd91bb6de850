mod app;
mod commands;
mod config;
mod effects;
mod render;

use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::from_env()?;
    hub_logging::initialize(config.log_destination, LevelFilter::Info, &config.log_path);
    app::run_app(config)
}
