//! `skycast tools`: print what the model is offered.

use skycast_config::AppConfig;

use super::{weather_client, CmdResult};

pub fn run(config: &AppConfig) -> CmdResult {
    let registry = skycast_tools::default_registry(weather_client(config)?);
    println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
    Ok(())
}
