//! Subcommand implementations.

pub mod activities;
pub mod agent;
pub mod agents;
pub mod config_cmd;
pub mod tools;
pub mod weather;

use skycast_config::AppConfig;
use skycast_core::tool::ToolResult;
use skycast_weather::OpenMeteoClient;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// The Open-Meteo client described by `[weather]`.
pub fn weather_client(config: &AppConfig) -> Result<OpenMeteoClient, Box<dyn std::error::Error>> {
    Ok(OpenMeteoClient::from_config(&config.weather)?)
}

pub fn print_result(result: &ToolResult) {
    println!("{}", result.output);
}
