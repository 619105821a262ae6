//! `skycast weather`: run the get-weather tool directly.

use skycast_config::AppConfig;
use skycast_core::tool::Tool;
use skycast_tools::GetWeatherTool;

use super::{print_result, weather_client, CmdResult};

pub async fn run(config: &AppConfig, location: String) -> CmdResult {
    let tool = GetWeatherTool::new(weather_client(config)?);
    let result = tool.execute(serde_json::json!({ "location": location })).await?;
    print_result(&result);
    Ok(())
}
