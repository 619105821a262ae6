//! `skycast activities`: run the recommend-activities tool directly.

use skycast_config::AppConfig;
use skycast_core::tool::Tool;
use skycast_tools::RecommendActivitiesTool;
use skycast_weather::ActivityType;

use super::{print_result, weather_client, CmdResult};

pub async fn run(
    config: &AppConfig,
    location: String,
    activity_type: ActivityType,
    date: Option<String>,
    max_results: Option<i64>,
) -> CmdResult {
    let mut arguments = serde_json::json!({
        "location": location,
        "activityType": activity_type,
    });
    if let Some(date) = date {
        arguments["date"] = serde_json::json!(date);
    }
    if let Some(n) = max_results {
        arguments["maxResults"] = serde_json::json!(n);
    }

    let tool = RecommendActivitiesTool::new(weather_client(config)?);
    let result = tool.execute(arguments).await?;
    print_result(&result);
    Ok(())
}
