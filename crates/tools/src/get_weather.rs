//! `get-weather`: current conditions for a named place.

use async_trait::async_trait;
use skycast_core::error::ToolError;
use skycast_core::tool::{Tool, ToolResult};
use skycast_weather::OpenMeteoClient;
use tracing::debug;

use crate::input::{parse_arguments, GetWeatherInput};

pub const NAME: &str = "get-weather";

pub struct GetWeatherTool {
    client: OpenMeteoClient,
}

impl GetWeatherTool {
    pub fn new(client: OpenMeteoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for GetWeatherTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Get current weather for a location"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "City name"
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let input: GetWeatherInput = parse_arguments(arguments)?;
        input.validate()?;
        debug!(location = %input.location, "get-weather invoked");

        let weather = self.client.get_weather(&input.location).await?;
        ToolResult::from_payload(NAME, &weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_tool() -> GetWeatherTool {
        let client = OpenMeteoClient::new("http://127.0.0.1:9", "http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        GetWeatherTool::new(client)
    }

    #[test]
    fn tool_definition() {
        let def = offline_tool().to_definition();
        assert_eq!(def.name, "get-weather");
        assert_eq!(def.description, "Get current weather for a location");
        assert_eq!(def.parameters["required"], serde_json::json!(["location"]));
    }

    #[tokio::test]
    async fn missing_location_is_rejected_before_any_request() {
        let err = offline_tool().execute(serde_json::json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn wrong_type_is_rejected() {
        let err = offline_tool()
            .execute(serde_json::json!({"location": 42}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
