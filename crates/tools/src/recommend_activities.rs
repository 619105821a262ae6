//! `recommend-activities`: forecast data for the model to recommend from.
//!
//! The tool only gathers data. The model that receives the payload writes
//! the actual recommendations.

use async_trait::async_trait;
use skycast_core::error::ToolError;
use skycast_core::tool::{Tool, ToolResult};
use skycast_weather::{suggest_activities, ActivityType, OpenMeteoClient, MAX_RESULTS_RANGE};
use tracing::debug;

use crate::input::{parse_arguments, RecommendActivitiesInput};

pub const NAME: &str = "recommend-activities";

pub struct RecommendActivitiesTool {
    client: OpenMeteoClient,
}

impl RecommendActivitiesTool {
    pub fn new(client: OpenMeteoClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for RecommendActivitiesTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Get activity recommendations based on location, activity type, and date"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        let categories: Vec<&str> = ActivityType::ALL.iter().map(|a| a.as_str()).collect();
        serde_json::json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "City or location name"
                },
                "activityType": {
                    "type": "string",
                    "enum": categories,
                    "description": "Type of activity to recommend"
                },
                "date": {
                    "type": "string",
                    "description": "Date in YYYY-MM-DD format (optional, defaults to today)"
                },
                "maxResults": {
                    "type": "integer",
                    "minimum": MAX_RESULTS_RANGE.start(),
                    "maximum": MAX_RESULTS_RANGE.end(),
                    "description": "Maximum number of recommendations to return (1-10)"
                }
            },
            "required": ["location", "activityType"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let request = parse_arguments::<RecommendActivitiesInput>(arguments)?.validate()?;
        debug!(
            location = %request.location,
            activity = %request.activity_type,
            date = request.date.as_deref().unwrap_or("all"),
            max_results = request.max_results,
            "recommend-activities invoked"
        );

        let payload = suggest_activities(
            &self.client,
            &request.location,
            request.activity_type,
            request.date.as_deref(),
            request.max_results,
        )
        .await?;
        ToolResult::from_payload(NAME, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_tool() -> RecommendActivitiesTool {
        let client = OpenMeteoClient::new("http://127.0.0.1:9", "http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        RecommendActivitiesTool::new(client)
    }

    #[test]
    fn schema_lists_all_ten_categories() {
        let schema = offline_tool().parameters_schema();
        let categories = schema["properties"]["activityType"]["enum"].as_array().unwrap();
        assert_eq!(categories.len(), 10);
        assert!(categories.contains(&serde_json::json!("family_friendly")));
        assert_eq!(schema["properties"]["maxResults"]["minimum"], 1);
        assert_eq!(schema["properties"]["maxResults"]["maximum"], 10);
        assert_eq!(schema["required"], serde_json::json!(["location", "activityType"]));
    }

    #[tokio::test]
    async fn out_of_range_max_results_rejected_before_any_request() {
        for n in [0, 11] {
            let err = offline_tool()
                .execute(serde_json::json!({
                    "location": "Paris",
                    "activityType": "cultural",
                    "maxResults": n
                }))
                .await
                .unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(_)), "{n}");
        }
    }
}
