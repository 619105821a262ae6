//! Tools exposed to Skycast agents.
//!
//! Each tool validates the model's arguments against a typed input struct
//! before any network call, then returns the weather layer's result as
//! structured JSON:
//!
//! - `get-weather`: current conditions for a place
//! - `recommend-activities`: a forecast bundled with activity preferences

pub mod get_weather;
pub mod input;
pub mod recommend_activities;

use std::sync::Arc;

use skycast_core::tool::ToolRegistry;
use skycast_weather::OpenMeteoClient;

pub use get_weather::GetWeatherTool;
pub use input::{ActivityRequest, GetWeatherInput, RecommendActivitiesInput};
pub use recommend_activities::RecommendActivitiesTool;

/// Create a registry with every built-in tool sharing one weather client.
pub fn default_registry(client: OpenMeteoClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GetWeatherTool::new(client.clone())));
    registry.register(Arc::new(RecommendActivitiesTool::new(client)));
    registry
}
