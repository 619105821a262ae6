//! The built-in agent profiles.

use std::fmt::Write;

use skycast_core::agent::AgentProfile;
use skycast_tools::{get_weather, recommend_activities};
use skycast_weather::ActivityType;

pub const WEATHER_KEY: &str = "weather";
pub const ACTIVITIES_KEY: &str = "activities";

const WEATHER_INSTRUCTIONS: &str = "\
You are a helpful weather assistant that provides accurate weather information.

Your primary function is to help users get weather details for specific locations. When responding:
- Always ask for a location if none is provided
- If the location name isn't in English, please translate it
- If giving a location with multiple parts (e.g. \"New York, NY\"), use the most relevant part (e.g. \"New York\")
- Include relevant details like humidity, wind conditions, and precipitation
- Keep responses concise but informative

Use the get-weather tool to fetch current weather data.";

const ACTIVITIES_PREAMBLE: &str = "\
You are a helpful activities recommendation assistant that suggests activities based on location, weather, and user preferences.

Your primary function is to recommend suitable activities for users based on:
1. Location - You'll suggest activities specific to the provided location
2. Weather conditions - You'll consider the weather forecast when recommending activities
3. Activity type preferences - You'll focus on the type of activities the user is interested in
4. Date - You'll consider the specific date for the activities

When responding:
- Always provide 3-5 specific activity recommendations with brief descriptions
- For each activity, include:
  * Name of the activity or place
  * Brief description
  * Why it's suitable based on weather and preferences
  * Best time to visit
  * Any special considerations (e.g., \"bring sunscreen\", \"indoor option if it rains\")
- Be specific about locations - mention actual places, parks, venues, etc.
- Consider the weather conditions when making recommendations
- If the weather is poor (high precipitation chance, extreme temperatures), suggest appropriate indoor activities
- Respect the maxResults value returned by the tool when deciding how many activities to list
";

/// The weather assistant, answering from `get-weather`.
pub fn weather_agent() -> AgentProfile {
    AgentProfile {
        key: WEATHER_KEY.into(),
        name: "Weather Agent".into(),
        instructions: WEATHER_INSTRUCTIONS.into(),
        model: None,
        tools: vec![get_weather::NAME.into()],
    }
}

/// The activities recommender, answering from `recommend-activities`.
pub fn activities_agent() -> AgentProfile {
    AgentProfile {
        key: ACTIVITIES_KEY.into(),
        name: "Activities Recommendation Agent".into(),
        instructions: activities_instructions(),
        model: None,
        tools: vec![recommend_activities::NAME.into()],
    }
}

pub fn builtin_agents() -> Vec<AgentProfile> {
    vec![weather_agent(), activities_agent()]
}

fn activities_instructions() -> String {
    let mut text = String::from(ACTIVITIES_PREAMBLE);
    text.push_str("\nActivity types you can recommend include:\n");
    for activity in ActivityType::ALL {
        let _ = writeln!(text, "- {}: {}", activity.as_str(), activity.description());
    }
    text.push_str(
        "\nUse the recommend-activities tool to get weather forecasts and activity suggestions \
         based on location and preferences.",
    );
    text
}
