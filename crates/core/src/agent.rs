//! Agent profile and runtime settings types.

use serde::{Deserialize, Serialize};

/// Static description of an agent: who it is, what it is told, and which
/// tools it may call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Short lookup key (e.g. "weather")
    pub key: String,

    /// Display name (e.g. "Weather Agent")
    pub name: String,

    /// System instructions sent as the first message of every conversation
    pub instructions: String,

    /// Model override; `None` uses `AgentSettings::model`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Names of the tools this agent is allowed to call
    #[serde(default)]
    pub tools: Vec<String>,
}

impl AgentProfile {
    /// The model this agent runs on, given the runtime defaults.
    pub fn effective_model<'a>(&'a self, settings: &'a AgentSettings) -> &'a str {
        self.model.as_deref().unwrap_or(&settings.model)
    }
}

/// Runtime knobs shared by every agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Default model to use
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temp")]
    pub temperature: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Maximum tool call iterations per turn (safety limit)
    #[serde(default = "default_max_iterations")]
    pub max_tool_iterations: u32,
}

fn default_model() -> String {
    "gpt-4o".into()
}
fn default_temp() -> f32 {
    0.7
}
fn default_max_iterations() -> u32 {
    10
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temp(),
            max_tokens: None,
            max_tool_iterations: default_max_iterations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(model: Option<&str>) -> AgentProfile {
        AgentProfile {
            key: "weather".into(),
            name: "Weather Agent".into(),
            instructions: "Be helpful".into(),
            model: model.map(String::from),
            tools: vec!["get-weather".into()],
        }
    }

    #[test]
    fn settings_default_to_gpt_4o() {
        let settings = AgentSettings::default();
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.max_tool_iterations, 10);
    }

    #[test]
    fn profile_model_overrides_settings() {
        let settings = AgentSettings::default();
        assert_eq!(profile(None).effective_model(&settings), "gpt-4o");
        assert_eq!(profile(Some("gpt-4o-mini")).effective_model(&settings), "gpt-4o-mini");
    }
}
