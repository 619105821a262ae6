//! Agent lookup by key.

use std::collections::BTreeMap;
use std::sync::Arc;

use skycast_core::agent::{AgentProfile, AgentSettings};
use skycast_core::event::EventBus;
use skycast_core::provider::Provider;
use skycast_core::tool::ToolRegistry;

use crate::agents::builtin_agents;
use crate::loop_runner::AgentLoop;

/// The agents available to a process, plus everything needed to run them.
pub struct AgentCatalog {
    profiles: BTreeMap<String, AgentProfile>,
    provider: Arc<dyn Provider>,
    settings: AgentSettings,
    tools: ToolRegistry,
    event_bus: Arc<EventBus>,
}

impl AgentCatalog {
    pub fn new(
        provider: Arc<dyn Provider>,
        settings: AgentSettings,
        tools: ToolRegistry,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            profiles: BTreeMap::new(),
            provider,
            settings,
            tools,
            event_bus,
        }
    }

    /// A catalog holding the weather and activities agents.
    pub fn builtin(
        provider: Arc<dyn Provider>,
        settings: AgentSettings,
        tools: ToolRegistry,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let mut catalog = Self::new(provider, settings, tools, event_bus);
        for profile in builtin_agents() {
            catalog.register(profile);
        }
        catalog
    }

    /// Add or replace an agent under its key.
    pub fn register(&mut self, profile: AgentProfile) {
        self.profiles.insert(profile.key.clone(), profile);
    }

    pub fn profile(&self, key: &str) -> Option<&AgentProfile> {
        self.profiles.get(key)
    }

    /// All profiles, sorted by key.
    pub fn profiles(&self) -> impl Iterator<Item = &AgentProfile> {
        self.profiles.values()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Build a runnable loop for the agent registered under `key`.
    pub fn agent(&self, key: &str) -> Result<AgentLoop, skycast_core::Error> {
        let profile = self.profiles.get(key).ok_or_else(|| skycast_core::Error::Config {
            message: format!("unknown agent '{key}' (available: {})", self.keys().join(", ")),
        })?;
        Ok(AgentLoop::new(
            self.provider.clone(),
            profile.clone(),
            self.settings.clone(),
            &self.tools,
            self.event_bus.clone(),
        ))
    }
}
