//! The agent runtime for Skycast.
//!
//! An agent follows a **Plan → Act → Observe** cycle:
//!
//! 1. **Receive** a user message
//! 2. **Send** the conversation and the agent's tools to the provider
//! 3. **If tool calls**: execute them, append results, loop back to step 2
//! 4. **If text response**: return it to the caller
//!
//! Two agents ship built in: a weather assistant and an activities
//! recommender. The [`AgentCatalog`] looks them up by key.

pub mod agents;
pub mod catalog;
pub mod loop_runner;

pub use agents::{activities_agent, builtin_agents, weather_agent};
pub use catalog::AgentCatalog;
pub use loop_runner::AgentLoop;
