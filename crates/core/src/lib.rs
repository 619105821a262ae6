//! # Skycast Core
//!
//! Domain types, traits, and error definitions for the Skycast agent runtime.
//! This crate has **no HTTP dependencies**: it defines the domain model
//! that the weather, provider, tool, and agent crates implement against.
//!
//! Every seam (LLM backend, callable tool) is a trait here so that tests
//! can swap in scripted implementations.

pub mod agent;
pub mod error;
pub mod event;
pub mod message;
pub mod provider;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use agent::{AgentProfile, AgentSettings};
pub use error::{Error, ProviderError, Result, ToolError, WeatherError};
pub use event::{DomainEvent, EventBus};
pub use message::{Conversation, ConversationId, Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, ToolDefinition};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult};
