//! The agent reasoning loop implementation.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use skycast_core::agent::{AgentProfile, AgentSettings};
use skycast_core::event::{DomainEvent, EventBus};
use skycast_core::message::{Conversation, Message, MessageToolCall, Role};
use skycast_core::provider::{Provider, ProviderRequest};
use skycast_core::tool::{ToolCall, ToolRegistry};
use tracing::{debug, info, warn};

pub const ITERATION_LIMIT_REPLY: &str =
    "I've reached the maximum number of tool call iterations. Please provide further guidance.";

/// Orchestrates model calls and tool execution for one agent.
pub struct AgentLoop {
    provider: Arc<dyn Provider>,
    profile: AgentProfile,
    settings: AgentSettings,
    /// Only the tools named by the profile
    tools: ToolRegistry,
    event_bus: Arc<EventBus>,
}

impl AgentLoop {
    /// Create a loop for `profile`, restricted to the tools it names.
    pub fn new(
        provider: Arc<dyn Provider>,
        profile: AgentProfile,
        settings: AgentSettings,
        tools: &ToolRegistry,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let names: Vec<&str> = profile.tools.iter().map(String::as_str).collect();
        let tools = tools.subset(&names);
        if tools.len() != names.len() {
            warn!(agent = %profile.key, wanted = ?names, found = ?tools.names(), "Agent is missing tools");
        }
        Self {
            provider,
            profile,
            settings,
            tools,
            event_bus,
        }
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    pub fn model(&self) -> &str {
        self.profile.effective_model(&self.settings)
    }

    /// Names of the tools this agent can call.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.names()
    }

    /// Answer a single message in a fresh conversation.
    pub async fn ask(&self, message: &str) -> skycast_core::Result<String> {
        let mut conversation = Conversation::new();
        conversation.push(Message::user(message));
        self.process(&mut conversation).await
    }

    /// Run the loop until the model answers with text.
    ///
    /// The agent's instructions are kept as the first message. Tool
    /// failures are reported back to the model as `Error: ...` results so it
    /// can explain them; only provider failures end the turn with an error.
    pub async fn process(&self, conversation: &mut Conversation) -> skycast_core::Result<String> {
        info!(
            agent = %self.profile.key,
            conversation_id = %conversation.id,
            messages = conversation.messages.len(),
            "Processing conversation"
        );

        let system = Message::system(&self.profile.instructions);
        if conversation.messages.first().is_some_and(|m| m.role == Role::System) {
            conversation.messages[0] = system;
        } else {
            conversation.messages.insert(0, system);
        }

        let tool_definitions = self.tools.definitions();
        let max_iterations = self.settings.max_tool_iterations;

        for iteration in 1..=max_iterations {
            debug!(agent = %self.profile.key, iteration, "Agent loop iteration");

            let request = ProviderRequest {
                model: self.model().to_string(),
                messages: conversation.messages.clone(),
                temperature: self.settings.temperature,
                max_tokens: self.settings.max_tokens,
                tools: tool_definitions.clone(),
            };

            let response = self.provider.complete(request).await?;

            if let Some(usage) = &response.usage {
                self.event_bus.publish(DomainEvent::ResponseGenerated {
                    agent: self.profile.key.clone(),
                    conversation_id: conversation.id.to_string(),
                    model: response.model.clone(),
                    tokens_used: usage.total_tokens,
                    timestamp: Utc::now(),
                });
            }

            if response.message.tool_calls.is_empty() {
                let text = response.message.content.clone();
                conversation.push(response.message);
                return Ok(text);
            }

            debug!(tool_count = response.message.tool_calls.len(), "Executing tool calls");
            let tool_calls = response.message.tool_calls.clone();
            conversation.push(response.message);

            for tc in &tool_calls {
                let output = self.run_tool(tc).await;
                conversation.push(Message::tool_result(&tc.id, output));
            }
        }

        warn!(
            agent = %self.profile.key,
            conversation_id = %conversation.id,
            iterations = max_iterations,
            "Max tool iterations reached"
        );
        self.event_bus.publish(DomainEvent::IterationLimitReached {
            agent: self.profile.key.clone(),
            conversation_id: conversation.id.to_string(),
            iterations: max_iterations,
            timestamp: Utc::now(),
        });
        Ok(ITERATION_LIMIT_REPLY.into())
    }

    /// Execute one tool call, returning the text the model will see.
    async fn run_tool(&self, tc: &MessageToolCall) -> String {
        let start = Instant::now();
        let result = match serde_json::from_str(&tc.arguments) {
            Ok(arguments) => {
                let call = ToolCall {
                    id: tc.id.clone(),
                    name: tc.name.clone(),
                    arguments,
                };
                self.tools.execute(&call).await.map(|r| r.output)
            }
            Err(e) => Err(skycast_core::ToolError::InvalidArguments(format!(
                "arguments are not valid JSON: {e}"
            ))),
        };
        let duration_ms = start.elapsed().as_millis() as u64;

        self.event_bus.publish(DomainEvent::ToolExecuted {
            agent: self.profile.key.clone(),
            tool_name: tc.name.clone(),
            success: result.is_ok(),
            duration_ms,
            timestamp: Utc::now(),
        });

        result.unwrap_or_else(|e| {
            warn!(tool = %tc.name, error = %e, "Tool execution failed");
            format!("Error: {e}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::error::{ProviderError, ToolError};
    use skycast_core::provider::{ProviderResponse, Usage};
    use skycast_core::tool::{Tool, ToolResult};
    use std::sync::Mutex;

    /// Replays a fixed list of responses and records every request.
    struct MockProvider {
        responses: Mutex<Vec<ProviderResponse>>,
        requests: Mutex<Vec<ProviderRequest>>,
    }

    impl MockProvider {
        fn new(mut responses: Vec<ProviderResponse>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl Provider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| ProviderError::NotConfigured("script exhausted".into()))
        }
    }

    fn reply(text: &str, calls: Vec<MessageToolCall>) -> ProviderResponse {
        let mut message = Message::assistant(text);
        message.tool_calls = calls;
        ProviderResponse {
            message,
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
            model: "mock-model".into(),
        }
    }

    fn call(name: &str, arguments: &str) -> MessageToolCall {
        MessageToolCall {
            id: format!("call_{name}"),
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    struct FixedTool {
        name: &'static str,
        outcome: Result<&'static str, ToolError>,
    }

    #[async_trait::async_trait]
    impl Tool for FixedTool {
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            "fixed"
        }
        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object"})
        }
        async fn execute(&self, _arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
            self.outcome.clone().map(|out| ToolResult {
                call_id: String::new(),
                success: true,
                output: out.into(),
                data: None,
            })
        }
    }

    fn profile(tools: &[&str]) -> AgentProfile {
        AgentProfile {
            key: "test".into(),
            name: "Test Agent".into(),
            instructions: "You are a test agent.".into(),
            model: None,
            tools: tools.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(FixedTool {
            name: "sunny",
            outcome: Ok("{\"conditions\":\"Clear sky\"}"),
        }));
        registry.register(Arc::new(FixedTool {
            name: "broken",
            outcome: Err(ToolError::Weather(skycast_core::WeatherError::NotFound(
                "Atlantis".into(),
            ))),
        }));
        registry
    }

    fn agent(provider: Arc<MockProvider>, tools: &[&str], settings: AgentSettings) -> AgentLoop {
        AgentLoop::new(provider, profile(tools), settings, &registry(), Arc::new(EventBus::default()))
    }

    #[tokio::test]
    async fn simple_text_response() {
        let provider = Arc::new(MockProvider::new(vec![reply("Hello! Where are you?", vec![])]));
        let agent = agent(provider.clone(), &[], AgentSettings::default());

        let mut conv = Conversation::new();
        conv.push(Message::user("Hello!"));
        let response = agent.process(&mut conv).await.unwrap();

        assert_eq!(response, "Hello! Where are you?");
        // System + User + Assistant
        assert_eq!(conv.messages.len(), 3);
        assert_eq!(conv.messages[0].role, Role::System);
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests[0].model, "gpt-4o");
        assert!(requests[0].tools.is_empty());
    }

    #[tokio::test]
    async fn only_profile_tools_are_offered() {
        let provider = Arc::new(MockProvider::new(vec![reply("ok", vec![])]));
        let agent = agent(provider.clone(), &["sunny"], AgentSettings::default());
        assert_eq!(agent.tool_names(), vec!["sunny"]);

        agent.ask("hi").await.unwrap();
        let requests = provider.requests.lock().unwrap();
        let offered: Vec<&str> = requests[0].tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(offered, vec!["sunny"]);
    }

    #[tokio::test]
    async fn tool_output_is_fed_back() {
        let provider = Arc::new(MockProvider::new(vec![
            reply("", vec![call("sunny", "{}")]),
            reply("It's clear.", vec![]),
        ]));
        let agent = agent(provider.clone(), &["sunny"], AgentSettings::default());

        let mut conv = Conversation::new();
        conv.push(Message::user("Weather?"));
        let answer = agent.process(&mut conv).await.unwrap();

        assert_eq!(answer, "It's clear.");
        let tool_msg = conv.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert_eq!(tool_msg.tool_call_id.as_deref(), Some("call_sunny"));
        assert!(tool_msg.content.contains("Clear sky"));
        assert_eq!(provider.requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn tool_failure_becomes_error_result() {
        let provider = Arc::new(MockProvider::new(vec![
            reply("", vec![call("broken", "{}")]),
            reply("I couldn't find Atlantis.", vec![]),
        ]));
        let bus = Arc::new(EventBus::default());
        let mut rx = bus.subscribe();
        let agent = AgentLoop::new(
            provider,
            profile(&["broken"]),
            AgentSettings::default(),
            &registry(),
            bus,
        );

        let mut conv = Conversation::new();
        conv.push(Message::user("Weather in Atlantis?"));
        agent.process(&mut conv).await.unwrap();

        let tool_msg = conv.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert_eq!(tool_msg.content, "Error: Location 'Atlantis' not found");

        let mut saw_failure = false;
        while let Ok(event) = rx.try_recv() {
            if let DomainEvent::ToolExecuted { success, tool_name, .. } = &*event {
                assert_eq!(tool_name, "broken");
                saw_failure = !success;
            }
        }
        assert!(saw_failure);
    }

    #[tokio::test]
    async fn malformed_arguments_are_reported() {
        let provider = Arc::new(MockProvider::new(vec![
            reply("", vec![call("sunny", "{not json")]),
            reply("Sorry.", vec![]),
        ]));
        let agent = agent(provider, &["sunny"], AgentSettings::default());

        let mut conv = Conversation::new();
        conv.push(Message::user("?"));
        agent.process(&mut conv).await.unwrap();

        let tool_msg = conv.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert!(tool_msg.content.starts_with("Error: Invalid tool arguments"));
    }

    #[tokio::test]
    async fn tools_outside_profile_are_not_found() {
        let provider = Arc::new(MockProvider::new(vec![
            reply("", vec![call("broken", "{}")]),
            reply("done", vec![]),
        ]));
        let agent = agent(provider, &["sunny"], AgentSettings::default());

        let mut conv = Conversation::new();
        conv.push(Message::user("?"));
        agent.process(&mut conv).await.unwrap();

        let tool_msg = conv.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert!(tool_msg.content.contains("Tool not found: broken"), "{}", tool_msg.content);
    }

    #[tokio::test]
    async fn iteration_limit_stops_the_loop() {
        let provider = Arc::new(MockProvider::new(vec![
            reply("", vec![call("sunny", "{}")]),
            reply("", vec![call("sunny", "{}")]),
            reply("never reached", vec![]),
        ]));
        let settings = AgentSettings {
            max_tool_iterations: 2,
            ..AgentSettings::default()
        };
        let bus = Arc::new(EventBus::default());
        let mut rx = bus.subscribe();
        let agent = AgentLoop::new(provider.clone(), profile(&["sunny"]), settings, &registry(), bus);

        let answer = agent.ask("loop forever").await.unwrap();
        assert_eq!(answer, ITERATION_LIMIT_REPLY);
        assert_eq!(provider.requests.lock().unwrap().len(), 2);

        let mut limit_hit = false;
        while let Ok(event) = rx.try_recv() {
            if let DomainEvent::IterationLimitReached { iterations, .. } = &*event {
                assert_eq!(*iterations, 2);
                limit_hit = true;
            }
        }
        assert!(limit_hit);
    }

    #[tokio::test]
    async fn existing_system_message_is_replaced() {
        let provider = Arc::new(MockProvider::new(vec![reply("ok", vec![])]));
        let agent = agent(provider, &[], AgentSettings::default());

        let mut conv = Conversation::new();
        conv.push(Message::system("stale instructions"));
        conv.push(Message::user("hi"));
        agent.process(&mut conv).await.unwrap();

        let systems: Vec<_> = conv.messages.iter().filter(|m| m.role == Role::System).collect();
        assert_eq!(systems.len(), 1);
        assert_eq!(systems[0].content, "You are a test agent.");
    }

    #[tokio::test]
    async fn provider_error_propagates() {
        let provider = Arc::new(MockProvider::new(vec![]));
        let agent = agent(provider, &[], AgentSettings::default());
        let err = agent.ask("hi").await.unwrap_err();
        assert!(matches!(err, skycast_core::Error::Provider(_)));
    }
}
