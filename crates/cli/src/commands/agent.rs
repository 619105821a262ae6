//! `skycast agent`: interactive or single-message chat mode.

use std::io::Write;
use std::sync::Arc;

use skycast_agent::AgentCatalog;
use skycast_config::AppConfig;
use skycast_core::event::EventBus;
use skycast_core::message::{Conversation, Message};
use tokio::io::{self, AsyncBufReadExt, BufReader};

use super::{weather_client, CmdResult};

/// Providers that run without credentials.
const KEYLESS_PROVIDERS: &[&str] = &["ollama"];

pub async fn run(config: &AppConfig, name: &str, message: Option<String>) -> CmdResult {
    if !config.has_api_key() && !KEYLESS_PROVIDERS.contains(&config.default_provider.as_str()) {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    SKYCAST_API_KEY=sk-...   (generic)");
        eprintln!("    OPENAI_API_KEY=sk-...    (for OpenAI direct)");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::default_path().display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let router = skycast_providers::build_from_config(config);
    let provider = router.default().ok_or("No default provider configured")?;
    let tools = skycast_tools::default_registry(weather_client(config)?);
    let catalog = AgentCatalog::builtin(
        provider,
        config.agent_settings(),
        tools,
        Arc::new(EventBus::default()),
    );
    let agent = catalog.agent(name)?;

    if let Some(msg) = message {
        eprint!("  Thinking...");
        let response = agent.ask(&msg).await;
        eprint!("\r              \r");
        println!("{}", response?);
        return Ok(());
    }

    println!();
    println!("  {}", agent.profile().name);
    println!();
    println!("  Provider:  {}", router.default_name());
    println!("  Model:     {}", agent.model());
    println!("  Tools:     {}", agent.tool_names().join(", "));
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+D to quit.");
    println!();

    let mut conv = Conversation::new();
    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        print!("  You > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit" | "/exit" | "/quit" | ":q") {
            break;
        }

        conv.push(Message::user(line));
        eprint!("  ...");
        match agent.process(&mut conv).await {
            Ok(response) => {
                eprint!("\r     \r");
                println!();
                for line in response.lines() {
                    println!("  {} > {line}", agent.profile().key);
                }
                println!();
            }
            Err(e) => {
                eprint!("\r     \r");
                eprintln!("  [Error] {e}");
                println!();
            }
        }
    }

    println!();
    Ok(())
}
