//! `skycast agents`: list the built-in agents.

use skycast_config::AppConfig;

use super::CmdResult;

pub fn run(config: &AppConfig) -> CmdResult {
    let settings = config.agent_settings();
    println!();
    for profile in skycast_agent::builtin_agents() {
        println!("  {:<12} {}", profile.key, profile.name);
        println!("  {:<12} model: {}", "", profile.effective_model(&settings));
        println!("  {:<12} tools: {}", "", profile.tools.join(", "));
        println!();
    }
    Ok(())
}
