//! `skycast config`: show the effective configuration.

use std::path::Path;

use skycast_config::AppConfig;

use super::CmdResult;

pub fn show(config: &AppConfig, path: &Path) -> CmdResult {
    let source = if path.exists() { "file + environment" } else { "defaults + environment" };
    println!("# {} ({source})", path.display());
    println!("{}", config.to_redacted_toml());
    Ok(())
}
