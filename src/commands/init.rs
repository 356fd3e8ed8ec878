use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_TEMPLATE;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".dqscope.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    println!("Created .dqscope.toml configuration file");

    Ok(())
}
