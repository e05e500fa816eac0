use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

const CONFIG_FILE: &str = ".workload.toml";

/// Settings deserialized from config file
#[derive(Deserialize, Debug, Default)]
pub struct WorkloadConfig {
    pub load: Option<i64>,
}

impl WorkloadConfig {
    /// A missing config file is not an error, the compiled-in defaults apply
    pub fn new() -> Result<Self, anyhow::Error> {
        let Some(config_file) = find_config_file()? else {
            return Ok(Self::default());
        };

        let config_string = std::fs::read_to_string(&config_file)
            .with_context(|| format!("Couldn't read {}", config_file.display()))?;

        // Deserialize the TOML string into the WorkloadConfig struct
        toml::from_str(&config_string)
            .with_context(|| format!("Couldn't parse {}", config_file.display()))
    }
}

// Scan root directories until we hopefully find `.workload.toml`
pub fn find_config_file() -> Result<Option<PathBuf>, anyhow::Error> {
    let mut dir = std::env::current_dir()?;
    loop {
        let config_file = dir.join(CONFIG_FILE);
        if config_file.exists() {
            return Ok(Some(config_file));
        }
        if let Some(parent) = dir.parent() {
            dir = parent.to_path_buf();
        } else {
            return Ok(None);
        }
    }
}
