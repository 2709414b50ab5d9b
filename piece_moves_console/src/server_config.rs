use anyhow::Context;
use piece_moves::{Placement, default_placements};
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    // Placement order matters: a piece placed onto a taken square stays unplaced.
    #[serde(default = "default_placements")]
    pub placements: Vec<Placement>,
}

fn default_bind_address() -> String { "127.0.0.1:8000".to_owned() }

pub fn read_config_file(filename: &str) -> anyhow::Result<ServerConfig> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read config file '{filename}'."))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file '{filename}'."))
}
