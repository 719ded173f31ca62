use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::errors::InspectError;

/// Static descriptor of the one supported network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub explorer: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: "Base Sepolia".to_string(),
            chain_id: 84532,
            rpc_url: "https://sepolia.base.org".to_string(),
            explorer: "https://sepolia.basescan.org".to_string(),
        }
    }
}

/// Shape of the optional `config.toml` file.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    network: NetworkConfig,
}

impl NetworkConfig {
    /// Loads the `[network]` table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, InspectError> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|e| InspectError::Config(format!("invalid config file: {}", e)))?;
        Ok(file.network)
    }

    /// Loads the config file, falling back to the built-in Base Sepolia
    /// descriptor when the file is missing or malformed. Configuration can
    /// never abort a run.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "using default network config");
            Self::default()
        })
    }

    /// Lowercased, dash-separated network label used in the snapshot
    /// ("Base Sepolia" -> "base-sepolia").
    pub fn slug(&self) -> String {
        self.name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
    }

    /// First word of the network name ("Base Sepolia" -> "Base").
    pub fn built_for(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    pub fn address_link(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer, address)
    }

    pub fn block_link(&self, number: &str) -> String {
        format!("{}/block/{}", self.explorer, number)
    }

    pub fn code_link(&self, address: &str) -> String {
        format!("{}/address/{}#code", self.explorer, address)
    }
}
