use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "ethwallet_settings.json";

/// Directory holding settings and the operation log.
pub(crate) fn app_data_dir() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        let app_dir = config_dir.join("ethwallet");
        if !app_dir.exists() {
            let _ = fs::create_dir_all(&app_dir);
        }
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// A user-defined custom EVM network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomNetwork {
    /// Display name for the network
    pub label: String,
    /// Chain ID (must be unique)
    pub chain_id: u64,
    /// Native token symbol (e.g., "ETH", "MATIC")
    pub native_token: String,
    /// RPC endpoint URL
    pub rpc_url: String,
}

/// User settings that persist between sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    /// Selected network chain ID
    #[serde(default = "default_chain_id")]
    pub selected_chain_id: u64,
    /// Custom RPC overrides per chain ID
    #[serde(default)]
    pub custom_rpcs: HashMap<u64, String>,
    /// Networks added by hand to the settings file
    #[serde(default)]
    pub custom_networks: Vec<CustomNetwork>,
}

fn default_chain_id() -> u64 {
    crate::config::LOCAL_CHAIN_ID
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            selected_chain_id: default_chain_id(),
            custom_rpcs: HashMap::new(),
            custom_networks: Vec::new(),
        }
    }
}

impl UserSettings {
    fn settings_path() -> PathBuf {
        app_data_dir().join(SETTINGS_FILE)
    }

    /// Get the settings file path for display
    pub fn settings_path_display() -> String {
        Self::settings_path().display().to_string()
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::settings_path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match Self::from_json(&content) {
                    Ok(settings) => {
                        tracing::info!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse settings file: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read settings file: {}", e);
                }
            }
        }
        tracing::info!("Using default settings");
        Self::default()
    }

    fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Get custom RPC for a chain, or None if using default
    pub fn get_custom_rpc(&self, chain_id: u64) -> Option<&String> {
        self.custom_rpcs.get(&chain_id).filter(|s| !s.is_empty())
    }

    /// Set custom RPC for a chain (empty string removes the override)
    pub fn set_custom_rpc(&mut self, chain_id: u64, rpc: String) {
        if rpc.trim().is_empty() {
            self.custom_rpcs.remove(&chain_id);
        } else {
            self.custom_rpcs.insert(chain_id, rpc.trim().to_string());
        }
    }

    /// Get a custom network by chain_id
    pub fn get_custom_network(&self, chain_id: u64) -> Option<&CustomNetwork> {
        self.custom_networks.iter().find(|n| n.chain_id == chain_id)
    }

    /// Config for the selected network, with any saved RPC override applied.
    pub fn selected_config(&self) -> crate::config::Config {
        use crate::config::{find_network_by_chain_id, Config};

        let mut config = if let Some(net) = self.get_custom_network(self.selected_chain_id) {
            Config::from_custom_network(net)
        } else if let Some(net) = find_network_by_chain_id(self.selected_chain_id) {
            Config::from_network(net)
        } else {
            Config::default()
        };
        if let Some(rpc) = self.get_custom_rpc(config.chain_id) {
            config.rpc_url = rpc.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(chain_id: u64) -> CustomNetwork {
        CustomNetwork {
            label: "Devnet".to_string(),
            chain_id,
            native_token: "DEV".to_string(),
            rpc_url: "http://10.0.0.5:8545".to_string(),
        }
    }

    #[test]
    fn test_user_settings_default() {
        let settings = UserSettings::default();
        assert_eq!(settings.selected_chain_id, 31337);
        assert!(settings.custom_rpcs.is_empty());
        assert!(settings.custom_networks.is_empty());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let settings = UserSettings::from_json(r#"{"selected_chain_id": 1}"#).unwrap();
        assert_eq!(settings.selected_chain_id, 1);
        assert!(settings.custom_networks.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(UserSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = UserSettings::default();
        settings.set_custom_rpc(1, "https://my-node".to_string());
        settings.custom_networks.push(custom(4242));

        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(UserSettings::from_json(&json).unwrap(), settings);
    }

    // ==================== custom RPC tests ====================

    #[test]
    fn test_set_custom_rpc_trims_whitespace() {
        let mut settings = UserSettings::default();
        settings.set_custom_rpc(1, "  https://my-eth-node.com  ".to_string());
        assert_eq!(settings.get_custom_rpc(1).unwrap(), "https://my-eth-node.com");
    }

    #[test]
    fn test_set_custom_rpc_empty_removes() {
        let mut settings = UserSettings::default();
        settings.set_custom_rpc(1, "https://my-eth-node.com".to_string());
        settings.set_custom_rpc(1, "   ".to_string());
        assert!(settings.get_custom_rpc(1).is_none());
    }

    // ==================== selected_config tests ====================

    #[test]
    fn test_selected_config_builtin_with_rpc_override() {
        let mut settings = UserSettings::default();
        settings.selected_chain_id = 11155111;
        settings.set_custom_rpc(11155111, "http://wallet-bridge:8545".to_string());

        let config = settings.selected_config();

        assert_eq!(config.chain_id, 11155111);
        assert_eq!(config.rpc_url, "http://wallet-bridge:8545");
    }

    #[test]
    fn test_selected_config_custom_network() {
        let mut settings = UserSettings::default();
        settings.custom_networks.push(custom(4242));
        settings.selected_chain_id = 4242;

        let config = settings.selected_config();

        assert_eq!(config.rpc_url, "http://10.0.0.5:8545");
        assert_eq!(config.native_token(), "DEV");
        assert_eq!(config.network_label(), "Devnet");
    }

    #[test]
    fn test_selected_config_unknown_chain_falls_back() {
        let mut settings = UserSettings::default();
        settings.selected_chain_id = 999999;
        assert_eq!(settings.selected_config().chain_id, 31337);
    }
}
