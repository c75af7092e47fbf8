use crate::{error::WalletError, provider::RpcWalletProvider};
use std::env;

/// Environment variable overriding the RPC endpoint of the selected network.
pub const RPC_URL_ENV: &str = "WALLET_RPC_URL";

/// Environment variable overriding the selected chain ID.
pub const CHAIN_ID_ENV: &str = "WALLET_CHAIN_ID";

/// Chain ID of a local development node (Anvil, Hardhat).
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// Network category for grouping in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkCategory {
    Local,
    EthereumMainnet,
    EthereumTestnet,
    L2Mainnet,
    OtherMainnet,
}

impl NetworkCategory {
    pub fn heading(&self) -> &'static str {
        match self {
            NetworkCategory::Local => "── Local ──",
            NetworkCategory::EthereumMainnet => "── Ethereum ──",
            NetworkCategory::EthereumTestnet => "── Ethereum Testnets ──",
            NetworkCategory::L2Mainnet => "── L2 Networks ──",
            NetworkCategory::OtherMainnet => "── Other Chains ──",
        }
    }
}

/// A predefined EVM-compatible network with label, chain ID, native token, and default RPC.
#[derive(Clone, Debug)]
pub struct EvmNetwork {
    pub label: &'static str,
    pub chain_id: u64,
    pub native_token: &'static str,
    pub default_rpc: &'static str,
    pub category: NetworkCategory,
}

impl EvmNetwork {
    pub const fn new(
        label: &'static str,
        chain_id: u64,
        native_token: &'static str,
        default_rpc: &'static str,
        category: NetworkCategory,
    ) -> Self {
        Self {
            label,
            chain_id,
            native_token,
            default_rpc,
            category,
        }
    }
}

use NetworkCategory::*;

/// Networks offered in the selector. Public endpoints hold no accounts, so
/// connecting needs a wallet-backed RPC override for anything but `Local`.
pub const NETWORKS: &[EvmNetwork] = &[
    EvmNetwork::new("Localhost", LOCAL_CHAIN_ID, "ETH", "http://127.0.0.1:8545", Local),
    EvmNetwork::new("Ethereum", 1, "ETH", "https://ethereum-rpc.publicnode.com", EthereumMainnet),
    EvmNetwork::new("Sepolia", 11155111, "ETH", "https://ethereum-sepolia-rpc.publicnode.com", EthereumTestnet),
    EvmNetwork::new("Holesky", 17000, "ETH", "https://ethereum-holesky-rpc.publicnode.com", EthereumTestnet),
    EvmNetwork::new("Optimism", 10, "ETH", "https://mainnet.optimism.io", L2Mainnet),
    EvmNetwork::new("Base", 8453, "ETH", "https://mainnet.base.org", L2Mainnet),
    EvmNetwork::new("Arbitrum One", 42161, "ETH", "https://arb1.arbitrum.io/rpc", L2Mainnet),
    EvmNetwork::new("Polygon", 137, "POL", "https://polygon-rpc.com", L2Mainnet),
    EvmNetwork::new("BNB Chain", 56, "BNB", "https://bsc-dataseed.binance.org", OtherMainnet),
    EvmNetwork::new("Avalanche C-Chain", 43114, "AVAX", "https://avalanche-c-chain-rpc.publicnode.com", OtherMainnet),
];

/// Find a network by chain ID
pub fn find_network_by_chain_id(chain_id: u64) -> Option<&'static EvmNetwork> {
    NETWORKS.iter().find(|n| n.chain_id == chain_id)
}

/// Find the index of a network in NETWORKS by chain ID
pub fn find_network_index(chain_id: u64) -> Option<usize> {
    NETWORKS.iter().position(|n| n.chain_id == chain_id)
}

/// Base URL of the block explorer for a chain, if it has a public one.
pub fn get_block_explorer_url(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        1 => Some("https://etherscan.io"),
        11155111 => Some("https://sepolia.etherscan.io"),
        17000 => Some("https://holesky.etherscan.io"),
        10 => Some("https://optimistic.etherscan.io"),
        8453 => Some("https://basescan.org"),
        42161 => Some("https://arbiscan.io"),
        137 => Some("https://polygonscan.com"),
        56 => Some("https://bscscan.com"),
        43114 => Some("https://snowtrace.io"),
        _ => None,
    }
}

/// Get the full URL to view a transaction on the block explorer
pub fn get_tx_explorer_url(chain_id: u64, tx_hash: &str) -> Option<String> {
    get_block_explorer_url(chain_id).map(|base| format!("{}/tx/{}", base, tx_hash))
}

/// Get the full URL to view an address on the block explorer
pub fn get_address_explorer_url(chain_id: u64, address: &str) -> Option<String> {
    get_block_explorer_url(chain_id).map(|base| format!("{}/address/{}", base, address))
}

#[derive(Clone, Debug)]
pub struct Config {
    pub rpc_url: String,
    pub chain_id: u64,
    // Overrides for custom networks
    pub native_token_override: Option<String>,
    pub label_override: Option<String>,
}

impl Config {
    pub fn new(rpc_url: String, chain_id: u64) -> Self {
        Self {
            rpc_url,
            chain_id,
            native_token_override: None,
            label_override: None,
        }
    }

    pub fn from_network(network: &EvmNetwork) -> Self {
        Self::new(network.default_rpc.to_string(), network.chain_id)
    }

    /// Create config from a custom network
    pub fn from_custom_network(network: &crate::user_settings::CustomNetwork) -> Self {
        let mut config = Self::new(network.rpc_url.clone(), network.chain_id);
        config.native_token_override = Some(network.native_token.clone());
        config.label_override = Some(network.label.clone());
        config
    }

    /// Apply `WALLET_CHAIN_ID` / `WALLET_RPC_URL` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(env::var(CHAIN_ID_ENV).ok(), env::var(RPC_URL_ENV).ok())
    }

    /// A chain override switches to that network's default endpoint; an RPC
    /// override then replaces the endpoint. Unparsable or blank values are ignored.
    pub fn with_overrides(mut self, chain_id: Option<String>, rpc_url: Option<String>) -> Self {
        if let Some(chain_id) = chain_id.and_then(|v| v.trim().parse::<u64>().ok()) {
            self = match find_network_by_chain_id(chain_id) {
                Some(network) => Self::from_network(network),
                None => Self::new(self.rpc_url, chain_id),
            };
        }
        if let Some(rpc_url) = rpc_url.filter(|v| !v.trim().is_empty()) {
            self.rpc_url = rpc_url.trim().to_string();
        }
        self
    }

    pub fn native_token(&self) -> &str {
        if let Some(ref token) = self.native_token_override {
            token.as_str()
        } else {
            find_network_by_chain_id(self.chain_id)
                .map(|n| n.native_token)
                .unwrap_or("ETH")
        }
    }

    pub fn network_label(&self) -> &str {
        if let Some(ref label) = self.label_override {
            label.as_str()
        } else {
            find_network_by_chain_id(self.chain_id)
                .map(|n| n.label)
                .unwrap_or("Unknown")
        }
    }

    /// Provider for the configured endpoint, or `ProviderUnavailable`.
    pub fn wallet_provider(&self) -> Result<RpcWalletProvider, WalletError> {
        RpcWalletProvider::connect(&self.rpc_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8545".to_string(), LOCAL_CHAIN_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== network table tests ====================

    #[test]
    fn test_find_network_by_chain_id_ethereum() {
        let network = find_network_by_chain_id(1).unwrap();
        assert_eq!(network.label, "Ethereum");
        assert_eq!(network.native_token, "ETH");
    }

    #[test]
    fn test_find_network_by_chain_id_not_found() {
        assert!(find_network_by_chain_id(999999).is_none());
    }

    #[test]
    fn test_find_network_index_local_first() {
        assert_eq!(find_network_index(LOCAL_CHAIN_ID), Some(0));
        assert!(find_network_index(999999).is_none());
    }

    #[test]
    fn test_chain_ids_unique() {
        for (i, a) in NETWORKS.iter().enumerate() {
            for b in &NETWORKS[i + 1..] {
                assert_ne!(a.chain_id, b.chain_id, "{} and {}", a.label, b.label);
            }
        }
    }

    #[test]
    fn test_tx_explorer_url() {
        assert_eq!(
            get_tx_explorer_url(11155111, "0xabc").as_deref(),
            Some("https://sepolia.etherscan.io/tx/0xabc")
        );
        assert!(get_tx_explorer_url(LOCAL_CHAIN_ID, "0xabc").is_none());
    }

    #[test]
    fn test_address_explorer_url() {
        assert_eq!(
            get_address_explorer_url(1, "0xdef").as_deref(),
            Some("https://etherscan.io/address/0xdef")
        );
    }

    // ==================== Config tests ====================

    #[test]
    fn test_config_default_is_local_node() {
        let config = Config::default();
        assert_eq!(config.chain_id, LOCAL_CHAIN_ID);
        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.network_label(), "Localhost");
    }

    #[test]
    fn test_config_native_token_polygon() {
        let config = Config::new("https://polygon-rpc.com".to_string(), 137);
        assert_eq!(config.native_token(), "POL");
    }

    #[test]
    fn test_config_overrides_for_unknown_chain() {
        let mut config = Config::new("https://example.com".to_string(), 999999);
        assert_eq!(config.native_token(), "ETH");
        assert_eq!(config.network_label(), "Unknown");
        config.native_token_override = Some("CUSTOM".to_string());
        config.label_override = Some("My Chain".to_string());
        assert_eq!(config.native_token(), "CUSTOM");
        assert_eq!(config.network_label(), "My Chain");
    }

    #[test]
    fn test_with_overrides_chain_then_rpc() {
        let config = Config::default()
            .with_overrides(Some("137".into()), Some(" http://10.0.0.2:8545 ".into()));
        assert_eq!(config.chain_id, 137);
        assert_eq!(config.rpc_url, "http://10.0.0.2:8545");
    }

    #[test]
    fn test_with_overrides_chain_only_uses_default_rpc() {
        let config = Config::default().with_overrides(Some("11155111".into()), None);
        assert_eq!(config.rpc_url, "https://ethereum-sepolia-rpc.publicnode.com");
    }

    #[test]
    fn test_with_overrides_ignores_garbage() {
        let config = Config::default().with_overrides(Some("abc".into()), Some("  ".into()));
        assert_eq!(config.chain_id, LOCAL_CHAIN_ID);
        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
    }

    #[test]
    fn test_wallet_provider_invalid_url() {
        let config = Config::new("::nope::".to_string(), 1);
        assert!(matches!(
            config.wallet_provider(),
            Err(WalletError::ProviderUnavailable(_))
        ));
    }
}
