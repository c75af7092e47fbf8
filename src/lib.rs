//! Desktop EVM wallet page.
//!
//! Connects to a wallet-backed JSON-RPC endpoint, shows the account balance and
//! sends native asset. Signing stays with the endpoint.

pub mod balance;
pub mod config;
pub mod connector;
pub mod error;
pub mod gui;
pub mod operation_log;
pub mod provider;
pub mod transfer;
pub mod types;
pub mod user_settings;
pub mod utils;
pub mod wallet_page;

#[cfg(test)]
pub(crate) mod mock_provider;

pub use error::WalletError;
