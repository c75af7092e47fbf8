//! Error taxonomy for wallet operations.
//!
//! Every failure that can reach the wallet page is one of these variants. The
//! `Display` text is what the page shows the user.

use thiserror::Error;

/// JSON-RPC error code a wallet returns when the user declines a request (EIP-1193).
pub const USER_REJECTED_CODE: i64 = 4001;

/// JSON-RPC error code for a method the endpoint does not implement.
pub const METHOD_NOT_FOUND_CODE: i64 = -32601;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("No wallet provider available: {0}")]
    ProviderUnavailable(String),

    #[error("Request rejected by user")]
    UserRejected,

    #[error("Invalid Ethereum address")]
    InvalidAddress,

    #[error("Please enter recipient address and amount")]
    MissingFields,

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Insufficient funds for amount plus gas")]
    InsufficientFunds,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to load balance: {0}")]
    Read(String),

    #[error("The wallet provider exposed no accounts")]
    NoAccounts,

    #[error("Wallet not connected")]
    NotConnected,
}

impl WalletError {
    /// Validation errors are raised before any provider call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WalletError::InvalidAddress | WalletError::MissingFields | WalletError::InvalidAmount(_)
        )
    }
}

/// Map a failed provider call onto the taxonomy.
///
/// `code` is the JSON-RPC error code when the endpoint answered with an error
/// object, `None` for transport failures.
pub fn classify_rpc_failure(code: Option<i64>, message: &str) -> WalletError {
    let lower = message.to_lowercase();
    if code == Some(USER_REJECTED_CODE)
        || lower.contains("user denied")
        || lower.contains("user rejected")
    {
        return WalletError::UserRejected;
    }
    if lower.contains("insufficient funds") {
        return WalletError::InsufficientFunds;
    }
    WalletError::Network(message.to_string())
}
