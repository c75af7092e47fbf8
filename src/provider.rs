//! Wallet provider capability.
//!
//! The wallet page only talks to the network through [`WalletProvider`]. The
//! production implementation wraps an ethers `Provider<Http>` pointed at a
//! wallet-backed endpoint: the endpoint owns the keys, lists its accounts and
//! signs on `eth_sendTransaction`. This crate never signs anything itself.

use crate::error::{classify_rpc_failure, WalletError, METHOD_NOT_FOUND_CODE};
use ethers::providers::{Http, JsonRpcClient, Middleware, Provider, ProviderError, RpcError};
use ethers::types::transaction::eip2718::TypedTransaction;
use ethers::types::{Address, TransactionRequest, TxHash, U256};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Operations the wallet page needs from a provider.
///
/// Every call is a single request with no retry and no timeout.
#[allow(async_fn_in_trait)]
pub trait WalletProvider: Clone + Send + Sync + 'static {
    /// Ask the wallet for access to its accounts (may prompt the user).
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    async fn get_accounts(&self) -> Result<Vec<Address>, WalletError>;

    async fn get_balance(&self, address: Address) -> Result<U256, WalletError>;

    async fn get_gas_price(&self) -> Result<U256, WalletError>;

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<U256, WalletError>;

    /// Hand a fully specified transaction to the wallet for signing and broadcast.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError>;
}

/// [`WalletProvider`] backed by a JSON-RPC endpoint, over HTTP by default.
#[derive(Debug)]
pub struct RpcWalletProvider<C: JsonRpcClient = Http> {
    provider: Arc<Provider<C>>,
    endpoint: String,
}

impl<C: JsonRpcClient> Clone for RpcWalletProvider<C> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            endpoint: self.endpoint.clone(),
        }
    }
}

impl RpcWalletProvider {
    /// Build a provider for `rpc_url`. Nothing is sent until the first call.
    pub fn connect(rpc_url: &str) -> Result<Self, WalletError> {
        let trimmed = rpc_url.trim();
        if trimmed.is_empty() {
            return Err(WalletError::ProviderUnavailable(
                "no RPC endpoint configured".to_string(),
            ));
        }
        let url = Url::parse(trimmed).map_err(|e| {
            WalletError::ProviderUnavailable(format!("invalid RPC URL '{}': {}", trimmed, e))
        })?;
        let provider = Provider::<Http>::try_from(url.as_str()).map_err(|e| {
            WalletError::ProviderUnavailable(format!("invalid RPC URL '{}': {}", trimmed, e))
        })?;
        Ok(Self::from_provider(provider, url.to_string()))
    }
}

impl<C: JsonRpcClient> RpcWalletProvider<C> {
    /// Wrap an existing ethers provider; `endpoint` is only used in logs.
    pub fn from_provider(provider: Provider<C>, endpoint: impl Into<String>) -> Self {
        Self {
            provider: Arc::new(provider),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn error_code(err: &ProviderError) -> Option<i64> {
    err.as_error_response().map(|resp| resp.code)
}

fn rpc_failure(err: ProviderError) -> WalletError {
    match err.as_error_response() {
        Some(resp) => classify_rpc_failure(Some(resp.code), &resp.message),
        None => classify_rpc_failure(None, &err.to_string()),
    }
}

impl<C: JsonRpcClient + 'static> WalletProvider for RpcWalletProvider<C> {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        debug!("eth_requestAccounts via {}", self.endpoint);
        match self
            .provider
            .request::<_, Vec<Address>>("eth_requestAccounts", ())
            .await
        {
            Ok(accounts) => Ok(accounts),
            Err(err) if error_code(&err) == Some(METHOD_NOT_FOUND_CODE) => {
                info!(
                    "{} does not implement eth_requestAccounts, using eth_accounts",
                    self.endpoint
                );
                self.get_accounts().await
            }
            Err(err) => Err(rpc_failure(err)),
        }
    }

    async fn get_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.provider.get_accounts().await.map_err(rpc_failure)
    }

    async fn get_balance(&self, address: Address) -> Result<U256, WalletError> {
        self.provider
            .get_balance(address, None)
            .await
            .map_err(rpc_failure)
    }

    async fn get_gas_price(&self) -> Result<U256, WalletError> {
        self.provider.get_gas_price().await.map_err(rpc_failure)
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<U256, WalletError> {
        let typed: TypedTransaction = tx.clone().into();
        self.provider
            .estimate_gas(&typed, None)
            .await
            .map_err(rpc_failure)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        let pending = self
            .provider
            .send_transaction(tx, None)
            .await
            .map_err(rpc_failure)?;
        Ok(pending.tx_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::providers::{JsonRpcError, MockProvider as MockTransport, MockResponse};

    fn mocked() -> (RpcWalletProvider<MockTransport>, MockTransport) {
        let (provider, transport) = Provider::mocked();
        (RpcWalletProvider::from_provider(provider, "mock"), transport)
    }

    fn rpc_error(code: i64, message: &str) -> MockResponse {
        MockResponse::Error(JsonRpcError {
            code,
            message: message.to_string(),
            data: None,
        })
    }

    #[test]
    fn test_connect_empty_url_is_unavailable() {
        let err = RpcWalletProvider::connect("   ").unwrap_err();
        assert!(matches!(err, WalletError::ProviderUnavailable(_)));
    }

    #[test]
    fn test_connect_invalid_url_is_unavailable() {
        let err = RpcWalletProvider::connect("not a url").unwrap_err();
        assert!(matches!(err, WalletError::ProviderUnavailable(_)));
    }

    #[test]
    fn test_connect_valid_url() {
        let provider = RpcWalletProvider::connect("http://127.0.0.1:8545").unwrap();
        assert_eq!(provider.endpoint(), "http://127.0.0.1:8545/");
    }

    // ==================== JSON-RPC behaviour ====================
    // The mock transport answers with the most recently pushed response first.

    #[test]
    fn test_request_accounts_uses_eth_request_accounts() {
        let (provider, transport) = mocked();
        let account = Address::repeat_byte(0x11);
        transport.push::<Vec<Address>, _>(vec![account]).unwrap();

        let accounts = tokio_test::block_on(provider.request_accounts()).unwrap();

        assert_eq!(accounts, vec![account]);
        transport.assert_request("eth_requestAccounts", ()).unwrap();
    }

    #[test]
    fn test_request_accounts_falls_back_on_method_not_found() {
        let (provider, transport) = mocked();
        let account = Address::repeat_byte(0x22);
        transport.push::<Vec<Address>, _>(vec![account]).unwrap();
        transport.push_response(rpc_error(
            METHOD_NOT_FOUND_CODE,
            "the method eth_requestAccounts does not exist",
        ));

        let accounts = tokio_test::block_on(provider.request_accounts()).unwrap();

        assert_eq!(accounts, vec![account]);
        transport.assert_request("eth_requestAccounts", ()).unwrap();
        transport.assert_request("eth_accounts", ()).unwrap();
    }

    #[test]
    fn test_request_accounts_user_rejected() {
        let (provider, transport) = mocked();
        transport.push_response(rpc_error(4001, "User rejected the request."));

        let err = tokio_test::block_on(provider.request_accounts()).unwrap_err();

        assert_eq!(err, WalletError::UserRejected);
    }

    #[test]
    fn test_estimate_gas_insufficient_funds() {
        let (provider, transport) = mocked();
        transport.push_response(rpc_error(
            -32000,
            "insufficient funds for gas * price + value",
        ));
        let tx = TransactionRequest::new()
            .from(Address::repeat_byte(1))
            .to(Address::repeat_byte(2))
            .value(U256::exp10(18));

        let err = tokio_test::block_on(provider.estimate_gas(&tx)).unwrap_err();

        assert_eq!(err, WalletError::InsufficientFunds);
    }

    #[test]
    fn test_other_rpc_error_is_network() {
        let (provider, transport) = mocked();
        transport.push_response(rpc_error(-32603, "internal error"));

        let err = tokio_test::block_on(provider.get_gas_price()).unwrap_err();

        assert_eq!(err, WalletError::Network("internal error".to_string()));
    }

    #[test]
    fn test_transport_failure_is_network() {
        // No response queued: the transport itself fails.
        let (provider, _transport) = mocked();

        let err = tokio_test::block_on(provider.get_balance(Address::repeat_byte(3))).unwrap_err();

        assert!(matches!(err, WalletError::Network(_)));
    }
}
