//! In-memory provider for unit tests. Records every call it receives.

use crate::error::WalletError;
use crate::provider::WalletProvider;
use ethers::types::{Address, TransactionRequest, TxHash, U256};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct MockState {
    pub accounts: Vec<Address>,
    pub balance: U256,
    pub gas_price: U256,
    pub gas_estimate: U256,
    pub tx_hash: TxHash,
    pub request_error: Option<WalletError>,
    pub balance_error: Option<WalletError>,
    pub estimate_error: Option<WalletError>,
    pub send_error: Option<WalletError>,
    pub calls: Vec<&'static str>,
    pub sent: Vec<TransactionRequest>,
}

#[derive(Clone, Debug, Default)]
pub struct MockProvider {
    pub state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    pub fn with_account(account: Address, balance: U256) -> Self {
        let mock = Self::default();
        {
            let mut state = mock.state.lock().unwrap();
            state.accounts = vec![account];
            state.balance = balance;
            state.gas_price = U256::from(1_000_000_000u64);
            state.gas_estimate = U256::from(21_000u64);
            state.tx_hash = TxHash::repeat_byte(0xab);
        }
        mock
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls().iter().filter(|c| **c == method).count()
    }

    fn record(&self, method: &'static str) {
        self.state.lock().unwrap().calls.push(method);
    }
}

impl WalletProvider for MockProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.record("request_accounts");
        let state = self.state.lock().unwrap();
        match &state.request_error {
            Some(err) => Err(err.clone()),
            None => Ok(state.accounts.clone()),
        }
    }

    async fn get_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.record("get_accounts");
        Ok(self.state.lock().unwrap().accounts.clone())
    }

    async fn get_balance(&self, _address: Address) -> Result<U256, WalletError> {
        self.record("get_balance");
        let state = self.state.lock().unwrap();
        match &state.balance_error {
            Some(err) => Err(err.clone()),
            None => Ok(state.balance),
        }
    }

    async fn get_gas_price(&self) -> Result<U256, WalletError> {
        self.record("get_gas_price");
        Ok(self.state.lock().unwrap().gas_price)
    }

    async fn estimate_gas(&self, _tx: &TransactionRequest) -> Result<U256, WalletError> {
        self.record("estimate_gas");
        let state = self.state.lock().unwrap();
        match &state.estimate_error {
            Some(err) => Err(err.clone()),
            None => Ok(state.gas_estimate),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        self.record("send_transaction");
        let mut state = self.state.lock().unwrap();
        if let Some(err) = &state.send_error {
            return Err(err.clone());
        }
        state.sent.push(tx);
        Ok(state.tx_hash)
    }
}
