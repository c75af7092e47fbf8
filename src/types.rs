//! Common types shared across modules.

use crate::error::WalletError;
use ethers::prelude::*;

/// A validated send, built from the form inputs right before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub recipient: Address,
    /// Amount as the user typed it, for messages and the log.
    pub amount_native: String,
    pub amount_wei: U256,
}

/// Outcome of a confirmed send.
#[derive(Debug, Clone)]
pub struct SendReceipt {
    pub tx_hash: TxHash,
    pub amount_native: String,
    /// The single balance read performed after the send.
    pub refreshed_balance: Result<U256, WalletError>,
}
