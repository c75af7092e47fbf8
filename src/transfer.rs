//! Native-asset transfers.
//!
//! Validation is purely local and runs before any provider call. Submission
//! fetches the gas price, estimates gas, then hands the transaction to the
//! wallet. There is no retry: a failed send is resubmitted by the user.

use crate::{
    balance,
    connector::WalletSession,
    error::WalletError,
    provider::WalletProvider,
    types::{SendReceipt, TransferRequest},
    utils,
};
use ethers::prelude::*;
use tracing::{info, warn};

/// Turn raw form inputs into a [`TransferRequest`].
pub fn validate_transfer(recipient: &str, amount: &str) -> Result<TransferRequest, WalletError> {
    if recipient.trim().is_empty() || amount.trim().is_empty() {
        return Err(WalletError::MissingFields);
    }
    let recipient = utils::parse_address(recipient)?;
    let amount_wei = utils::parse_native_amount(amount)?;
    Ok(TransferRequest {
        recipient,
        amount_native: amount.trim().to_string(),
        amount_wei,
    })
}

/// Submit `request` from the session account and return the transaction hash.
pub async fn execute<P: WalletProvider>(
    session: &WalletSession<P>,
    request: &TransferRequest,
) -> Result<TxHash, WalletError> {
    let provider = session.provider();
    let from = session.address();

    let gas_price = provider.get_gas_price().await?;
    let draft = TransactionRequest::new()
        .from(from)
        .to(request.recipient)
        .value(request.amount_wei);
    let gas = provider.estimate_gas(&draft).await?;

    let tx = draft.gas(gas).gas_price(gas_price);
    let tx_hash = provider.send_transaction(tx).await?;

    info!(
        "Sent {} from {} to {} (gas {}, gas price {}): {:?}",
        utils::format_ether(request.amount_wei),
        utils::address_hex(&from),
        utils::address_hex(&request.recipient),
        gas,
        gas_price,
        tx_hash
    );
    Ok(tx_hash)
}

/// Send, then refresh the sender's balance exactly once.
///
/// A failed refresh does not fail the send; it is reported in the receipt.
pub async fn submit<P: WalletProvider>(
    session: WalletSession<P>,
    request: TransferRequest,
) -> Result<SendReceipt, WalletError> {
    let tx_hash = execute(&session, &request).await.map_err(|err| {
        warn!("Send of {} failed: {}", request.amount_native, err);
        err
    })?;
    let refreshed_balance = balance::read_balance(session.provider(), session.address()).await;
    Ok(SendReceipt {
        tx_hash,
        amount_native: request.amount_native,
        refreshed_balance,
    })
}
