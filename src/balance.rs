use crate::{error::WalletError, provider::WalletProvider, utils};
use ethers::prelude::*;
use tracing::warn;

/// Read the native balance of `address` in wei.
///
/// Any provider failure becomes `WalletError::Read` with the underlying detail.
pub async fn read_balance<P: WalletProvider>(
    provider: &P,
    address: Address,
) -> Result<U256, WalletError> {
    provider.get_balance(address).await.map_err(|err| {
        warn!("Balance read for {} failed: {}", utils::address_hex(&address), err);
        match err {
            WalletError::Read(detail) => WalletError::Read(detail),
            WalletError::Network(detail) => WalletError::Read(detail),
            other => WalletError::Read(other.to_string()),
        }
    })
}
