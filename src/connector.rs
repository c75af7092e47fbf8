use crate::{error::WalletError, provider::WalletProvider, utils};
use ethers::types::Address;
use tracing::{info, warn};

/// The connected account together with the provider that exposed it.
#[derive(Clone, Debug)]
pub struct WalletSession<P> {
    address: Address,
    provider: P,
}

impl<P: WalletProvider> WalletSession<P> {
    pub fn address(&self) -> Address {
        self.address
    }

    /// Lowercase `0x` hex form, as copied to the clipboard.
    pub fn address_hex(&self) -> String {
        utils::address_hex(&self.address)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

/// Request account access and open a session on the first account.
///
/// Transport failures mean there is no usable provider and surface as
/// `ProviderUnavailable`; a declined prompt stays `UserRejected`.
pub async fn connect<P: WalletProvider>(provider: P) -> Result<WalletSession<P>, WalletError> {
    provider.request_accounts().await.map_err(|err| match err {
        WalletError::Network(msg) => WalletError::ProviderUnavailable(msg),
        other => other,
    })?;

    let accounts = provider.get_accounts().await?;
    let Some(address) = accounts.first().copied() else {
        warn!("Provider granted access but listed no accounts");
        return Err(WalletError::NoAccounts);
    };

    info!("Connected wallet {}", utils::address_hex(&address));
    Ok(WalletSession { address, provider })
}
