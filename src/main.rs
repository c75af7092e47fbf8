#![windows_subsystem = "windows"]

use anyhow::Result;
use ethwallet::{gui, user_settings::UserSettings};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // Saved network first, then WALLET_CHAIN_ID / WALLET_RPC_URL from the environment
    let config = UserSettings::load().selected_config().with_env_overrides();
    tracing::info!(
        "Starting on {} (chain {}) via {}",
        config.network_label(),
        config.chain_id,
        config.rpc_url
    );
    gui::launch(config)?;

    Ok(())
}
