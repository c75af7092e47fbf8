//! State of the wallet page, independent of how it is drawn.
//!
//! The GUI forwards user actions and finished provider calls into
//! [`WalletPage`] and renders whatever it holds. All transitions are
//! synchronous; provider calls happen outside, between `prepare_*` and
//! `finish_*`.

use crate::{
    error::WalletError,
    transfer,
    types::{SendReceipt, TransferRequest},
    utils,
};
use ethers::prelude::*;
use std::time::{Duration, Instant};

pub const CONNECT_SUCCESS_TTL: Duration = Duration::from_secs(3);
pub const SEND_SUCCESS_TTL: Duration = Duration::from_secs(5);
pub const COPY_SUCCESS_TTL: Duration = Duration::from_secs(2);

/// Transient status line shown under the page content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(String),
}

/// Progress of a single send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Confirmed,
    Failed,
}

/// Which parts of the page are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisiblePanels {
    pub connect_prompt: bool,
    pub account: bool,
    pub send: bool,
    pub receive: bool,
}

/// The account and page generation a balance read was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceTicket {
    account: Address,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct WalletPage {
    account: Option<Address>,
    /// Formatted result of the last successful read for `account`.
    balance: Option<String>,
    pub recipient_input: String,
    pub amount_input: String,
    status: UiStatus,
    status_expires_at: Option<Instant>,
    send_phase: SendPhase,
    last_tx: Option<TxHash>,
    /// Bumped whenever earlier balance reads become outdated.
    balance_generation: u64,
}

impl WalletPage {
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn balance(&self) -> Option<&str> {
        self.balance.as_deref()
    }

    pub fn status(&self) -> &UiStatus {
        &self.status
    }

    pub fn send_phase(&self) -> SendPhase {
        self.send_phase
    }

    pub fn last_tx(&self) -> Option<TxHash> {
        self.last_tx
    }

    pub fn visible_panels(&self) -> VisiblePanels {
        let connected = self.is_connected();
        VisiblePanels {
            connect_prompt: !connected,
            account: connected,
            send: connected,
            receive: connected,
        }
    }

    /// Submit is possible only with both inputs filled and nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.is_connected()
            && self.send_phase != SendPhase::Submitting
            && !self.recipient_input.trim().is_empty()
            && !self.amount_input.trim().is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.status == UiStatus::Loading
    }

    fn set_status(&mut self, status: UiStatus, ttl: Option<Duration>, now: Instant) {
        self.status = status;
        self.status_expires_at = ttl.map(|ttl| now + ttl);
    }

    fn set_error(&mut self, err: &WalletError) {
        if err.is_validation() {
            tracing::debug!("Rejected input: {}", err);
        } else {
            tracing::warn!("Wallet action failed: {}", err);
        }
        self.status = UiStatus::Error(err.to_string());
        self.status_expires_at = None;
    }

    /// Expire timed messages and settle a finished send back to idle.
    pub fn tick(&mut self, now: Instant) {
        if let Some(expires_at) = self.status_expires_at {
            if now >= expires_at {
                self.status = UiStatus::Idle;
                self.status_expires_at = None;
            }
        }
        if matches!(self.send_phase, SendPhase::Confirmed | SendPhase::Failed) {
            self.send_phase = SendPhase::Idle;
        }
    }

    // ==================== connect ====================

    pub fn begin_connect(&mut self, now: Instant) {
        self.set_status(UiStatus::Loading, None, now);
    }

    pub fn finish_connect(&mut self, result: Result<Address, WalletError>, now: Instant) {
        match result {
            Ok(address) => {
                self.account = Some(address);
                self.balance = None;
                self.balance_generation += 1;
                self.set_status(
                    UiStatus::Success("Wallet connected successfully!".to_string()),
                    Some(CONNECT_SUCCESS_TTL),
                    now,
                );
            }
            Err(err) => self.set_error(&err),
        }
    }

    /// Forget the session, e.g. after the provider changed.
    pub fn reset(&mut self) {
        let generation = self.balance_generation + 1;
        *self = Self::default();
        self.balance_generation = generation;
    }

    // ==================== balance ====================

    /// Ticket to tag a balance read with, or `None` when disconnected.
    pub fn balance_ticket(&self) -> Option<BalanceTicket> {
        self.account.map(|account| BalanceTicket {
            account,
            generation: self.balance_generation,
        })
    }

    /// Apply a balance read issued with `ticket`. Reads for another account,
    /// or issued before a reconnect or a completed send, are stale and ignored.
    pub fn apply_balance(&mut self, ticket: BalanceTicket, result: Result<U256, WalletError>) {
        if self.balance_ticket() != Some(ticket) {
            tracing::debug!("Dropping stale balance read for {:?}", ticket.account);
            return;
        }
        match result {
            Ok(wei) => self.balance = Some(utils::format_balance(wei)),
            Err(err) => self.set_error(&err),
        }
    }

    // ==================== send ====================

    /// Validate the form. On success the page is `Submitting` and the caller
    /// must hand the request to the provider; on failure nothing is submitted.
    pub fn prepare_send(&mut self, now: Instant) -> Result<TransferRequest, WalletError> {
        if !self.is_connected() {
            self.set_error(&WalletError::NotConnected);
            return Err(WalletError::NotConnected);
        }
        self.send_phase = SendPhase::Validating;
        match transfer::validate_transfer(&self.recipient_input, &self.amount_input) {
            Ok(request) => {
                self.send_phase = SendPhase::Submitting;
                self.set_status(UiStatus::Loading, None, now);
                Ok(request)
            }
            Err(err) => {
                self.send_phase = SendPhase::Idle;
                self.set_error(&err);
                Err(err)
            }
        }
    }

    pub fn finish_send(
        &mut self,
        result: Result<SendReceipt, WalletError>,
        native_token: &str,
        now: Instant,
    ) {
        match result {
            Ok(receipt) => {
                self.send_phase = SendPhase::Confirmed;
                self.last_tx = Some(receipt.tx_hash);
                self.recipient_input.clear();
                self.amount_input.clear();
                self.set_status(
                    UiStatus::Success(format!(
                        "Successfully sent {} {}!",
                        receipt.amount_native, native_token
                    )),
                    Some(SEND_SUCCESS_TTL),
                    now,
                );
                // Reads issued before the send are older than this refresh.
                self.balance_generation += 1;
                match receipt.refreshed_balance {
                    Ok(wei) if self.account.is_some() => {
                        self.balance = Some(utils::format_balance(wei));
                    }
                    Ok(_) => {}
                    // The send went through; keep its success message.
                    Err(err) => tracing::warn!("Post-send balance refresh failed: {}", err),
                }
            }
            Err(err) => {
                self.send_phase = SendPhase::Failed;
                self.set_error(&err);
            }
        }
    }

    // ==================== copy ====================

    /// Text to put on the clipboard, or `None` when disconnected.
    pub fn copy_address(&mut self, now: Instant) -> Option<String> {
        let account = self.account?;
        self.set_status(
            UiStatus::Success("Address copied to clipboard!".to_string()),
            Some(COPY_SUCCESS_TTL),
            now,
        );
        Some(utils::address_hex(&account))
    }
}
