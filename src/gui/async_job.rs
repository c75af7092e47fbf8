//! One-shot background jobs polled from the GUI thread.

use crate::error::WalletError;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tokio::runtime::Builder;

/// Helper struct for async jobs - polls a background task
pub struct AsyncJob<T> {
    receiver: Option<Receiver<Result<T, WalletError>>>,
}

impl<T: Send + 'static> AsyncJob<T> {
    /// Run the future built by `builder` on its own thread with a
    /// current-thread runtime. The future itself need not be `Send`.
    pub fn spawn<FutBuilder, Fut>(builder: FutBuilder) -> Self
    where
        FutBuilder: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<T, WalletError>> + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(builder()),
                Err(e) => {
                    tracing::error!("Failed to create async runtime: {}", e);
                    Err(WalletError::Network(format!("failed to create async runtime: {}", e)))
                }
            };
            let _ = tx.send(result);
        });
        Self::new(rx)
    }
}

impl<T> AsyncJob<T> {
    /// Create a new async job with the given receiver
    pub fn new(receiver: Receiver<Result<T, WalletError>>) -> Self {
        Self {
            receiver: Some(receiver),
        }
    }

    /// Returns Some(result) once the job has finished, None while it runs
    pub fn poll(&mut self) -> Option<Result<T, WalletError>> {
        if let Some(rx) = &self.receiver {
            match rx.try_recv() {
                Ok(res) => {
                    self.receiver = None;
                    return Some(res);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.receiver = None;
                    return Some(Err(WalletError::Network(
                        "worker task disconnected".to_string(),
                    )));
                }
            }
        }
        None
    }

    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }
}
