// cancel.rs - Interrupt-to-cancellation bridge

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::Result;

/// Shared flag checked by the executor before each pair
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Route SIGINT (Ctrl-C) into a fresh token.
///
/// Can only be installed once per process.
pub fn install_interrupt_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handle = token.clone();
    ctrlc::set_handler(move || {
        tracing::debug!("interrupt received, stopping before the next pair");
        handle.cancel();
    })?;
    Ok(token)
}
