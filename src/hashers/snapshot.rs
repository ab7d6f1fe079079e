// snapshot.rs - Before/after content check for a swap batch

use std::path::Path;

use super::sha256::Sha256Hasher;
use crate::core::{CancellationToken, SwapPlan};
use crate::error::{Result, SwapError};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PairDigests {
    source: String,
    destination: String,
}

/// Digests of every pair's files, taken before any rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSnapshot {
    digests: Vec<PairDigests>,
}

impl ContentSnapshot {
    /// Hash both files of every pair.
    ///
    /// Only regular files carry content; anything else (directories, special files)
    /// is recorded with an empty digest and skipped by [`ContentSnapshot::verify_swapped`].
    /// Nothing has been renamed yet, so an interrupt here reports zero completed pairs.
    pub fn capture(plan: &SwapPlan, hasher: &Sha256Hasher, cancel: &CancellationToken) -> Result<Self> {
        let total = plan.len();
        let mut digests = Vec::with_capacity(total);
        for pair in plan.pairs() {
            let source = digest_if_file(&pair.source, hasher)?;
            stop_if_cancelled(cancel, 0, total)?;
            let destination = digest_if_file(&pair.destination, hasher)?;
            stop_if_cancelled(cancel, 0, total)?;
            digests.push(PairDigests { source, destination });
        }
        Ok(Self { digests })
    }

    /// Check that each destination now holds its source's old content and vice versa.
    ///
    /// Runs after every pair was swapped; an interrupt stops the check early.
    pub fn verify_swapped(&self, plan: &SwapPlan, hasher: &Sha256Hasher, cancel: &CancellationToken) -> Result<()> {
        let total = plan.len();
        for (pair, before) in plan.pairs().iter().zip(&self.digests) {
            stop_if_cancelled(cancel, total, total)?;
            check(&pair.destination, &before.source, hasher)?;
            stop_if_cancelled(cancel, total, total)?;
            check(&pair.source, &before.destination, hasher)?;
        }
        tracing::debug!(pairs = total, hasher = hasher.name(), "content verified");
        Ok(())
    }
}

fn stop_if_cancelled(cancel: &CancellationToken, completed: usize, total: usize) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(SwapError::UserCancelled { completed, total });
    }
    Ok(())
}

fn digest_if_file(path: &Path, hasher: &Sha256Hasher) -> Result<String> {
    if path.is_file() {
        hasher.hash_file(path)
    } else {
        Ok(String::new())
    }
}

fn check(path: &Path, expected: &str, hasher: &Sha256Hasher) -> Result<()> {
    if expected.is_empty() {
        return Ok(());
    }
    let actual = digest_if_file(path, hasher)?;
    if actual != expected {
        return Err(SwapError::VerifyFailed {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}
