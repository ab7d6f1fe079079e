// swap.rs - Swap executor

//! Exchanges the names of every pair in a [`SwapPlan`].
//!
//! Each pair goes through three renames: source to its temporary name,
//! destination to source, temporary name to destination. A pair is finished
//! completely before the next one starts, so an interrupt or a failure leaves
//! whole pairs swapped or untouched. Completed pairs are never rolled back.

use std::fs;
use std::io::{self, Write};

use crate::cli::SwapConfig;
use crate::core::cancel::CancellationToken;
use crate::core::pair::{entry_exists, Pair, RenameStep, SwapPlan};
use crate::error::{Result, SwapError};
use crate::hashers::{ContentSnapshot, Sha256Hasher};
use crate::output::write_plan;

/// Outcome of a successful batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapReport {
    pub swapped: usize,
    pub verified: bool,
}

pub struct SwapEngine {
    cancel: CancellationToken,
    verify: bool,
}

impl SwapEngine {
    pub fn new(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            verify: false,
        }
    }

    /// Compare SHA256 digests before and after the batch
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Fail with a collision if any temporary name is already taken.
    ///
    /// Runs before anything is renamed, so a failure here means no changes were made.
    pub fn preflight(&self, plan: &SwapPlan) -> Result<()> {
        match plan.pairs().iter().find(|pair| entry_exists(&pair.temp)) {
            Some(pair) => Err(SwapError::TempNameCollision {
                path: pair.temp.clone(),
                completed: 0,
            }),
            None => Ok(()),
        }
    }

    fn stop_if_cancelled(&self, completed: usize, total: usize) -> Result<()> {
        if self.cancel.is_cancelled() {
            return Err(SwapError::UserCancelled { completed, total });
        }
        Ok(())
    }

    /// Print the renames `execute` would perform, without performing them
    pub fn dry_run<W: Write>(
        &self,
        plan: &SwapPlan,
        config: &SwapConfig,
        command_line: &str,
        writer: &mut W,
    ) -> Result<()> {
        self.preflight(plan)?;
        self.stop_if_cancelled(0, plan.len())?;
        write_plan(writer, plan, config, command_line)?;
        self.stop_if_cancelled(0, plan.len())
    }

    /// Swap every pair of `plan`, stopping at the first problem
    pub fn execute(&self, plan: &SwapPlan) -> Result<SwapReport> {
        self.preflight(plan)?;

        let hasher = Sha256Hasher;
        let snapshot = if self.verify {
            Some(ContentSnapshot::capture(plan, &hasher, &self.cancel)?)
        } else {
            None
        };

        let total = plan.len();
        for (completed, pair) in plan.pairs().iter().enumerate() {
            self.run_pair(pair, completed, total)?;
            tracing::info!(
                source = %pair.source.display(),
                destination = %pair.destination.display(),
                "swapped"
            );
        }

        if let Some(snapshot) = &snapshot {
            snapshot.verify_swapped(plan, &hasher, &self.cancel)?;
        }
        // An interrupt during the last pair is still reported
        self.stop_if_cancelled(total, total)?;

        Ok(SwapReport {
            swapped: total,
            verified: snapshot.is_some(),
        })
    }

    /// Swap one pair, `completed` pairs of `total` being already done
    pub(crate) fn run_pair(&self, pair: &Pair, completed: usize, total: usize) -> Result<()> {
        self.stop_if_cancelled(completed, total)?;
        // The file system may have changed since the preflight
        if entry_exists(&pair.temp) {
            return Err(SwapError::TempNameCollision {
                path: pair.temp.clone(),
                completed,
            });
        }
        swap_pair(pair, completed)
    }
}

fn apply(step: RenameStep<'_>) -> io::Result<()> {
    tracing::debug!(from = %step.from.display(), to = %step.to.display(), "rename");
    fs::rename(step.from, step.to)
}

/// Undo already applied steps, newest first. Returns false if any undo failed.
fn undo(applied: &[RenameStep<'_>]) -> bool {
    applied.iter().rev().all(|step| match apply(step.reversed()) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                from = %step.to.display(),
                to = %step.from.display(),
                error = %e,
                "could not put file back"
            );
            false
        }
    })
}

fn swap_pair(pair: &Pair, completed: usize) -> Result<()> {
    let steps = pair.steps();
    for (done, step) in steps.iter().enumerate() {
        if let Err(source) = apply(*step) {
            let restored = undo(&steps[..done]);
            return Err(SwapError::RenameFailed {
                from: step.from.to_path_buf(),
                to: step.to.to_path_buf(),
                completed,
                restored,
                source,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
        let dir = tempfile::tempdir().unwrap();
        let paths = files
            .iter()
            .map(|(name, content)| {
                let path = dir.path().join(name);
                fs::write(&path, content).unwrap();
                path
            })
            .collect();
        (dir, paths)
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    fn engine() -> SwapEngine {
        SwapEngine::new(CancellationToken::new())
    }

    #[test]
    fn test_swaps_single_pair() {
        let (_dir, paths) = setup(&[("a.txt", "alpha"), ("b.txt", "beta")]);
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");

        let report = engine().execute(&plan).unwrap();

        assert_eq!(report.swapped, 1);
        assert_eq!(read(&paths[0]), "beta");
        assert_eq!(read(&paths[1]), "alpha");
        assert!(!entry_exists(&plan.pairs()[0].temp));
    }

    #[test]
    fn test_swaps_pairs_independently() {
        let (dir, paths) = setup(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");

        engine().execute(&plan).unwrap();

        assert_eq!(read(&dir.path().join("a")), "C");
        assert_eq!(read(&dir.path().join("c")), "A");
        assert_eq!(read(&dir.path().join("b")), "D");
        assert_eq!(read(&dir.path().join("d")), "B");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 4);
    }

    #[test]
    fn test_swap_twice_restores_original() {
        let (_dir, paths) = setup(&[("x", "one"), ("y", "two")]);
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");

        engine().execute(&plan).unwrap();
        engine().execute(&plan).unwrap();

        assert_eq!(read(&paths[0]), "one");
        assert_eq!(read(&paths[1]), "two");
    }

    #[test]
    fn test_collision_before_any_rename() {
        let (dir, paths) = setup(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
        fs::write(dir.path().join("b_swtmp"), "in the way").unwrap();
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");

        let err = engine().execute(&plan).unwrap_err();

        match &err {
            SwapError::TempNameCollision { path, completed } => {
                assert_eq!(path, &dir.path().join("b_swtmp"));
                assert_eq!(*completed, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), 5);
        // Pair (a, c) was not touched either
        assert_eq!(read(&paths[0]), "A");
        assert_eq!(read(&paths[2]), "C");
    }

    #[cfg(unix)]
    #[test]
    fn test_collision_with_dangling_symlink() {
        let (dir, paths) = setup(&[("a", "A"), ("b", "B")]);
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("a_swtmp")).unwrap();
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");

        let err = engine().execute(&plan).unwrap_err();
        assert!(matches!(err, SwapError::TempNameCollision { .. }));
        assert_eq!(read(&paths[0]), "A");
    }

    #[test]
    fn test_cancelled_before_start_changes_nothing() {
        let (_dir, paths) = setup(&[("a", "A"), ("b", "B")]);
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");
        let token = CancellationToken::new();
        token.cancel();

        let err = SwapEngine::new(token).execute(&plan).unwrap_err();

        assert!(matches!(err, SwapError::UserCancelled { completed: 0, total: 1 }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(read(&paths[0]), "A");
        assert_eq!(read(&paths[1]), "B");
    }

    #[test]
    fn test_rename_failure_puts_pair_back() {
        let (dir, paths) = setup(&[("a", "A")]);
        // Destination vanished between validation and the swap
        let plan = SwapPlan::new(&[&paths[0]], &[dir.path().join("gone")], "_swtmp");

        let err = engine().execute(&plan).unwrap_err();

        match &err {
            SwapError::RenameFailed { restored, completed, .. } => {
                assert!(*restored);
                assert_eq!(*completed, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), 6);
        assert_eq!(read(&paths[0]), "A");
        assert!(!entry_exists(&plan.pairs()[0].temp));
    }

    #[test]
    fn test_collision_appearing_after_first_pair() {
        let (dir, paths) = setup(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");
        let engine = engine();
        engine.preflight(&plan).unwrap();

        engine.run_pair(&plan.pairs()[0], 0, 2).unwrap();
        // Someone takes pair 1's temporary name while pair 0 is being swapped
        fs::write(dir.path().join("b_swtmp"), "in the way").unwrap();
        let err = engine.run_pair(&plan.pairs()[1], 1, 2).unwrap_err();

        assert!(matches!(err, SwapError::TempNameCollision { completed: 1, .. }));
        assert_eq!(err.exit_code(), 5);
        assert!(err.to_string().contains("the first 1 pair(s) were already swapped"));
        assert_eq!(read(&paths[0]), "C");
        assert_eq!(read(&paths[2]), "A");
        assert_eq!(read(&paths[1]), "B");
        assert_eq!(read(&paths[3]), "D");
    }

    #[test]
    fn test_rename_failure_keeps_completed_pairs() {
        let (dir, paths) = setup(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");
        // Second destination disappears after validation
        fs::remove_file(&paths[3]).unwrap();

        let err = engine().execute(&plan).unwrap_err();

        match &err {
            SwapError::RenameFailed { completed, restored, .. } => {
                assert_eq!(*completed, 1);
                assert!(*restored);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), 6);
        assert_eq!(read(&paths[0]), "C");
        assert_eq!(read(&paths[2]), "A");
        assert_eq!(read(&paths[1]), "B");
        assert!(!entry_exists(&dir.path().join("b_swtmp")));
    }

    #[test]
    fn test_cancelled_before_verification_hashing() {
        let (dir, paths) = setup(&[("a", "A"), ("b", "B")]);
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");
        let token = CancellationToken::new();
        token.cancel();

        let err = SwapEngine::new(token).with_verification(true).execute(&plan).unwrap_err();

        assert!(matches!(err, SwapError::UserCancelled { completed: 0, total: 1 }));
        assert_eq!(read(&paths[0]), "A");
        assert_eq!(read(&paths[1]), "B");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_cancelled_dry_run_prints_nothing() {
        let (_dir, paths) = setup(&[("a", "A"), ("b", "B")]);
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");
        let token = CancellationToken::new();
        token.cancel();
        let mut out = Vec::new();

        let err = SwapEngine::new(token)
            .dry_run(&plan, &SwapConfig::default(), "swx -n a b", &mut out)
            .unwrap_err();

        assert!(matches!(err, SwapError::UserCancelled { completed: 0, .. }));
        assert!(out.is_empty());
        assert_eq!(read(&paths[0]), "A");
    }

    #[test]
    fn test_dry_run_writes_plan_only() {
        let (_dir, paths) = setup(&[("a", "A"), ("b", "B")]);
        let plan = SwapPlan::from_filenames(&paths, "_swtmp");
        let mut out = Vec::new();

        engine().dry_run(&plan, &SwapConfig::default(), "swx -n a b", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.trim_start().starts_with("mv")).count(), 3);
        assert_eq!(read(&paths[0]), "A");
        assert!(!entry_exists(&plan.pairs()[0].temp));
    }

    #[test]
    fn test_verification_passes_on_clean_swap() {
        let (_dir, paths) = setup(&[("a", "first"), ("b", "second")]);
        let plan = SwapPlan::from_filenames(&paths, ".swp");

        let report = engine().with_verification(true).execute(&plan).unwrap();

        assert!(report.verified);
        assert_eq!(read(&paths[0]), "second");
    }
}
