//! Conflict resolution for pre-existing target directories
//!
//! The pure inspection/decision types live here; the actual prompts are in
//! the `tui` module. Overwrite deletes the whole tree before generation,
//! Merge writes over colliding paths silently.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// What was found at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// Target does not exist; generation proceeds without a prompt.
    Missing,
    /// Target is the current directory and already exists.
    ExistsCurrent,
    /// Target exists and is not the current directory.
    Exists,
}

/// The user's (or `--force`'s) decision for an existing target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Fresh target, nothing to resolve.
    Proceed,
    /// Generate into the existing current directory without deleting it.
    ProceedInCurrentDir,
    /// Delete the entire target tree, then generate.
    Overwrite,
    /// Keep the target, write over colliding files.
    Merge,
    /// Do nothing and exit non-zero.
    Abort,
}

/// Inspect the target path. Never prompts.
pub fn inspect(target: &Path, in_current: bool) -> Conflict {
    if !target.exists() {
        Conflict::Missing
    } else if in_current {
        Conflict::ExistsCurrent
    } else {
        Conflict::Exists
    }
}

/// Apply a decision's side effect. Only `Overwrite` mutates the filesystem;
/// a deletion failure is fatal for the whole run.
pub async fn apply(decision: ConflictDecision, target: &Path) -> Result<()> {
    if decision == ConflictDecision::Overwrite {
        fs::remove_dir_all(target)
            .await
            .with_context(|| format!("Failed to remove {}", target.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_target_never_needs_a_prompt() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("not-there");
        assert_eq!(inspect(&target, false), Conflict::Missing);
        assert_eq!(inspect(&target, true), Conflict::Missing);
    }

    #[test]
    fn test_existing_target_is_flagged() {
        let dir = TempDir::new().unwrap();
        assert_eq!(inspect(dir.path(), false), Conflict::Exists);
        assert_eq!(inspect(dir.path(), true), Conflict::ExistsCurrent);
    }

    #[tokio::test]
    async fn test_overwrite_removes_the_tree() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("app");
        std::fs::create_dir_all(target.join("nested")).unwrap();
        std::fs::write(target.join("nested/file.txt"), "x").unwrap();

        apply(ConflictDecision::Overwrite, &target).await.unwrap();
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_other_decisions_leave_the_tree_alone() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("app");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "x").unwrap();

        for decision in [
            ConflictDecision::Proceed,
            ConflictDecision::ProceedInCurrentDir,
            ConflictDecision::Merge,
            ConflictDecision::Abort,
        ] {
            apply(decision, &target).await.unwrap();
            assert!(target.join("keep.txt").exists());
        }
    }
}
