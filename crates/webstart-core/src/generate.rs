//! Generation orchestrator
//!
//! Creates the directory tree first, then dispatches every file write as a
//! task on a `JoinSet`. Joining the set is the completion contract: the
//! caller's next-steps message can only run after every scheduled write has
//! finished, exactly once. Dir creation is idempotent, so merging into an
//! existing tree works; colliding files are overwritten.

use crate::manifest;
use crate::params::GenOptions;
use crate::templates::plan::TemplateManifest;
use crate::templates::render::{self, RenderContext};
use crate::templates::store::TemplateStore;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinSet;

/// What a generation run produced.
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport {
    pub dirs_created: usize,
    pub files_written: usize,
}

/// Generate the project tree at `target`. All filesystem errors are fatal;
/// there is no retry and no rollback of partial output.
pub async fn generate(
    name: &str,
    target: &Path,
    store: &TemplateStore,
    plan: &TemplateManifest,
    opts: &GenOptions,
) -> Result<GenerationReport> {
    fs::create_dir_all(target)
        .await
        .with_context(|| format!("Failed to create target directory {}", target.display()))?;
    log_create(target);
    let mut dirs_created = 1;

    for dir in &plan.dirs {
        let path = target.join(dir);
        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        log_create(&path);
        dirs_created += 1;
    }

    let ctx = RenderContext::new(name, opts.framework.as_deref());

    // Template reads and rendering happen up front so a missing or broken
    // template aborts before any file write is scheduled.
    let mut writes: JoinSet<Result<PathBuf>> = JoinSet::new();
    for rule in &plan.files {
        if !rule.included(opts) {
            continue;
        }
        let contents = if rule.render {
            let template = store.get_str(&rule.src)?;
            render::render(&template, &ctx)?.into_bytes()
        } else {
            store.get(&rule.src)?
        };
        writes.spawn(write_file(target.join(rule.destination()), contents));
    }

    let base = store.get_str("pkg/package.base.json")?;
    let optional = store.get_str("pkg/package.optional.json")?;
    let pkg = manifest::assemble(&base, &optional, name, opts)?;
    writes.spawn(write_file(
        target.join("package.json"),
        pkg.to_json()?.into_bytes(),
    ));

    let mut files_written = 0;
    while let Some(joined) = writes.join_next().await {
        let dest = joined.context("write task panicked")??;
        log_create(&dest);
        files_written += 1;
    }

    Ok(GenerationReport {
        dirs_created,
        files_written,
    })
}

async fn write_file(dest: PathBuf, contents: Vec<u8>) -> Result<PathBuf> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&dest, &contents)
        .await
        .with_context(|| format!("Failed to write file {}", dest.display()))?;
    Ok(dest)
}

fn log_create(path: &Path) {
    println!("   {} {}", "create".cyan(), path.display());
}
