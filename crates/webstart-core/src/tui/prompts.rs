//! Interactive create workflow

use crate::conflict::{self, Conflict, ConflictDecision};
use crate::error::ScaffoldError;
use crate::generate;
use crate::params::{GenOptions, ParameterSet};
use crate::project::{self, ProjectRequest};
use crate::runtime;
use crate::templates::store::{TemplateSource, TemplateStore};
use crate::templates::version;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Project name or target directory (`.` means current directory)
    pub name: Option<String>,

    /// Local directory to use for templates instead of the embedded set
    pub template_dir: Option<PathBuf>,

    /// Preview host (no protocol)
    pub preview: Option<String>,

    /// Online host (no protocol)
    pub online: Option<String>,

    /// Framework to wire in (react supported)
    pub framework: Option<String>,

    /// CSS preprocessor (accepted, currently unwired)
    pub css: Option<String>,

    /// Skip the existing-directory prompt and merge into the target
    pub force: bool,

    /// Write .gitignore and README.md
    pub git: bool,

    /// Write .eslintrc and add lint devDependencies
    pub lint: bool,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            name: None,
            template_dir: None,
            preview: None,
            online: None,
            framework: None,
            css: None,
            force: false,
            // git and lint generation are on unless suppressed
            git: true,
            lint: true,
        }
    }
}

/// Run the create workflow with interactive prompts.
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("webstart")?;

    // Step 1: Validate the name and resolve the target directory
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let requested = args.name.as_deref().unwrap_or(".");
    let request = project::resolve(requested, &cwd)?;

    // Step 2: Resolve conflicts with an existing target
    let decision = resolve_conflict(&request, args.force)?;
    if decision == ConflictDecision::Abort {
        return Err(ScaffoldError::Aborted.into());
    }
    if decision == ConflictDecision::Overwrite {
        cliclack::log::info(format!("Removing {}", request.target_dir.display()))?;
    }
    conflict::apply(decision, &request.target_dir).await?;

    // Step 3: Set up the template store
    let store = setup_store(&args.template_dir)?;
    let plan = store.manifest()?;
    if let Some(warning) = version::check_compatibility(cli_version, &plan.version) {
        cliclack::log::warning(format!(
            "Version warning: {}",
            warning.lines().next().unwrap_or(&warning)
        ))?;
    }

    // Step 4: Advisory runtime check
    let node = runtime::check_node();
    if node.available {
        cliclack::log::info(format!(
            "Node.js detected ({})",
            node.version.as_deref().unwrap_or("unknown")
        ))?;
    } else {
        cliclack::log::warning("Node.js not detected; the generated project needs it to run")?;
    }

    // Step 5: Collect missing parameters, one prompt at a time
    let mut params = ParameterSet::from_flags(
        &request.target_dir,
        args.preview.clone(),
        args.online.clone(),
        args.framework.clone(),
        args.css.clone(),
    );
    collect_missing(&mut params)?;
    let opts = GenOptions::from_params(&params, args.git, args.lint);

    // Step 6: Generate
    let report = generate::generate(&request.name, &request.target_dir, &store, &plan, &opts)
        .await?;
    cliclack::log::success(format!(
        "Created {} files in {}",
        report.files_written,
        request.target_dir.display()
    ))?;

    // Step 7: Next steps, exactly once, after every write has completed
    print_next_steps(&request.target_dir)?;

    Ok(())
}

/// Decide what to do about an existing target. Missing targets proceed
/// without a prompt; `--force` merges without asking.
fn resolve_conflict(request: &ProjectRequest, force: bool) -> Result<ConflictDecision> {
    match conflict::inspect(&request.target_dir, request.in_current) {
        Conflict::Missing => Ok(ConflictDecision::Proceed),
        Conflict::ExistsCurrent => {
            if force {
                return Ok(ConflictDecision::ProceedInCurrentDir);
            }
            let ok: bool = cliclack::confirm("Generate project in current directory?")
                .initial_value(true)
                .interact()?;
            if ok {
                Ok(ConflictDecision::ProceedInCurrentDir)
            } else {
                Ok(ConflictDecision::Abort)
            }
        }
        Conflict::Exists => {
            if force {
                return Ok(ConflictDecision::Merge);
            }
            let action: &str = cliclack::select(format!(
                "Target directory {} already exists. Pick an action:",
                request.target_dir.display()
            ))
            .item("overwrite", "Overwrite", "remove existing files first")
            .item("merge", "Merge", "write over colliding files")
            .item("cancel", "Cancel", "")
            .interact()?;

            Ok(match action {
                "overwrite" => ConflictDecision::Overwrite,
                "merge" => ConflictDecision::Merge,
                _ => ConflictDecision::Abort,
            })
        }
    }
}

fn setup_store(template_dir: &Option<PathBuf>) -> Result<TemplateStore> {
    let store = match template_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local templates from {}", path.display()))?;
            TemplateStore::from_dir(path)?
        }
        None => TemplateStore::embedded(),
    };
    if matches!(store.source(), TemplateSource::Embedded) {
        cliclack::log::info("Using embedded templates")?;
    }
    Ok(store)
}

/// Prompt for every key still lacking a value, strictly in key order, one
/// question outstanding at a time. Empty answers leave the key absent.
fn collect_missing(params: &mut ParameterSet) -> Result<()> {
    for key in params.missing() {
        let answer: String = cliclack::input(key.tip())
            .placeholder("")
            .default_input("")
            .interact()?;
        params.set(key, answer);
    }
    Ok(())
}

fn print_next_steps(target: &Path) -> Result<()> {
    let prompt = if cfg!(windows) { ">" } else { "$" };

    println!();
    println!("   install dependencies:");
    println!("     {} cd {} && npm install", prompt, target.display());
    println!();
    println!("   run the project:");
    println!("     {} npm run dev", prompt);
    println!();
    println!("   build the project:");
    println!("     {} npm run build", prompt);
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}
