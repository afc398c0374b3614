//! Webstart Core - library for scaffolding webpack + Express front-end
//! projects
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Core operations** - name validation, conflict inspection, parameter
//!   resolution, manifest assembly, the template store, and the generation
//!   orchestrator. All pure or filesystem-only; no prompts.
//! - **Workflow** - the `tui` module drives the full create flow with
//!   cliclack prompts (feature-gated).
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt workflow
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use webstart_core::{generate, params::GenOptions, project, templates::TemplateStore};
//!
//! let request = project::resolve("my-app", &std::env::current_dir()?)?;
//! let store = TemplateStore::embedded();
//! let plan = store.manifest()?;
//! let report = generate::generate(&request.name, &request.target_dir, &store, &plan, &opts).await?;
//! ```

pub mod conflict;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod params;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use conflict::{Conflict, ConflictDecision};
pub use error::ScaffoldError;
pub use generate::GenerationReport;
pub use manifest::{HostConfig, PackageManifest};
pub use params::{GenOptions, ParamKey, ParameterSet};
pub use project::ProjectRequest;
pub use templates::{TemplateManifest, TemplateSource, TemplateStore};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};

/// CLI version fallback - used for template compatibility checking when the
/// binary does not supply its own
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";
