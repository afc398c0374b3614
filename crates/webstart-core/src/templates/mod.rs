//! Template store, generation plan, rendering, and version checking
//!
//! This module provides:
//! - The read-only template store (embedded payload or a local directory)
//! - The generation-plan manifest types parsed from `template.yaml`
//! - Tera rendering for the parametrized templates
//! - CLI / template-set version compatibility checking

pub mod plan;
pub mod render;
pub mod store;
pub mod version;

pub use plan::{Condition, FileRule, TemplateManifest};
pub use render::RenderContext;
pub use store::{TemplateSource, TemplateStore};
pub use version::check_compatibility;
