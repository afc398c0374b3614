//! Tera rendering for parametrized templates

use anyhow::{Context as _, Result};
use tera::{Context, Tera};

/// Babel presets contributed by each recognized framework.
const PRESET_MAP: &[(&str, &[&str])] = &[("react", &["react"])];

/// Substitution context for the parametrized templates.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub name: String,
    pub presets: Vec<String>,
}

impl RenderContext {
    pub fn new(name: &str, framework: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            presets: framework.map(presets_for).unwrap_or_default(),
        }
    }
}

/// Presets for a framework name; unrecognized frameworks get none.
pub fn presets_for(framework: &str) -> Vec<String> {
    PRESET_MAP
        .iter()
        .find(|(name, _)| *name == framework)
        .map(|(_, presets)| presets.iter().map(|p| p.to_string()).collect())
        .unwrap_or_default()
}

/// Render a single template string with the generation context.
pub fn render(template: &str, ctx: &RenderContext) -> Result<String> {
    let mut context = Context::new();
    context.insert("name", &ctx.name);
    context.insert("presets", &ctx.presets);
    Tera::one_off(template, &context, false).context("Failed to render template")
}
