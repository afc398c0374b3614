//! Generation-plan manifest types and parsing

use crate::params::GenOptions;
use serde::{Deserialize, Serialize};

/// Gate for a conditional file write. These are the only conditional
/// writes in the plan; everything else is unconditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Git,
    Lint,
    Framework,
}

/// One file write in the generation plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRule {
    /// Path inside the template store.
    pub src: String,

    /// Destination path relative to the target directory (defaults to `src`).
    #[serde(default)]
    pub dest: Option<String>,

    /// When set, the file is written only if the matching option is on.
    #[serde(default)]
    pub when: Option<Condition>,

    /// Render through tera with the generation context instead of copying
    /// verbatim.
    #[serde(default)]
    pub render: bool,
}

impl FileRule {
    /// Get the destination path (falls back to `src` if `dest` not given).
    pub fn destination(&self) -> &str {
        self.dest.as_deref().unwrap_or(&self.src)
    }

    /// Whether this rule applies under the given options.
    pub fn included(&self, opts: &GenOptions) -> bool {
        match self.when {
            None => true,
            Some(Condition::Git) => opts.git,
            Some(Condition::Lint) => opts.lint,
            Some(Condition::Framework) => opts.framework.is_some(),
        }
    }
}

/// Manifest for a template set (`template.yaml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template set.
    pub name: String,

    /// Description of what the template set provides.
    pub description: String,

    /// Semver version for CLI compatibility checking.
    pub version: String,

    /// Directories created before any file write. `create_dir_all`
    /// semantics, so parents need not be listed.
    #[serde(default)]
    pub dirs: Vec<String>,

    /// Every file write, in plan order.
    #[serde(default)]
    pub files: Vec<FileRule>,
}
