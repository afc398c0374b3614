//! Error taxonomy for the scaffolding workflow
//!
//! Only the conditions the binary handles specially (clean message, exit 1)
//! get a variant here; everything else propagates as an `anyhow` error with
//! context attached at the failure site.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The requested project name fails package-naming rules.
    /// Carries every individual validation message, in order.
    #[error("invalid project name: {name:?}")]
    InvalidName { name: String, errors: Vec<String> },

    /// The user declined an overwrite/merge/current-directory prompt.
    #[error("aborted by user")]
    Aborted,

    /// A referenced template path does not exist in the template store.
    #[error("template file not found: {0}")]
    TemplateMissing(String),
}
