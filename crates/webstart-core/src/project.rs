//! Project name validation and target directory resolution

use crate::error::ScaffoldError;
use anyhow::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Characters outside the set permitted in package identifiers collapse
/// into a single `-` separator.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9.()!~*'-]+").expect("valid pattern"));

/// Names npm refuses outright.
const RESERVED: &[&str] = &["node_modules", "favicon.ico"];

const MAX_NAME_LEN: usize = 214;

/// A validated scaffolding request. Immutable once resolved.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    /// Sanitized package name, e.g. `my-app`.
    pub name: String,
    /// Absolute directory the project is generated into.
    pub target_dir: PathBuf,
    /// The user asked to generate into the current directory (`.`).
    pub in_current: bool,
}

/// Resolve a requested name against the working directory.
///
/// The `.` sentinel derives the project name from the final segment of
/// `cwd`; any other value is used as both the name and the (relative)
/// target path.
pub fn resolve(requested: &str, cwd: &Path) -> Result<ProjectRequest> {
    let in_current = requested == ".";

    let raw = if in_current {
        cwd.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        requested.to_string()
    };

    let name = sanitize_name(&raw);
    let errors = validate_name(&name);
    if !errors.is_empty() {
        return Err(ScaffoldError::InvalidName { name, errors }.into());
    }

    let target_dir = if in_current {
        cwd.to_path_buf()
    } else {
        cwd.join(requested)
    };

    Ok(ProjectRequest {
        name,
        target_dir,
        in_current,
    })
}

/// Lowercase and squeeze a raw name into the permitted character set,
/// stripping leading separators and trailing dashes.
pub fn sanitize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let replaced = DISALLOWED.replace_all(&lowered, "-");
    replaced
        .trim_start_matches(['-', '_', '.'])
        .trim_end_matches('-')
        .to_string()
}

/// Validate a sanitized name against package-naming rules.
/// Returns every violation, in a fixed order; empty means valid.
pub fn validate_name(name: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push("name length must be greater than zero".to_string());
        return errors;
    }
    if name.starts_with('.') {
        errors.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        errors.push("name cannot start with an underscore".to_string());
    }
    if name.len() > MAX_NAME_LEN {
        errors.push(format!(
            "name cannot contain more than {} characters",
            MAX_NAME_LEN
        ));
    }
    if name != name.trim() {
        errors.push("name cannot contain leading or trailing spaces".to_string());
    }
    if RESERVED.contains(&name) {
        errors.push(format!("{} is a reserved name", name));
    }
    if !name.chars().all(is_permitted) {
        errors.push("name can only contain URL-friendly characters".to_string());
    }

    errors
}

fn is_permitted(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || "._()!~*'-".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_spaces_and_case() {
        assert_eq!(sanitize_name("My App!"), "my-app!");
        assert_eq!(sanitize_name("Hello World"), "hello-world");
    }

    #[test]
    fn test_sanitize_strips_separators() {
        assert_eq!(sanitize_name("..my-app"), "my-app");
        assert_eq!(sanitize_name("_private"), "private");
        assert_eq!(sanitize_name("app--"), "app");
    }

    #[test]
    fn test_valid_names() {
        assert!(validate_name("my-app").is_empty());
        assert!(validate_name("my-app!").is_empty());
        assert!(validate_name("app.v2").is_empty());
        assert!(validate_name("a").is_empty());
    }

    #[test]
    fn test_invalid_names() {
        assert!(!validate_name("").is_empty());
        assert!(!validate_name(".hidden").is_empty());
        assert!(!validate_name("_private").is_empty());
        assert!(!validate_name("node_modules").is_empty());
        assert!(!validate_name("has space").is_empty());
        assert!(!validate_name("UPPER").is_empty());
        assert!(!validate_name(&"a".repeat(215)).is_empty());
    }

    #[test]
    fn test_resolve_plain_name() {
        let cwd = Path::new("/work");
        let req = resolve("My App!", cwd).unwrap();
        assert_eq!(req.name, "my-app!");
        assert_eq!(req.target_dir, PathBuf::from("/work/My App!"));
        assert!(!req.in_current);
    }

    #[test]
    fn test_resolve_current_dir_sentinel() {
        let cwd = Path::new("/work/My Project");
        let req = resolve(".", cwd).unwrap();
        assert_eq!(req.name, "my-project");
        assert_eq!(req.target_dir, PathBuf::from("/work/My Project"));
        assert!(req.in_current);
    }

    #[test]
    fn test_resolve_rejects_invalid() {
        let cwd = Path::new("/work");
        let err = resolve("...", cwd).unwrap_err();
        let scaffold = err.downcast_ref::<ScaffoldError>().unwrap();
        assert!(matches!(scaffold, ScaffoldError::InvalidName { .. }));
    }
}
