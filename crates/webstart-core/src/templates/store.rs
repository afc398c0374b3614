//! Read-only template store
//!
//! Templates are addressed by relative path with `/` separators. The
//! default store is compiled into the binary; `--template-dir` swaps in a
//! directory tree from disk with the same layout.

use super::plan::TemplateManifest;
use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

macro_rules! embedded_files {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_bytes!(concat!("../../templates/", $path)) as &[u8])),*]
    };
}

/// The payload compiled into the binary. Paths mirror the on-disk
/// `templates/` directory.
static EMBEDDED: &[(&str, &[u8])] = embedded_files![
    "template.yaml",
    "project.config.js",
    "postcss.config.js",
    "browserslistrc",
    "polyfill.js",
    "webpack.config.common.js",
    "webpack.config.dev.js",
    "webpack.config.js",
    "build.sh.tera",
    "server/api-router.js",
    "server/api-server.js",
    "server/proxy-server.js",
    "server/static-server.js",
    "src/css/index.css",
    "src/img/test.png",
    "src/js/api/api.js",
    "src/js/page/index.js",
    "src/views/index.html",
    "rc/babelrc.tera",
    "gitignore",
    "README.md",
    "eslintrc",
    "pkg/package.base.json",
    "pkg/package.optional.json",
];

/// Template source - embedded payload or a local directory
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Embedded,
    Local(PathBuf),
}

/// Read-only collection of template files addressed by relative path.
pub struct TemplateStore {
    source: TemplateSource,
    files: HashMap<String, Vec<u8>>,
}

impl TemplateStore {
    /// Store backed by the compiled-in payload.
    pub fn embedded() -> Self {
        let files = EMBEDDED
            .iter()
            .map(|(path, bytes)| (path.to_string(), bytes.to_vec()))
            .collect();
        Self {
            source: TemplateSource::Embedded,
            files,
        }
    }

    /// Load every file under `root` into the store, keyed by its
    /// `/`-separated path relative to `root`.
    pub fn from_dir(root: &Path) -> Result<Self> {
        let mut files = HashMap::new();
        for entry in WalkDir::new(root) {
            let entry = entry
                .with_context(|| format!("Failed to scan template dir {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(root)
                .context("walkdir entry outside template root")?;
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let contents = std::fs::read(entry.path())
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            files.insert(key, contents);
        }
        Ok(Self {
            source: TemplateSource::Local(root.to_path_buf()),
            files,
        })
    }

    /// Fetch a template's contents.
    pub fn get(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ScaffoldError::TemplateMissing(path.to_string()).into())
    }

    /// Fetch a template as UTF-8 text.
    pub fn get_str(&self, path: &str) -> Result<String> {
        let bytes = self.get(path)?;
        String::from_utf8(bytes).with_context(|| format!("Template {} is not valid UTF-8", path))
    }

    /// Parse the generation-plan manifest shipped with the template set.
    pub fn manifest(&self) -> Result<TemplateManifest> {
        let content = self.get_str("template.yaml")?;
        serde_yaml::from_str(&content).context("Failed to parse template.yaml")
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_manifest_parses() {
        let store = TemplateStore::embedded();
        let manifest = store.manifest().unwrap();
        assert_eq!(manifest.name, "webpack-express");
        assert!(!manifest.dirs.is_empty());
        assert!(!manifest.files.is_empty());
    }

    #[test]
    fn test_every_plan_src_resolves() {
        let store = TemplateStore::embedded();
        let manifest = store.manifest().unwrap();
        for rule in &manifest.files {
            assert!(store.get(&rule.src).is_ok(), "missing template {}", rule.src);
        }
    }

    #[test]
    fn test_package_templates_present() {
        let store = TemplateStore::embedded();
        assert!(store.get_str("pkg/package.base.json").is_ok());
        assert!(store.get_str("pkg/package.optional.json").is_ok());
    }

    #[test]
    fn test_missing_template_names_the_path() {
        let store = TemplateStore::embedded();
        let err = store.get("no/such/file").unwrap_err();
        assert!(err.to_string().contains("no/such/file"));
    }

    #[test]
    fn test_local_dir_matches_embedded_layout() {
        let dir = tempfile::TempDir::new().unwrap();
        for (path, bytes) in EMBEDDED {
            let dest = dir.path().join(path);
            std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
            std::fs::write(dest, bytes).unwrap();
        }

        let local = TemplateStore::from_dir(dir.path()).unwrap();
        let embedded = TemplateStore::embedded();
        for (path, _) in EMBEDDED {
            assert_eq!(local.get(path).unwrap(), embedded.get(path).unwrap());
        }
    }
}
