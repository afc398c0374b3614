//! package.json assembly
//!
//! The manifest is built as a pure function of (base template, selected
//! framework, lint flag, host parameters, name): base fields, then the
//! framework's dependency fragment, then the lint devDependencies, then
//! host and name. Dependency maps are `BTreeMap`s, so serialization is
//! deterministically sorted.

use crate::params::GenOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Host configuration written into the generated manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub online: String,
}

/// The generated project's package descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: BTreeMap<String, String>,
    /// Any base-template fields not modeled above survive round-tripping.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A named dependency/devDependency fragment from the optional-packages
/// template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DependencyFragment {
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

/// Optional per-framework fragments plus the flat lint devDependency set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionalPackages {
    #[serde(default)]
    pub frameworks: BTreeMap<String, DependencyFragment>,
    #[serde(default)]
    pub lint: BTreeMap<String, String>,
}

/// Assemble the final manifest. Merges are last-writer-wins with no
/// version-conflict detection; an unrecognized framework contributes
/// nothing.
pub fn assemble(
    base_json: &str,
    optional_json: &str,
    name: &str,
    opts: &GenOptions,
) -> Result<PackageManifest> {
    let mut manifest: PackageManifest =
        serde_json::from_str(base_json).context("Failed to parse base package template")?;
    let optional: OptionalPackages =
        serde_json::from_str(optional_json).context("Failed to parse optional package template")?;

    if let Some(framework) = &opts.framework {
        if let Some(fragment) = optional.frameworks.get(framework) {
            manifest.dependencies.extend(fragment.dependencies.clone());
            manifest
                .dev_dependencies
                .extend(fragment.dev_dependencies.clone());
        }
    }

    if opts.lint {
        manifest.dev_dependencies.extend(optional.lint.clone());
    }

    manifest.host = HostConfig {
        preview: opts.preview.clone(),
        online: opts.online.clone(),
    };
    manifest.name = name.to_string();

    Ok(manifest)
}

impl PackageManifest {
    /// Pretty-printed JSON with a trailing newline, written exactly once
    /// per generation run.
    pub fn to_json(&self) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(self).context("Failed to serialize package.json")?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"{
        "name": "hello-world",
        "version": "1.0.0",
        "scripts": { "dev": "node server/static-server.js" },
        "dependencies": { "express": "^4.16.3" },
        "devDependencies": { "webpack": "^4.16.0" }
    }"#;

    const OPTIONAL: &str = r#"{
        "frameworks": {
            "react": {
                "dependencies": { "react": "^16.4.1", "react-dom": "^16.4.1" },
                "devDependencies": { "babel-preset-react": "^6.24.1" }
            }
        },
        "lint": { "eslint": "^4.19.1" }
    }"#;

    fn opts() -> GenOptions {
        GenOptions {
            preview: String::new(),
            online: String::new(),
            framework: None,
            css: None,
            git: true,
            lint: false,
        }
    }

    #[test]
    fn test_plain_manifest_keeps_base_and_sets_name() {
        let manifest = assemble(BASE, OPTIONAL, "my-app!", &opts()).unwrap();
        assert_eq!(manifest.name, "my-app!");
        assert_eq!(manifest.host, HostConfig::default());
        assert!(manifest.dependencies.contains_key("express"));
        assert!(!manifest.dependencies.contains_key("react"));
    }

    #[test]
    fn test_react_fragment_is_merged() {
        let mut o = opts();
        o.framework = Some("react".to_string());
        let manifest = assemble(BASE, OPTIONAL, "app", &o).unwrap();
        assert!(manifest.dependencies.contains_key("react"));
        assert!(manifest.dependencies.contains_key("react-dom"));
        assert!(manifest.dev_dependencies.contains_key("babel-preset-react"));
    }

    #[test]
    fn test_unknown_framework_contributes_nothing() {
        let mut o = opts();
        o.framework = Some("vue".to_string());
        let manifest = assemble(BASE, OPTIONAL, "app", &o).unwrap();
        assert_eq!(manifest.dependencies.len(), 1);
    }

    #[test]
    fn test_lint_adds_dev_dependencies() {
        let mut o = opts();
        o.lint = true;
        let manifest = assemble(BASE, OPTIONAL, "app", &o).unwrap();
        assert!(manifest.dev_dependencies.contains_key("eslint"));
    }

    #[test]
    fn test_host_comes_from_parameters() {
        let mut o = opts();
        o.preview = "preview.example.com".to_string();
        o.online = "www.example.com".to_string();
        let manifest = assemble(BASE, OPTIONAL, "app", &o).unwrap();
        assert_eq!(manifest.host.preview, "preview.example.com");
        assert_eq!(manifest.host.online, "www.example.com");
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let mut o = opts();
        o.framework = Some("react".to_string());
        o.lint = true;
        let a = assemble(BASE, OPTIONAL, "app", &o).unwrap().to_json().unwrap();
        let b = assemble(BASE, OPTIONAL, "app", &o).unwrap().to_json().unwrap();
        assert_eq!(a, b);
        assert!(a.ends_with('\n'));
    }

    #[test]
    fn test_dependencies_serialize_sorted() {
        let mut o = opts();
        o.framework = Some("react".to_string());
        let manifest = assemble(BASE, OPTIONAL, "app", &o).unwrap();
        let keys: Vec<&String> = manifest.dependencies.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
