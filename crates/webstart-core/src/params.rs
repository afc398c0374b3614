//! Parameter set driving generation
//!
//! Values come from CLI flags first, then interactive prompts, then
//! defaults. The prompt loop itself lives in the `tui` module; this module
//! holds the key order, the tip strings, and the flag/answer merge.

use std::path::Path;

/// Recognized parameter keys, in the fixed prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    Path,
    Preview,
    Online,
    Framework,
    Css,
}

impl ParamKey {
    pub const ORDER: [ParamKey; 5] = [
        ParamKey::Path,
        ParamKey::Preview,
        ParamKey::Online,
        ParamKey::Framework,
        ParamKey::Css,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::Path => "path",
            ParamKey::Preview => "preview",
            ParamKey::Online => "online",
            ParamKey::Framework => "framework",
            ParamKey::Css => "css",
        }
    }

    /// Bilingual prompt tip shown when the key has no CLI value.
    pub fn tip(&self) -> &'static str {
        match self {
            ParamKey::Path => {
                "输入项目名称（支持路径，默认当前目录）\nname of project (path supported) [hello-world]"
            }
            ParamKey::Preview => {
                "预上线环境的域名（不包括协议http或https）\npreview host (no protocol) [default: \"\"]"
            }
            ParamKey::Online => {
                "线上环境的域名（不包括协议http或https）\nonline host (no protocol) [default: \"\"]"
            }
            ParamKey::Framework => {
                "项目使用框架（目前支持react）\nframework (react supported) [default: pure js]"
            }
            ParamKey::Css => {
                "css预处理器（目前暂无支持）\ncss engine [default: pure css]"
            }
        }
    }
}

/// Collected parameter values. `None` means the key was never answered;
/// empty answers never overwrite an absent value.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    pub path: Option<String>,
    pub preview: Option<String>,
    pub online: Option<String>,
    pub framework: Option<String>,
    pub css: Option<String>,
}

impl ParameterSet {
    /// Seed the set from CLI flag values. Empty flag values count as absent,
    /// and `path` is always pre-filled from the resolved target directory,
    /// so it is never prompted for.
    pub fn from_flags(
        target_dir: &Path,
        preview: Option<String>,
        online: Option<String>,
        framework: Option<String>,
        css: Option<String>,
    ) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            path: Some(target_dir.display().to_string()),
            preview: non_empty(preview),
            online: non_empty(online),
            framework: non_empty(framework),
            css: non_empty(css),
        }
    }

    pub fn get(&self, key: ParamKey) -> Option<&str> {
        match key {
            ParamKey::Path => self.path.as_deref(),
            ParamKey::Preview => self.preview.as_deref(),
            ParamKey::Online => self.online.as_deref(),
            ParamKey::Framework => self.framework.as_deref(),
            ParamKey::Css => self.css.as_deref(),
        }
    }

    /// Record an answer; empty strings leave the value absent.
    pub fn set(&mut self, key: ParamKey, value: String) {
        if value.is_empty() {
            return;
        }
        let slot = match key {
            ParamKey::Path => &mut self.path,
            ParamKey::Preview => &mut self.preview,
            ParamKey::Online => &mut self.online,
            ParamKey::Framework => &mut self.framework,
            ParamKey::Css => &mut self.css,
        };
        *slot = Some(value);
    }

    /// Keys still lacking a value, in prompt order.
    pub fn missing(&self) -> Vec<ParamKey> {
        ParamKey::ORDER
            .iter()
            .copied()
            .filter(|key| self.get(*key).is_none())
            .collect()
    }
}

/// Fully resolved generation options. Every recognized key has a defined
/// value once this exists.
#[derive(Debug, Clone)]
pub struct GenOptions {
    pub preview: String,
    pub online: String,
    pub framework: Option<String>,
    /// Accepted but wired to nothing; kept for CLI compatibility.
    pub css: Option<String>,
    pub git: bool,
    pub lint: bool,
}

impl GenOptions {
    pub fn from_params(params: &ParameterSet, git: bool, lint: bool) -> Self {
        Self {
            preview: params.preview.clone().unwrap_or_default(),
            online: params.online.clone().unwrap_or_default(),
            framework: params.framework.clone(),
            css: params.css.clone(),
            git,
            lint,
        }
    }
}
