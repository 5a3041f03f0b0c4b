use crate::classifier::{Classifier, ClassifierConfig};
use crate::error::{KebabifyError, Result};
use crate::rewrite::BindingPolicy;
use crate::specifier::{SpecifierRules, DEFAULT_ALIASES};
use crate::walk::{TreeFilter, DEFAULT_EXCLUDES, DEFAULT_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub rewrite: RewriteConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions processed by both walks, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files and directories to skip
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,

    /// Import path prefixes that resolve inside the project, like `@/`.
    /// Other non-relative specifiers are packages and are never rewritten.
    #[serde(default = "default_aliases")]
    pub aliases: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excludes: default_excludes(),
            aliases: default_aliases(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    #[serde(default)]
    pub bindings: BindingPolicy,

    #[serde(default = "default_true")]
    pub rename_files: bool,

    #[serde(default = "default_true")]
    pub rename_dirs: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            bindings: BindingPolicy::default(),
            rename_files: true,
            rename_dirs: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default preview format: "table", "diff", "summary" or "none"
    #[serde(default = "default_preview")]
    pub preview_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preview_format: default_preview(),
            use_color: None,
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect()
}

fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect()
}

fn default_aliases() -> Vec<String> {
    DEFAULT_ALIASES.iter().map(|s| (*s).to_string()).collect()
}

fn default_preview() -> String {
    "table".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from .kebabify/config.toml if it exists
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".kebabify").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| KebabifyError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| KebabifyError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn tree_filter(&self) -> Result<TreeFilter> {
        TreeFilter::new(&self.scan.extensions, &self.scan.excludes)
    }

    pub fn specifier_rules(&self) -> SpecifierRules {
        SpecifierRules::new(&self.scan.aliases, &self.scan.extensions)
    }

    pub fn build_classifier(&self) -> Classifier {
        Classifier::new(&self.classifier)
    }
}
