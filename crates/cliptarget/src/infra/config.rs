//! Configuration management utilities.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs_next::config_dir;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::app::wire::{OutputStyle, OutputStyleParseError};

static DEFAULT_CONFIG: Lazy<&'static str> =
    Lazy::new(|| include_str!("../../assets/default-config.toml"));
static DEFAULT_WORKSPACE_CONFIG_PATH: &str = ".cliptarget/config.toml";

/// Layered configuration loaded from defaults, user, workspace, and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub rpc: Rpc,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    output: Option<String>,
}

impl Defaults {
    fn default_output() -> &'static str {
        OutputStyle::Compact.as_str()
    }

    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or(Self::default_output())
    }

    /// Configured output style; unknown values are an error.
    pub fn output_style(&self) -> Result<OutputStyle, OutputStyleParseError> {
        self.output().parse()
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: Some(Self::default_output().to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rpc {
    #[serde(default)]
    command: Option<String>,
}

impl Rpc {
    fn default_command() -> &'static str {
        "clippy.copyItems"
    }

    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(Self::default_command())
    }
}

impl Default for Rpc {
    fn default() -> Self {
        Self {
            command: Some(Self::default_command().to_owned()),
        }
    }
}

/// Declared word lists: spoken form to value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub search_types: BTreeMap<String, String>,
    #[serde(default)]
    pub letters: BTreeMap<String, String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            search_types: ["text", "image", "link", "file", "color"]
                .into_iter()
                .map(|label| (label.to_owned(), label.to_owned()))
                .collect(),
            letters: BTreeMap::new(),
        }
    }
}

/// Environment overrides for critical settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    command: Option<String>,
    output: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            command: env::var("CLIPTARGET_COMMAND").ok(),
            output: env::var("CLIPTARGET_OUTPUT").ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(command: &str, output: &str) -> Self {
        Self {
            command: Some(command.to_owned()),
            output: Some(output.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults, user/global config, workspace config, and env overrides.
    pub fn load() -> Result<Self> {
        let workspace = workspace_config_path()?;
        Self::load_with_layers(global_config_path(), workspace, EnvOverrides::from_env())
    }

    /// Like [`Config::load`], with an explicit file in place of the workspace config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        Self::load_with_layers(
            global_config_path(),
            Some(path.to_path_buf()),
            EnvOverrides::from_env(),
        )
    }

    fn load_with_layers(
        global: Option<PathBuf>,
        workspace: Option<PathBuf>,
        env_overrides: EnvOverrides,
    ) -> Result<Self> {
        let mut layers: Vec<Config> = Vec::new();

        layers.push(Self::from_str(&DEFAULT_CONFIG)?);

        if let Some(global_path) = global.filter(|path| path.exists()) {
            layers.push(Self::from_file(&global_path)?);
        }

        if let Some(workspace_path) = workspace.filter(|path| path.exists()) {
            layers.push(Self::from_file(&workspace_path)?);
        }

        let merged = layers.into_iter().reduce(Config::merge).unwrap_or_default();
        Ok(apply_env_overrides(merged, env_overrides))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&data)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }

    fn from_str(contents: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(contents).with_context(|| "failed to parse TOML config".to_string())?;
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            defaults: merge_defaults(self.defaults, other.defaults),
            rpc: merge_rpc(self.rpc, other.rpc),
            vocabulary: merge_vocabulary(self.vocabulary, other.vocabulary),
        }
    }
}

fn merge_defaults(base: Defaults, overlay: Defaults) -> Defaults {
    Defaults {
        output: overlay.output.or(base.output),
    }
}

fn merge_rpc(base: Rpc, overlay: Rpc) -> Rpc {
    Rpc {
        command: overlay.command.or(base.command),
    }
}

fn merge_vocabulary(mut base: VocabularyConfig, overlay: VocabularyConfig) -> VocabularyConfig {
    base.search_types.extend(overlay.search_types);
    base.letters.extend(overlay.letters);
    base
}

fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("cliptarget/config.toml"))
}

fn workspace_config_path() -> Result<Option<PathBuf>> {
    let cwd = env::current_dir()?;
    let root = find_repo_root(&cwd).unwrap_or(cwd);
    Ok(Some(root.join(DEFAULT_WORKSPACE_CONFIG_PATH)))
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(command) = env.command {
        config.rpc.command = Some(command);
    }
    if let Some(output) = env.output {
        config.defaults.output = Some(output);
    }
    config
}
