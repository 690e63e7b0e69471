use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::Config;
use crate::registry::Registry;
use crate::template::CommandTemplate;

impl Config {
    /// `~/.config/code-runner/config.toml`
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("code-runner").join("config.toml"))
    }

    /// Load the config from [`Config::path`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Read the config at `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the config to [`Config::path`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Reject executor or extension keys that differ only by case, since the
    /// registry would treat them as the same key.
    pub fn validate(&self) -> Result<()> {
        check_unique_keys("executors", &self.executors)?;
        check_unique_keys("extensions", &self.extensions)
    }

    /// Get a config value by dot-separated key path. Executors and extensions
    /// fall back to the built-in table when the config does not set them.
    pub fn get_value(&self, key: &str) -> Result<String> {
        let defaults = Registry::defaults();
        match split_key(key)? {
            ("run", "shell") => Ok(self.run.shell.clone().unwrap_or_default()),
            ("executors", lang) => Ok(find_entry(&self.executors, lang)
                .or_else(|| defaults.template_for(lang))
                .map(ToString::to_string)
                .unwrap_or_default()),
            ("extensions", ext) => Ok(find_entry(&self.extensions, ext)
                .map(String::as_str)
                .or_else(|| defaults.alias_for(ext))
                .unwrap_or_default()
                .to_string()),
            _ => bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path. An empty value removes it.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let value = (!value.is_empty()).then(|| value.to_string());
        match split_key(key)? {
            ("run", "shell") => self.run.shell = value,
            ("executors", lang) => {
                set_entry(&mut self.executors, lang, value.map(CommandTemplate::from));
            }
            ("extensions", ext) => set_entry(&mut self.extensions, &ext.to_lowercase(), value),
            _ => bail!("Unknown config key: {key}"),
        }
        Ok(())
    }
}

fn split_key(key: &str) -> Result<(&str, &str)> {
    key.split_once('.')
        .filter(|(_, rest)| !rest.is_empty())
        .with_context(|| format!("Unknown config key: {key}"))
}

fn same_key(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn find_entry<'a, V>(map: &'a BTreeMap<String, V>, key: &str) -> Option<&'a V> {
    map.iter().find(|(k, _)| same_key(k, key)).map(|(_, v)| v)
}

/// Replace (or remove) `key` and any entry whose key differs only by case.
fn set_entry<V>(map: &mut BTreeMap<String, V>, key: &str, value: Option<V>) {
    map.retain(|k, _| !same_key(k, key));
    if let Some(v) = value {
        map.insert(key.to_string(), v);
    }
}

fn check_unique_keys<V>(table: &str, map: &BTreeMap<String, V>) -> Result<()> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for key in map.keys() {
        if let Some(previous) = seen.insert(key.to_lowercase(), key) {
            bail!("[{table}] defines both `{previous}` and `{key}`; keys are case-insensitive");
        }
    }
    Ok(())
}
