mod ops;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::registry::Registry;
use crate::runner::Shell;
use crate::template::CommandTemplate;

/// Contents of `config.toml`. Every table is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[run]` table.
    pub run: RunConfig,
    /// Language key → command template. Entries replace the built-in executor
    /// for the same key or add a new language.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub executors: BTreeMap<String, CommandTemplate>,
    /// File extension → language key.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, String>,
}

/// How resolved commands are executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Shell used to run commands, e.g. "bash" or "pwsh"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}

impl Config {
    /// The built-in registry with this config's executors and extensions
    /// layered on top.
    #[must_use]
    pub fn registry(&self) -> Registry {
        let mut builder = Registry::builder();
        for (ext, key) in &self.extensions {
            builder = builder.alias(ext, key);
        }
        for (key, template) in &self.executors {
            builder = builder.executor(key, template.clone());
        }
        builder.build()
    }

    /// Configured shell, or the platform default.
    #[must_use]
    pub fn shell(&self) -> Shell {
        self.run
            .shell
            .as_deref()
            .map_or_else(Shell::platform_default, Shell::from_program)
    }
}
