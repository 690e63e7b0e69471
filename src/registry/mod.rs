mod defaults;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::template::CommandTemplate;


/// Case-insensitive language identifier, e.g. `"python"` or `"FortranFreeForm"`.
/// Open-ended: any string can be registered.
pub type LanguageKey = String;

#[derive(Debug, Clone)]
struct Entry {
    key: LanguageKey,
    template: CommandTemplate,
}

/// Language key → command template table, plus the extension aliases used to
/// derive a key from a file.
///
/// Built once through [`RegistryBuilder`] and read-only afterwards, so a
/// single instance can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct Registry {
    templates: HashMap<String, Entry>,
    aliases: HashMap<String, LanguageKey>,
}

impl Registry {
    /// The built-in table, created on first use and shared for the rest of
    /// the process.
    pub fn defaults() -> &'static Self {
        static DEFAULTS: OnceLock<Registry> = OnceLock::new();
        DEFAULTS.get_or_init(|| Self::builder().build())
    }

    /// A builder seeded with the built-in executors and aliases.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        let mut builder = RegistryBuilder::empty();
        for &(ext, key) in defaults::EXTENSION_ALIASES {
            builder = builder.alias(ext, key);
        }
        for &(key, template) in defaults::EXECUTORS {
            builder = builder.executor(key, template);
        }
        builder
    }

    /// Template registered for `key`, ignoring case. `None` means the
    /// language is unsupported.
    #[must_use]
    pub fn template_for(&self, key: &str) -> Option<&CommandTemplate> {
        self.templates
            .get(&key.to_lowercase())
            .map(|entry| &entry.template)
    }

    /// Derive the language key for a file.
    ///
    /// Aliased extensions map to their key, other extensions are used
    /// lowercased, and a file without extension falls back to
    /// `ide_type_name` verbatim.
    #[must_use]
    pub fn canonical_key_for(&self, extension: Option<&str>, ide_type_name: &str) -> LanguageKey {
        let Some(extension) = extension else {
            return ide_type_name.to_string();
        };
        let extension = extension.to_lowercase();
        match self.aliases.get(&extension) {
            Some(key) => key.clone(),
            None => extension,
        }
    }

    /// Language key that files with extension `ext` run under, if `ext` is
    /// aliased. Ignores case.
    #[must_use]
    pub fn alias_for(&self, ext: &str) -> Option<&str> {
        self.aliases.get(&ext.to_lowercase()).map(String::as_str)
    }

    /// All executors, sorted by key.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &CommandTemplate)> {
        let mut entries: Vec<_> = self
            .templates
            .values()
            .map(|entry| (entry.key.as_str(), &entry.template))
            .collect();
        entries.sort_by_key(|(key, _)| key.to_lowercase());
        entries
    }

    /// Number of registered executors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// `true` when no executor is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Collects executors and aliases before freezing them into a [`Registry`].
/// Later registrations replace earlier ones with the same key.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    templates: HashMap<String, Entry>,
    aliases: HashMap<String, LanguageKey>,
}

impl RegistryBuilder {
    /// A builder with no executors or aliases at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register `template` under `key`, replacing any entry whose key
    /// differs only by case.
    #[must_use]
    pub fn executor(mut self, key: &str, template: impl Into<CommandTemplate>) -> Self {
        self.templates.insert(
            key.to_lowercase(),
            Entry {
                key: key.to_string(),
                template: template.into(),
            },
        );
        self
    }

    /// Route files with extension `ext` to the executor registered as `key`.
    #[must_use]
    pub fn alias(mut self, ext: &str, key: &str) -> Self {
        self.aliases.insert(ext.to_lowercase(), key.to_string());
        self
    }

    /// Freeze the collected entries.
    #[must_use]
    pub fn build(self) -> Registry {
        Registry {
            templates: self.templates,
            aliases: self.aliases,
        }
    }
}
