use std::fmt;

use tracing::debug;

use crate::descriptor::FileDescriptor;
use crate::registry::Registry;


/// A rendered command line, ready to hand to a shell verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandString(String);

impl CommandString {
    /// The command line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the command line.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CommandString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CommandString {
    fn from(line: String) -> Self {
        Self(line)
    }
}

impl AsRef<str> for CommandString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// No executor is registered for the file's language.
///
/// An expected outcome for unknown file types, meant to be shown to the user
/// as a one-line notice rather than treated as a failure of the tool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("File type {display_type_name} with {} is not supported.", describe_extension(.extension.as_deref()))]
pub struct Unsupported {
    /// Type name reported for the file.
    pub display_type_name: String,
    /// The file's extension, if it has one.
    pub extension: Option<String>,
}

fn describe_extension(extension: Option<&str>) -> String {
    extension.map_or_else(|| "no extension".to_string(), |ext| format!("extension .{ext}"))
}

/// Turns a [`FileDescriptor`] into a command line using a [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r Registry,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(Registry::defaults())
    }
}

impl<'r> Resolver<'r> {
    /// Resolve against `registry`.
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// The registry this resolver reads.
    #[must_use]
    pub const fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Resolve the command that runs `file`.
    ///
    /// Pure: the same descriptor always yields the same result.
    pub fn resolve(&self, file: &FileDescriptor) -> Result<CommandString, Unsupported> {
        let key = self
            .registry
            .canonical_key_for(file.extension.as_deref(), &file.ide_type_name);

        let Some(template) = self.registry.template_for(&key) else {
            debug!(%key, file = %file.path, "no executor registered");
            return Err(Unsupported {
                display_type_name: file.ide_type_name.clone(),
                extension: file.extension.clone(),
            });
        };

        debug!(%key, %template, kind = ?template.kind(), "resolved executor");
        Ok(CommandString(template.render(file)))
    }
}
