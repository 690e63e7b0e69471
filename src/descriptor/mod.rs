use anyhow::{Context, Result};
use std::path::{Path, MAIN_SEPARATOR};


/// Type name reported when the caller does not supply one.
pub const UNKNOWN_TYPE_NAME: &str = "unknown";

/// The file a command is resolved for.
///
/// Built fresh for every request and never mutated. `directory` keeps a
/// trailing separator so templates can write `${directory}${fileNameWithoutExt}`
/// to address a compiled binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Absolute path, canonicalized when the filesystem allows it.
    pub path: String,
    /// Containing directory, ending in a path separator.
    pub directory: String,
    /// File name including the extension.
    pub name: String,
    /// File name minus the extension. Empty for dotfiles such as `.bashrc`.
    pub name_without_extension: String,
    /// Lowercased extension, if any.
    pub extension: Option<String>,
    /// Human-readable type label, shown when the file is unsupported and used
    /// as the language key when there is no extension.
    pub ide_type_name: String,
}

impl FileDescriptor {
    /// Describe the file at `path`.
    ///
    /// Symlinks are resolved when `path` exists; otherwise the absolute
    /// literal path is used. `type_name` defaults to [`UNKNOWN_TYPE_NAME`].
    pub fn from_path(path: &Path, type_name: Option<&str>) -> Result<Self> {
        let absolute = std::fs::canonicalize(path)
            .or_else(|_| std::path::absolute(path))
            .with_context(|| format!("Could not resolve path {}", path.display()))?;

        let name = absolute
            .file_name()
            .with_context(|| format!("{} does not name a file", absolute.display()))?
            .to_str()
            .context("File name contains non-UTF-8 characters")?
            .to_string();

        let mut directory = absolute
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !directory.ends_with(MAIN_SEPARATOR) {
            directory.push(MAIN_SEPARATOR);
        }

        let path = absolute
            .to_str()
            .context("File path contains non-UTF-8 characters")?
            .to_string();

        let (stem, extension) = split_name(&name);

        Ok(Self {
            path,
            directory,
            name_without_extension: stem.to_string(),
            extension: extension.map(str::to_lowercase),
            ide_type_name: type_name.unwrap_or(UNKNOWN_TYPE_NAME).to_string(),
            name,
        })
    }

    /// `directory` with trailing separators removed. The filesystem root
    /// stays as-is.
    #[must_use]
    pub fn directory_without_trailing_slash(&self) -> &str {
        let trimmed = self.directory.trim_end_matches(['/', '\\']);
        if trimmed.is_empty() {
            &self.directory
        } else {
            trimmed
        }
    }
}

/// Split a file name at its last dot. A trailing dot yields no extension.
pub(crate) fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((_, "")) => (name, None),
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name, None),
    }
}
