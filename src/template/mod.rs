use serde::{Deserialize, Serialize};
use std::fmt;

use crate::descriptor::FileDescriptor;

#[cfg(test)]
mod tests;

/// How a template is combined with the file it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Contains `${...}` placeholders that are substituted in place.
    Placeholder,
    /// No placeholders; the file path is appended after a single space.
    Prefix,
}

impl TemplateKind {
    /// Any `$` in the template marks it as a placeholder template.
    #[must_use]
    pub fn detect(template: &str) -> Self {
        if template.contains('$') {
            Self::Placeholder
        } else {
            Self::Prefix
        }
    }
}

/// A command line pattern for one language, e.g. `"python -u"` or
/// `"cd ${directory} && rustc ${fileName} && ${directory}${fileNameWithoutExt}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandTemplate(String);

impl CommandTemplate {
    /// Wrap a template string as-is.
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The raw template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this template substitutes placeholders or takes the path as a suffix.
    #[must_use]
    pub fn kind(&self) -> TemplateKind {
        TemplateKind::detect(&self.0)
    }

    /// Produce the shell command line for `file`.
    ///
    /// Path components are inserted verbatim: nothing is quoted or escaped,
    /// so paths containing spaces or shell metacharacters reach the shell
    /// as-is.
    #[must_use]
    pub fn render(&self, file: &FileDescriptor) -> String {
        match self.kind() {
            TemplateKind::Placeholder => substitute(&self.0, file),
            TemplateKind::Prefix => format!("{} {}", self.0, file.path),
        }
    }
}

impl fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommandTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CommandTemplate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

fn placeholder<'a>(name: &str, file: &'a FileDescriptor) -> Option<&'a str> {
    match name {
        "directory" => Some(&file.directory),
        "directoryWithoutTrailingSlash" => Some(file.directory_without_trailing_slash()),
        "fileName" => Some(&file.name),
        "fileNameWithoutExt" => Some(&file.name_without_extension),
        _ => None,
    }
}

/// Single left-to-right pass over `template`. Substituted values are never
/// scanned again, and unknown `${...}` tokens are copied through untouched.
fn substitute(template: &str, file: &FileDescriptor) -> String {
    let mut out = String::with_capacity(template.len() + file.path.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let known = after
            .find('}')
            .and_then(|end| placeholder(&after[..end], file).map(|value| (end, value)));

        match known {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push_str("${");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
