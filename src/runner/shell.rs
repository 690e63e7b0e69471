use std::path::Path;
use std::process::Command;

/// The shell a command string is handed to, plus the flag that makes it read
/// the command from its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    /// Program name or path, looked up through the caller's own `PATH`.
    pub program: String,
    /// Argument that precedes the command line, e.g. `-c` or `/C`.
    pub flag: &'static str,
}

impl Shell {
    /// `sh -c` on unix, `cmd /C` on Windows.
    #[must_use]
    pub fn platform_default() -> Self {
        #[cfg(target_os = "windows")]
        return Self::from_program("cmd");
        #[cfg(not(target_os = "windows"))]
        return Self::from_program("sh");
    }

    /// Pick the command flag from the program's file name.
    #[must_use]
    pub fn from_program(program: &str) -> Self {
        let stem = Path::new(program)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(program)
            .to_ascii_lowercase();
        let flag = match stem.as_str() {
            "cmd" => "/C",
            "powershell" | "pwsh" => "-Command",
            _ => "-c",
        };
        Self {
            program: program.to_string(),
            flag,
        }
    }

    pub(super) fn command(&self, line: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(self.flag).arg(line);
        cmd
    }
}
