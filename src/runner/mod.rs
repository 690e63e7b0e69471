mod shell;

pub use shell::Shell;

use tracing::info;

use crate::resolver::CommandString;


/// A resolved command could not be run to completion.
///
/// Both variants are reported to the user and turned into an exit code; none
/// of them abort the process.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The shell itself could not be started.
    #[error("Failed to start `{shell}` to run: {command}")]
    Spawn {
        /// Shell program that failed to start.
        shell: String,
        /// Command line it was given.
        command: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },
    /// The command ran and exited unsuccessfully.
    #[error("Command exited with {}: {command}", describe_code(.code.as_ref().copied()))]
    Exit {
        /// Command line that failed.
        command: String,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
    },
}

impl RunError {
    /// Exit code to report for this failure: the child's own code when it
    /// fits in a byte, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Exit { code: Some(code), .. } => u8::try_from(*code)
                .ok()
                .filter(|&c| c != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    code.map_or_else(|| "no status (killed by signal)".to_string(), |c| format!("status {c}"))
}

/// Run `command` in `shell`, inheriting stdio, and wait for it to finish.
pub fn run(command: &CommandString, shell: &Shell) -> Result<(), RunError> {
    info!(shell = %shell.program, %command, "running");

    let status = shell
        .command(command.as_str())
        .status()
        .map_err(|source| RunError::Spawn {
            shell: shell.program.clone(),
            command: command.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(RunError::Exit {
            command: command.to_string(),
            code: status.code(),
        })
    }
}
