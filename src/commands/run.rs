use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;

use code_runner::{runner, CommandString, Config, FileDescriptor, Registry, Resolver};

/// Exit code for files whose language has no executor.
const UNSUPPORTED_EXIT: u8 = 2;

pub fn cmd_run(
    config: &Config,
    registry: &Registry,
    file: &Path,
    type_name: Option<&str>,
    dry_run: bool,
) -> Result<ExitCode> {
    let Some(command) = resolve(registry, file, type_name)? else {
        return Ok(ExitCode::from(UNSUPPORTED_EXIT));
    };

    if dry_run {
        println!("{command}");
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!("[Running] {command}");
    match runner::run(&command, &config.shell()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

pub fn cmd_resolve(registry: &Registry, file: &Path, type_name: Option<&str>) -> Result<ExitCode> {
    Ok(match resolve(registry, file, type_name)? {
        Some(command) => {
            println!("{command}");
            ExitCode::SUCCESS
        }
        None => ExitCode::from(UNSUPPORTED_EXIT),
    })
}

/// Resolve `file`, printing the notice for unsupported types. `Ok(None)`
/// means the file type is not supported.
fn resolve(registry: &Registry, file: &Path, type_name: Option<&str>) -> Result<Option<CommandString>> {
    let descriptor = FileDescriptor::from_path(file, type_name)?;
    match Resolver::new(registry).resolve(&descriptor) {
        Ok(command) => Ok(Some(command)),
        Err(unsupported) => {
            eprintln!("{unsupported}");
            Ok(None)
        }
    }
}
