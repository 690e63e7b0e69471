//! End-to-end checks of the `coderun` binary's output and exit codes.
#![cfg(unix)]

use std::path::Path;
use std::process::{Command, Output};

/// Run `coderun` with `home` as the home directory, so the user's real
/// config is never read.
fn coderun(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coderun"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_config(home: &Path, content: &str) {
    let dir = home.join(".config").join("code-runner");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
fn test_unsupported_prints_one_line_and_exits_2() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("data.xyz123");
    std::fs::write(&file, "").unwrap();

    let out = coderun(home.path(), &["run", file.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(
        stderr,
        "File type unknown with extension .xyz123 is not supported.\n"
    );

    let out = coderun(home.path(), &["resolve", file.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_resolve_prints_command() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("hello.py");
    std::fs::write(&file, "print('hi')").unwrap();
    let canonical = std::fs::canonicalize(&file).unwrap();

    let out = coderun(home.path(), &["resolve", file.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!("python -u {}\n", canonical.display())
    );
}

#[test]
fn test_dry_run_prints_without_running() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "[executors]\nshellscript = \"sh\"\n");
    let marker = home.path().join("ran");
    let script = home.path().join("mark.sh");
    std::fs::write(&script, format!("touch {}\n", marker.display())).unwrap();
    let canonical = std::fs::canonicalize(&script).unwrap();

    let out = coderun(home.path(), &["run", "--dry-run", script.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!("sh {}\n", canonical.display())
    );
    assert!(!marker.exists());

    let out = coderun(home.path(), &["run", script.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    assert!(marker.exists());
}

#[test]
fn test_failing_command_propagates_exit_code() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "[executors]\nshellscript = \"sh\"\n");
    let script = home.path().join("fail.sh");
    std::fs::write(&script, "exit 3\n").unwrap();

    let out = coderun(home.path(), &["run", script.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Command exited with status 3"), "{stderr}");
}

#[test]
fn test_config_executor_applies_to_languages() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "[executors]\nkotlin = \"kotlinc -script\"\n");

    let out = coderun(home.path(), &["languages"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.lines().any(|l| l.starts_with("kotlin ") && l.ends_with("kotlinc -script")));
}
