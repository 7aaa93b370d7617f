use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::{info, instrument};

/// Runs a command string in a working directory and reports its exit code.
pub trait CommandRunner: Sync {
    fn exec(&self, command: &str, cwd: &Path) -> Result<i32>;
}

/// Runs commands through the platform shell with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    #[instrument(skip(self))]
    fn exec(&self, command: &str, cwd: &Path) -> Result<i32> {
        let status = shell(command)
            .current_dir(cwd)
            .status()
            .with_context(|| format!("failed to start command '{}' in {}", command, cwd.display()))?;

        // Killed by a signal.
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    use std::os::windows::process::CommandExt;

    // cmd.exe parses its own command line; MSVC quoting would mangle quotes.
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").raw_arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

/// Runs `command` and fails unless it exits with code 0.
pub fn run_checked(runner: &dyn CommandRunner, command: &str, cwd: &Path) -> Result<()> {
    info!(target: "fxtask", "run '{}' in {}", command, cwd.display());
    let code = runner.exec(command, cwd)?;
    if code != 0 {
        bail!(
            "command '{}' failed with exit code {} in {}",
            command,
            code,
            cwd.display()
        );
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn shell_runner_reports_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ShellRunner.exec("exit 3", dir.path()).unwrap(), 3);
        assert_eq!(ShellRunner.exec("true", dir.path()).unwrap(), 0);
    }

    #[test]
    fn shell_runner_uses_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "x").unwrap();
        assert_eq!(ShellRunner.exec("test -f marker", dir.path()).unwrap(), 0);
    }

    #[test]
    fn missing_working_directory_fails_to_start() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");
        let err = ShellRunner.exec("true", &gone).expect_err("must fail");
        assert!(err.to_string().contains("failed to start command"));
    }

    #[test]
    fn run_checked_rejects_non_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_checked(&ShellRunner, "exit 2", dir.path()).expect_err("must fail");
        assert!(err.to_string().contains("failed with exit code 2"));
        run_checked(&ShellRunner, "true", dir.path()).expect("zero exit should pass");
    }
}
