//! Test doubles shared by the CLI unit tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use fxtask_core::{TaskHost, TaskResult};

use crate::executor::CommandRunner;

/// Records every command instead of running it.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<(String, PathBuf)>>,
    fail_on: Option<(String, i32)>,
}

impl RecordingRunner {
    /// Exits with `code` whenever `command` runs in a directory ending in `dir`.
    pub fn failing(command: &str, dir: &str, code: i32) -> Self {
        Self {
            calls: Mutex::default(),
            fail_on: Some((format!("{dir}\0{command}"), code)),
        }
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|(cmd, _)| cmd).collect()
    }

    pub fn commands_in(&self, dir: &Path) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(_, cwd)| cwd == dir)
            .map(|(cmd, _)| cmd)
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn exec(&self, command: &str, cwd: &Path) -> Result<i32> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), cwd.to_path_buf()));

        if let Some((key, code)) = &self.fail_on {
            let dir = cwd.file_name().unwrap_or_default().to_string_lossy();
            if *key == format!("{dir}\0{command}") {
                return Ok(*code);
            }
        }
        Ok(0)
    }
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub outputs: Vec<(String, String)>,
    pub results: Vec<(TaskResult, String)>,
}

impl RecordingHost {
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl TaskHost for RecordingHost {
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.outputs.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_result(&mut self, result: TaskResult, message: &str) -> io::Result<()> {
        self.results.push((result, message.to_string()));
        Ok(())
    }
}

/// Writes `body` at `rel` under `root`, creating parent directories.
pub fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

/// A TeamsFx project with every capability directory and a language set.
pub fn project(language: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        ".fx/env.default.json",
        &format!(r#"{{"solution": {{"programmingLanguage": "{language}"}}}}"#),
    );
    for cap in ["tabs", "bot", "SPFx"] {
        fs::create_dir_all(dir.path().join(cap)).unwrap();
    }
    dir
}
