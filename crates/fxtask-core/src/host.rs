use std::io::{self, Write};

use tracing::debug;

/// Final outcome reported to the CI host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskResult {
    Succeeded,
    Failed,
}

impl TaskResult {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
        }
    }
}

/// A contract for the CI system hosting the task.
pub trait TaskHost {
    /// Publishes a named output variable for later pipeline steps.
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()>;
    /// Reports the task outcome.
    fn set_result(&mut self, result: TaskResult, message: &str) -> io::Result<()>;
}

/// Reports to Azure Pipelines through `##vso[...]` logging commands.
#[derive(Debug)]
pub struct AzurePipelines<W: Write> {
    out: W,
}

impl AzurePipelines<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AzurePipelines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn command(&mut self, area: &str, properties: &[(&str, &str)], data: &str) -> io::Result<()> {
        let mut line = format!("##vso[{area}");
        if !properties.is_empty() {
            line.push(' ');
            for (key, value) in properties {
                line.push_str(&format!("{key}={};", escape_property(value)));
            }
        }
        line.push(']');
        line.push_str(&escape_data(data));
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

impl<W: Write> TaskHost for AzurePipelines<W> {
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        debug!("set output {}={}", name, value);
        self.command(
            "task.setvariable",
            &[("variable", name), ("isOutput", "true"), ("issecret", "false")],
            value,
        )
    }

    fn set_result(&mut self, result: TaskResult, message: &str) -> io::Result<()> {
        if result == TaskResult::Failed && !message.is_empty() {
            self.command("task.issue", &[("type", "error")], message)?;
        }
        self.command("task.complete", &[("result", result.as_str())], message)
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%AZP25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(';', "%3B").replace(']', "%5D")
}
