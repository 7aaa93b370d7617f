use anyhow::Result;
use clap::Parser;

use fxtask_core::{
    credentials, AzurePipelines, Capability, ErrorKind, TaskError, TaskHost, TaskInputs,
    TaskResult,
};
use fxtask_core::inputs::parse_bool_input;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod executor;
mod operations;
mod styles;
#[cfg(test)]
mod testing;

use executor::{CommandRunner, ShellRunner};
use operations::TaskContext;

use styles as s;

/// The command-line interface for fxtask.
///
/// Every flag falls back to the matching Azure Pipelines task input
/// variable so the binary runs unchanged as a pipeline step.
#[derive(Debug, Parser)]
#[command(name = "fxtask")]
#[command(version)]
#[command(styles = s::get_clap_styles())]
#[command(about = "Build, provision, deploy and publish TeamsFx projects from a pipeline")]
#[command(
    long_about = "fxtask runs one TeamsFx workflow step inside a CI pipeline and reports
the outcome and any produced file paths back to the pipeline as output variables.

Operations:
  build       Install and build each capability (tabs, bot, SPFx) with npm
  provision   Provision cloud resources with the TeamsFx CLI
  deploy      Deploy the project to the provisioned resources
  pack        Build the Teams app package
  validate    Validate the Teams app manifest
  publish     Publish the Teams app to the tenant app catalog
"
)]
pub(crate) struct Cli {
    /// Root directory of the TeamsFx project.
    #[arg(long, env = "INPUT_PROJECTROOT")]
    project_root: Option<String>,
    /// One of build, provision, deploy, pack, validate, publish.
    #[arg(long, env = "INPUT_OPERATIONTYPE")]
    operation_type: Option<String>,
    /// Comma-separated subset of tabs, bot, SPFx. Defaults to all.
    #[arg(long, env = "INPUT_CAPABILITIES")]
    capabilities: Option<String>,
    /// Version of @microsoft/teamsfx-cli to run through npx.
    #[arg(long, env = "INPUT_CLIVERSION")]
    cli_version: Option<String>,
    /// Do not require the Azure and M365 credential variables up front.
    ///
    /// Read like a pipeline boolean: only a case-insensitive `true` enables it.
    #[arg(
        long,
        env = "INPUT_SKIPCREDENTIALCHECK",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    skip_credential_check: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let mut host = AzurePipelines::stdout();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            err.print()?;
            report(&mut host, Err(err.into()))?;
            return Ok(());
        }
    };
    debug!("parsed cli arguments: {:?}", cli);

    let outcome = execute(&cli, &ShellRunner, &mut host, |name| std::env::var(name).ok());
    report(&mut host, outcome)?;
    Ok(())
}

/// Validates inputs and runs the requested operation.
fn execute<F>(
    cli: &Cli,
    runner: &dyn CommandRunner,
    host: &mut dyn TaskHost,
    env: F,
) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let inputs = TaskInputs::from_raw(
        cli.project_root.as_deref(),
        cli.operation_type.as_deref(),
        cli.capabilities.as_deref(),
    )?;

    if parse_bool_input(cli.skip_credential_check.as_deref()) {
        debug!("credential check skipped");
    } else {
        credentials::ensure_present(inputs.operation, inputs.uses(Capability::Spfx), env)?;
    }

    let mut ctx = TaskContext {
        runner,
        host,
        cli_version: cli.cli_version.clone(),
    };
    operations::run(&mut ctx, &inputs)
}

/// Hands the outcome to the host; every failure ends up here exactly once.
fn report(host: &mut dyn TaskHost, outcome: Result<()>) -> std::io::Result<()> {
    match outcome {
        Ok(()) => {
            info!("task succeeded");
            host.set_result(TaskResult::Succeeded, "")
        }
        Err(err) => {
            match err.downcast_ref::<TaskError>().map(TaskError::kind) {
                Some(ErrorKind::System) => error!("internal error: {err:#}"),
                _ => error!("{err:#}"),
            }
            host.set_result(TaskResult::Failed, &failure_message(&err))
        }
    }
}

fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TaskError>() {
        Some(task_error) => task_error.report(),
        None => format!("{err:#}"),
    }
}
