use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{anyhow, Result};
use tracing::{info, instrument, warn};

use fxtask_core::config::{self, app_package_path, env_default_path};
use fxtask_core::constants::*;
use fxtask_core::{Capability, OperationType, TaskError, TaskHost, TaskInputs};

use crate::executor::{run_checked, CommandRunner};

/// Collaborators shared by every operation.
pub struct TaskContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub host: &'a mut dyn TaskHost,
    /// Pins the `@microsoft/teamsfx-cli` version run through npx.
    pub cli_version: Option<String>,
}

/// Runs the routine selected by `inputs.operation`.
#[instrument(skip_all, fields(operation = %inputs.operation))]
pub fn run(ctx: &mut TaskContext<'_>, inputs: &TaskInputs) -> Result<()> {
    match inputs.operation {
        OperationType::Build => build(ctx, inputs),
        OperationType::Provision => provision(ctx, inputs),
        OperationType::Deploy => deploy(ctx, inputs),
        OperationType::Pack => pack(ctx, inputs),
        OperationType::Validate => validate(ctx, inputs),
        OperationType::Publish => publish(ctx, inputs),
    }
}

struct CapabilityBuild {
    capability: Capability,
    dir: PathBuf,
    commands: &'static [&'static str],
}

/// Builds every requested capability present in the project.
///
/// Command lists are resolved for all capabilities before anything runs.
/// Capabilities then build concurrently, each one's commands in order.
fn build(ctx: &mut TaskContext<'_>, inputs: &TaskInputs) -> Result<()> {
    let language = config::read_programming_language(&inputs.project_root)?;

    let mut plan = Vec::new();
    for &capability in &inputs.capabilities {
        let commands = fxtask_ext_node::build_commands(capability.as_str(), language.as_str())?;
        let dir = inputs.capability_dir(capability);
        if !dir.is_dir() {
            info!(target: "fxtask", "skip {}: {} not found", capability, dir.display());
            continue;
        }
        plan.push(CapabilityBuild {
            capability,
            dir,
            commands,
        });
    }

    if plan.is_empty() {
        warn!("no requested capability exists under {}", inputs.project_root.display());
        return Ok(());
    }

    let runner = ctx.runner;
    let results = thread::scope(|scope| {
        let handles = plan
            .iter()
            .map(|item| scope.spawn(move || build_capability(runner, item)))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .zip(&plan)
            .map(|(handle, item)| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(anyhow!("build of {} panicked", item.capability)))
            })
            .collect::<Vec<_>>()
    });

    results.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(())
}

fn build_capability(runner: &dyn CommandRunner, item: &CapabilityBuild) -> Result<()> {
    info!(target: "fxtask", "build {} in {}", item.capability, item.dir.display());
    for command in item.commands {
        run_checked(runner, command, &item.dir)?;
    }
    Ok(())
}

fn teamsfx(ctx: &TaskContext<'_>, operation: OperationType, root: &Path) -> Result<()> {
    let subcommand = operation.teamsfx_subcommand().ok_or_else(|| {
        TaskError::Internal(format!("operation '{operation}' has no TeamsFx CLI command"))
    })?;
    let command = fxtask_ext_node::teamsfx_command(subcommand, ctx.cli_version.as_deref());
    run_checked(ctx.runner, &command, root)
}

fn provision(ctx: &mut TaskContext<'_>, inputs: &TaskInputs) -> Result<()> {
    teamsfx(ctx, OperationType::Provision, &inputs.project_root)?;
    let config_path = env_default_path(&inputs.project_root);
    ctx.host
        .set_output(OUTPUT_CONFIG_FILE_PATH, &config_path.display().to_string())?;
    Ok(())
}

fn deploy(ctx: &mut TaskContext<'_>, inputs: &TaskInputs) -> Result<()> {
    teamsfx(ctx, OperationType::Deploy, &inputs.project_root)?;
    if inputs.uses(Capability::Spfx) {
        let package = config::read_sharepoint_package_path(&inputs.capability_dir(Capability::Spfx))?;
        ctx.host
            .set_output(OUTPUT_SHAREPOINT_PACKAGE_PATH, &package.display().to_string())?;
    }
    Ok(())
}

fn pack(ctx: &mut TaskContext<'_>, inputs: &TaskInputs) -> Result<()> {
    teamsfx(ctx, OperationType::Pack, &inputs.project_root)?;
    set_package_zip_path(ctx, &inputs.project_root)
}

fn validate(ctx: &mut TaskContext<'_>, inputs: &TaskInputs) -> Result<()> {
    teamsfx(ctx, OperationType::Validate, &inputs.project_root)
}

fn publish(ctx: &mut TaskContext<'_>, inputs: &TaskInputs) -> Result<()> {
    teamsfx(ctx, OperationType::Publish, &inputs.project_root)?;
    set_package_zip_path(ctx, &inputs.project_root)
}

fn set_package_zip_path(ctx: &mut TaskContext<'_>, root: &Path) -> Result<()> {
    let package = app_package_path(root);
    if !package.is_file() {
        warn!("app package not found at {}", package.display());
        return Ok(());
    }
    ctx.host
        .set_output(OUTPUT_PACKAGE_ZIP_PATH, &package.display().to_string())?;
    Ok(())
}
