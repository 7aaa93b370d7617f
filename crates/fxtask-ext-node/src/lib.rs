//! npm and TeamsFx CLI command mappings for TeamsFx capabilities.

use fxtask_core::constants::TEAMSFX_CLI_PACKAGE;
use fxtask_core::TaskError;

const NPM_INSTALL_AND_BUILD: &[&str] = &["npm install", "npm run build"];
const NPM_INSTALL: &[&str] = &["npm install"];

pub fn default_capabilities() -> &'static [&'static str] {
    &["tabs", "bot", "SPFx"]
}

/// Returns the ordered build commands for a capability.
///
/// Only `bot` is keyed by language; other capabilities ignore `language`.
///
/// # Errors
/// An unknown capability, or an unknown language for `bot`, is a
/// [`TaskError::Internal`].
pub fn build_commands(capability: &str, language: &str) -> Result<&'static [&'static str], TaskError> {
    match (capability, language) {
        ("tabs", _) => Ok(NPM_INSTALL_AND_BUILD),
        ("bot", "javascript") => Ok(NPM_INSTALL),
        ("bot", "typescript") => Ok(NPM_INSTALL_AND_BUILD),
        ("SPFx", _) => Ok(NPM_INSTALL_AND_BUILD),
        ("bot", _) => Err(TaskError::Internal(format!(
            "no build commands for capability 'bot' in language '{language}'"
        ))),
        _ => Err(TaskError::Internal(format!(
            "no build commands for capability '{capability}'"
        ))),
    }
}

/// Renders a TeamsFx CLI invocation through `npx`.
pub fn teamsfx_command(subcommand: &str, cli_version: Option<&str>) -> String {
    match cli_version.map(str::trim).filter(|v| !v.is_empty()) {
        Some(version) => format!("npx {TEAMSFX_CLI_PACKAGE}@{version} {subcommand}"),
        None => format!("npx {TEAMSFX_CLI_PACKAGE} {subcommand}"),
    }
}
